//! Static quiz copy.
//!
//! Every question, option, and interstitial shown by the quiz. Markers are
//! attached here and nowhere else.

use quizflow_types::{Choice, InfoId, InfoStep, InfoStyle, Marker, QuestionId, QuestionStep};

pub(crate) const AGE: QuestionStep = QuestionStep {
    id: QuestionId::Age,
    title: "How old are you?",
    subtitle: Some("(2-minute hair loss assessment - get your personal plan)"),
    options: &[
        Choice::plain("Under 30"),
        Choice::plain("30-39"),
        Choice::plain("40-49"),
        Choice::plain("50-59"),
        Choice::plain("60+"),
    ],
};

pub(crate) const GENDER: QuestionStep = QuestionStep {
    id: QuestionId::Gender,
    title: "Are you male or female?",
    subtitle: None,
    options: &[
        Choice::plain("Male"),
        Choice::plain("Female"),
        Choice::plain("Prefer not to say"),
    ],
};

pub(crate) const MAIN_PROBLEM: QuestionStep = QuestionStep {
    id: QuestionId::MainProblem,
    title: "How does your hair loss make you feel right now?",
    subtitle: None,
    options: &[
        Choice::tagged(
            "I'm terrified I'll go completely bald",
            &[Marker::SevereDistress],
        ),
        Choice::plain("I avoid mirrors and photos"),
        Choice::plain("I dread washing my hair (the clumps in the drain)"),
        Choice::tagged("I don't feel feminine anymore", &[Marker::LostFemininity]),
        Choice::plain("I hide my thin spots with hats/scarves"),
        Choice::tagged(
            "I've lost all confidence in how I look",
            &[Marker::SevereDistress],
        ),
    ],
};

pub(crate) const LIFE_SITUATION: QuestionStep = QuestionStep {
    id: QuestionId::LifeSituation,
    title: "Which describes your situation?",
    subtitle: None,
    options: &[
        Choice::tagged(
            "I'm postpartum and my hair is falling out in chunks",
            &[Marker::Postpartum],
        ),
        Choice::plain("I'm going through menopause/perimenopause"),
        Choice::plain("I have PCOS or hormonal imbalances"),
        Choice::plain("I've been under extreme stress lately"),
        Choice::plain("I just noticed my hair getting thinner"),
        Choice::plain("None of these apply to me"),
    ],
};

pub(crate) const HORMONAL_IMPACT: QuestionStep = QuestionStep {
    id: QuestionId::HormonalImpact,
    title: "Do you think hormones are causing your hair loss?",
    subtitle: None,
    options: &[
        Choice::tagged(
            "Yes, definitely - it started after pregnancy/menopause",
            &[Marker::HormonesCertain],
        ),
        Choice::plain("Yes, I think so - it coincided with hormonal changes"),
        Choice::plain("Maybe - I've heard DHT affects women too"),
        Choice::plain("I'm not sure what's causing it"),
        Choice::plain("No, I think it's just stress/genetics"),
    ],
};

pub(crate) const IDENTITY_FEMININITY: QuestionStep = QuestionStep {
    id: QuestionId::IdentityFemininity,
    title: "How is hair loss affecting your sense of being a woman?",
    subtitle: None,
    options: &[
        Choice::tagged("I don't feel feminine anymore", &[Marker::LostFemininity]),
        Choice::plain("I feel like I'm aging too fast"),
        Choice::plain("I avoid intimate situations"),
        Choice::plain("I feel less attractive to my partner"),
        Choice::plain("I'm embarrassed in social situations"),
        Choice::plain("It's affecting everything about how I see myself"),
    ],
};

pub(crate) const DHT_AWARENESS: QuestionStep = QuestionStep {
    id: QuestionId::DhtAwareness,
    title: "Have you heard about DHT (the hormone that causes hair loss)?",
    subtitle: None,
    options: &[
        Choice::tagged("Yes, I know DHT is the main culprit", &[Marker::KnowsDht]),
        Choice::plain("I've heard of it but don't know much"),
        Choice::plain("No, but I want to learn"),
        Choice::plain("I think my hair loss is just genetic"),
        Choice::plain("I'm not sure what's causing my hair loss"),
    ],
};

pub(crate) const TREATMENT_WILLINGNESS: QuestionStep = QuestionStep {
    id: QuestionId::TreatmentWillingness,
    title: "How do you feel about taking medication for hair loss?",
    subtitle: None,
    options: &[
        Choice::plain("I want to avoid pharmaceutical drugs"),
        Choice::tagged("I'm open to natural solutions", &[Marker::WantsNatural]),
        Choice::plain("I've tried Propecia but had side effects"),
        Choice::plain("I'm scared of the side effects"),
        Choice::plain("I'll try anything that works"),
    ],
};

pub(crate) const COMPETITOR_AWARENESS: QuestionStep = QuestionStep {
    id: QuestionId::CompetitorAwareness,
    title: "What have you already tried for your hair loss?",
    subtitle: None,
    options: &[
        Choice::plain("Expensive supplements like Nutrafol/Viviscal"),
        Choice::plain("Minoxidil (Rogaine) but didn't like the side effects"),
        Choice::plain("Biotin, collagen, and other vitamins"),
        Choice::plain("Saw palmetto or other DHT blockers"),
        Choice::plain("Special shampoos and topical treatments"),
        Choice::plain("Nothing yet - this is my first attempt"),
    ],
};

pub(crate) const SOCIAL_IMPACT: QuestionStep = QuestionStep {
    id: QuestionId::SocialImpact,
    title: "How is hair loss affecting your daily life?",
    subtitle: None,
    options: &[
        Choice::tagged(
            "People at work are noticing my thin spots",
            &[Marker::NoticedAtWork, Marker::SevereSocialImpact],
        ),
        Choice::plain("I check every mirror obsessively"),
        Choice::plain("I avoid social situations and photos"),
        Choice::plain("I spend forever styling to hide bald patches"),
        Choice::plain("I wear hats constantly"),
        Choice::tagged(
            "My confidence is completely shot",
            &[Marker::SevereSocialImpact],
        ),
    ],
};

pub(crate) const NOT_ALONE: InfoStep = InfoStep {
    id: InfoId::NotAlone,
    title: "💪 You're Not Alone",
    content: "Millions of women worldwide experience hair loss. The ones who get their hair back? \
              They found what actually blocks DHT naturally and stuck with it.",
    style: InfoStyle::Reassurance,
};

pub(crate) const RELATIONSHIPS: QuestionStep = QuestionStep {
    id: QuestionId::Relationships,
    title: "How is this affecting your relationships?",
    subtitle: None,
    options: &[
        Choice::plain("My partner tries to reassure me but I don't believe them"),
        Choice::tagged(
            "I avoid intimacy because I'm embarrassed",
            &[Marker::AvoidsIntimacy],
        ),
        Choice::plain("I cancel plans because of \"bad hair days\""),
        Choice::plain("My family says I'm obsessing over it"),
        Choice::plain("I feel like people are staring at my scalp"),
        Choice::plain("I don't feel like myself in relationships anymore"),
    ],
};

pub(crate) const HOW_DESPERATELY: QuestionStep = QuestionStep {
    id: QuestionId::HowDesperately,
    title: "How desperately do you want to stop your hair loss?",
    subtitle: None,
    options: &[
        Choice::plain("I cry in the shower looking at hair clumps"),
        Choice::plain("I've spent hundreds on products that don't work"),
        Choice::plain("I've considered expensive procedures like PRP"),
        Choice::plain("I Google \"hair loss cure\" every day"),
        Choice::plain("I've thought about wearing wigs"),
        Choice::tagged(
            "I've almost given up hope completely",
            &[Marker::NearlyHopeless],
        ),
    ],
};

pub(crate) const HIDDEN_CAUSE: InfoStep = InfoStep {
    id: InfoId::HiddenCause,
    title: "🔬 What Most Women Don't Know",
    content: "Your hair loss isn't \"just genetics.\" DHT hormone is literally strangling your \
              follicles. Block the DHT naturally, and your hair can start growing again.",
    style: InfoStyle::Insight,
};

pub(crate) const HOW_LONG: QuestionStep = QuestionStep {
    id: QuestionId::HowLong,
    title: "How long has your hair been thinning?",
    subtitle: None,
    options: &[
        Choice::tagged("Just started and I'm panicking", &[Marker::JustStarted]),
        Choice::plain("About 6 months and getting worse"),
        Choice::plain("1-2 years and I'm desperate"),
        Choice::plain("Years - I've tried everything"),
        Choice::tagged("Since pregnancy/menopause", &[Marker::SincePregnancy]),
        Choice::tagged(
            "So long I forgot what thick hair feels like",
            &[Marker::YearsOfThinning],
        ),
    ],
};

pub(crate) const BIGGEST_FEAR: QuestionStep = QuestionStep {
    id: QuestionId::BiggestFear,
    title: "What's your biggest fear about your hair loss?",
    subtitle: None,
    options: &[
        Choice::tagged("Going completely bald", &[Marker::FearsBaldness]),
        Choice::tagged("Looking old and unattractive", &[Marker::FearsLookingOld]),
        Choice::plain("My partner losing interest in me"),
        Choice::plain("Never feeling confident again"),
        Choice::plain("People talking about my appearance"),
        Choice::plain("Needing to wear wigs for the rest of my life"),
    ],
};

pub(crate) const NATURAL_BLOCKER: InfoStep = InfoStep {
    id: InfoId::NaturalBlocker,
    title: "⚡ The Natural DHT Blocker That Actually Works",
    content: "Clinical studies show pumpkin seed oil can increase hair count by 40%. Unlike drugs, \
              it has no side effects. Unlike expensive supplements, it targets the root cause: DHT.",
    style: InfoStyle::Evidence,
};

pub(crate) const WHAT_FAILED: QuestionStep = QuestionStep {
    id: QuestionId::WhatFailed,
    title: "What have you wasted money on that didn't work?",
    subtitle: None,
    options: &[
        Choice::plain("Nutrafol or Viviscal (expensive but no results)"),
        Choice::plain("Minoxidil that made my scalp irritated"),
        Choice::plain("Dozens of biotin supplements and vitamins"),
        Choice::plain("Expensive shampoos that promised miracles"),
        Choice::plain("Scalp treatments at salons"),
        Choice::plain("Nothing yet - but I'm afraid to try things"),
    ],
};

pub(crate) const QUALIFICATION_BUDGET: QuestionStep = QuestionStep {
    id: QuestionId::QualificationBudget,
    title: "How serious are you about stopping your hair loss?",
    subtitle: None,
    options: &[
        Choice::plain("I'll invest in anything that actually works"),
        Choice::plain("I'm ready for a real solution, not another fake promise"),
        Choice::plain("I want to try it but money is tight"),
        Choice::plain("I'm comparing options right now"),
        Choice::plain("Just researching for now"),
    ],
};

pub(crate) const HOW_BADLY_NEED: QuestionStep = QuestionStep {
    id: QuestionId::HowBadlyNeed,
    title: "How badly do you need this to work?",
    subtitle: None,
    options: &[
        Choice::tagged(
            "DESPERATELY - I can't lose any more hair",
            &[Marker::UrgentNeed],
        ),
        Choice::plain("Very badly - This is ruining my life"),
        Choice::plain("Pretty badly - I need to stop this now"),
        Choice::plain("Somewhat - I want to prevent it getting worse"),
        Choice::plain("Just want to learn more about natural options"),
    ],
};

/// Progress messages shown while the "analysis" runs, in display order.
pub const ANALYSIS_MESSAGES: [&str; 5] = [
    "🧠 Looking at your answers...",
    "⚡ Checking how bad your hair loss is...",
    "📊 Figuring out the best plan for you...",
    "🎯 Finding what will work for your situation...",
    "✅ Making your personal plan...",
];

pub const ANALYSIS_HEADING: &str = "🧠 Analyzing Your Hair Loss Profile...";
pub const ANALYSIS_FOOTER: &str = "Creating the perfect plan for your exact situation...";

pub const INTRO_HEADLINE: &str = "Struggling with hair loss and thinning?";
pub const INTRO_TAGLINE: &str = "Get your assessment in just 2 minutes!";
pub const INTRO_BODY: &str = "Get your personalized hair loss assessment and discover what's really \
                              causing your thinning - free analysis.";
pub const START_BUTTON_TEXT: &str = "Start Assessment";
