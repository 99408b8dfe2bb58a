//! Result page selection.
//!
//! Decides which conditional blocks the result page shows. Copy lives next
//! to the selection logic; layout is the renderer's business.

use quizflow_types::{AnswerMap, Marker, Persona, QuestionId, Severity};

use crate::scoring::{self, answered_with};

pub const RESULT_HEADLINE: &str = "Your Personal Hair Restoration Plan";
pub const RESULT_SUBHEADLINE: &str = "Based on your specific situation and hair loss pattern";
pub const CTA_BUTTON_TEXT: &str = "✅ YES - Claim My 50% OFF (Limited Time) →";
pub const DECLINE_BUTTON_TEXT: &str = "No thanks, I'll keep suffering while Big Pharma profits";
pub const POPUP_HEADLINE: &str = "Don't Wait Another Day";
pub const POPUP_BODY: &str = "Every day you wait is another day of watching your hair disappear. \
                              While you're hesitating, your follicles are getting weaker. \
                              Don't let another month pass by.";
pub const POPUP_CTA_TEXT: &str = "Start My Hair Restoration";
pub const SUCCESS_RATE_PERCENT: u8 = 94;

pub const NEXT_STEPS: [&str; 3] = [
    "Discover your custom solution below",
    "See real people's hair restoration stories",
    "Start growing your hair back",
];

/// One urgency message on the result page.
///
/// Variants are listed in priority order; the first matching one is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyBlock {
    FearsLookingOld,
    YearsOfThinning,
    DesperateNeed,
    JustStarted,
    SincePregnancy,
    FearsBaldness,
    Fallback,
}

const URGENCY_PRIORITY: [(QuestionId, Marker, UrgencyBlock); 6] = [
    (
        QuestionId::BiggestFear,
        Marker::FearsLookingOld,
        UrgencyBlock::FearsLookingOld,
    ),
    (
        QuestionId::HowLong,
        Marker::YearsOfThinning,
        UrgencyBlock::YearsOfThinning,
    ),
    (
        QuestionId::HowBadlyNeed,
        Marker::UrgentNeed,
        UrgencyBlock::DesperateNeed,
    ),
    (QuestionId::HowLong, Marker::JustStarted, UrgencyBlock::JustStarted),
    (
        QuestionId::HowLong,
        Marker::SincePregnancy,
        UrgencyBlock::SincePregnancy,
    ),
    (
        QuestionId::BiggestFear,
        Marker::FearsBaldness,
        UrgencyBlock::FearsBaldness,
    ),
];

impl UrgencyBlock {
    #[must_use]
    pub fn select(answers: &AnswerMap) -> Self {
        URGENCY_PRIORITY
            .iter()
            .find(|(question, marker, _)| answered_with(answers, *question, *marker))
            .map_or(UrgencyBlock::Fallback, |(_, _, block)| *block)
    }

    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            UrgencyBlock::FearsLookingOld => "Your confidence is on the line RIGHT NOW.",
            UrgencyBlock::YearsOfThinning => "You've already lost YEARS to this hair loss.",
            UrgencyBlock::DesperateNeed => "You said you can't lose ANY MORE hair.",
            UrgencyBlock::JustStarted => "You're at a CRITICAL window right now.",
            UrgencyBlock::SincePregnancy => {
                "Hormonal hair loss gets WORSE if you don't address the root cause."
            }
            UrgencyBlock::FearsBaldness => "Every day of hair loss is your follicles crying for help.",
            UrgencyBlock::Fallback => "Your hair loss won't fix itself.",
        }
    }

    #[must_use]
    pub const fn body(self) -> &'static str {
        match self {
            UrgencyBlock::FearsLookingOld => {
                "While you're reading this, your hair is getting thinner. How many more bad hair \
                 days can you afford before it's too late?"
            }
            UrgencyBlock::YearsOfThinning => {
                "Every day you wait is another day of hiding under hats. Don't let this steal \
                 another month from your confidence."
            }
            UrgencyBlock::DesperateNeed => {
                "Then why are you still reading instead of trying it? Every day you delay is \
                 another day of hair loss."
            }
            UrgencyBlock::JustStarted => {
                "Hair loss that's 'just started' means your follicles are still alive. Act NOW \
                 while it's still easy to reverse."
            }
            UrgencyBlock::SincePregnancy => {
                "Your hormones may not return to normal - but your hair CAN."
            }
            UrgencyBlock::FearsBaldness => {
                "Research shows DHT damage comes BEFORE permanent baldness. Block the DHT NOW = \
                 protect your remaining hair."
            }
            UrgencyBlock::Fallback => {
                "Every day you wait is another day of thinning. The longer you delay, the harder \
                 it gets to reverse. Don't let this steal more hair from your head."
            }
        }
    }
}

/// Everything the result page needs, derived from the answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultView {
    pub severity: Severity,
    pub persona: Persona,
    pub urgency: UrgencyBlock,
}

impl ResultView {
    #[must_use]
    pub fn from_answers(answers: &AnswerMap) -> Self {
        Self {
            severity: scoring::severity(answers),
            persona: scoring::persona(answers),
            urgency: UrgencyBlock::select(answers),
        }
    }

    #[must_use]
    pub const fn severity_summary(&self) -> &'static str {
        match self.severity {
            Severity::VeryBad => "Urgent intervention needed",
            Severity::Bad => "Serious but fixable",
            Severity::NotGood => {
                "Manageable with right approach - but can get much worse if not treated"
            }
            Severity::Okay => {
                "Can get much worse if not treated - act now while it's still easy to fix"
            }
        }
    }

    /// Expected regrowth window in days.
    #[must_use]
    pub const fn regrowth_window(&self) -> &'static str {
        match self.severity {
            Severity::VeryBad => "14-21",
            Severity::Bad => "21-28",
            Severity::NotGood | Severity::Okay => "28-35",
        }
    }

    #[must_use]
    pub const fn loss_risk_percent(&self) -> u8 {
        match self.severity {
            Severity::VeryBad => 67,
            Severity::Bad => 45,
            Severity::NotGood | Severity::Okay => 23,
        }
    }

    #[must_use]
    pub const fn cta_banner(&self) -> &'static str {
        match self.severity {
            Severity::VeryBad => "TIME IS RUNNING OUT - Your hair needs help NOW",
            _ => "Act while this is still reversible",
        }
    }
}
