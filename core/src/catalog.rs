//! Question catalog assembly.
//!
//! The catalog is a pure function of the answer map. It is cheap to rebuild,
//! so callers rebuild it on every read instead of caching it.

use quizflow_types::{AnswerMap, Choice, Gender, QuestionId, QuestionStep, Step};

use crate::content::{
    AGE, BIGGEST_FEAR, COMPETITOR_AWARENESS, DHT_AWARENESS, GENDER, HIDDEN_CAUSE, HORMONAL_IMPACT,
    HOW_BADLY_NEED, HOW_DESPERATELY, HOW_LONG, IDENTITY_FEMININITY, LIFE_SITUATION, MAIN_PROBLEM,
    NATURAL_BLOCKER, NOT_ALONE, QUALIFICATION_BUDGET, RELATIONSHIPS, SOCIAL_IMPACT,
    TREATMENT_WILLINGNESS, WHAT_FAILED,
};

const BASE_BLOCK: [Step; 4] = [
    Step::Question(AGE),
    Step::Question(GENDER),
    Step::Question(MAIN_PROBLEM),
    Step::Question(LIFE_SITUATION),
];

const FEMALE_BLOCK: [Step; 2] = [
    Step::Question(HORMONAL_IMPACT),
    Step::Question(IDENTITY_FEMININITY),
];

const MALE_BLOCK: [Step; 2] = [
    Step::Question(DHT_AWARENESS),
    Step::Question(TREATMENT_WILLINGNESS),
];

const SHARED_TAIL: [Step; 12] = [
    Step::Question(COMPETITOR_AWARENESS),
    Step::Question(SOCIAL_IMPACT),
    Step::Info(NOT_ALONE),
    Step::Question(RELATIONSHIPS),
    Step::Question(HOW_DESPERATELY),
    Step::Info(HIDDEN_CAUSE),
    Step::Question(HOW_LONG),
    Step::Question(BIGGEST_FEAR),
    Step::Info(NATURAL_BLOCKER),
    Step::Question(WHAT_FAILED),
    Step::Question(QUALIFICATION_BUDGET),
    Step::Question(HOW_BADLY_NEED),
];

/// Catalog length when no gender block is spliced in.
pub const BASE_CATALOG_LEN: usize = BASE_BLOCK.len() + SHARED_TAIL.len();

/// Catalog length with a gender block.
pub const BRANCHED_CATALOG_LEN: usize = BASE_CATALOG_LEN + FEMALE_BLOCK.len();

/// Build the ordered step list for the current answers.
#[must_use]
pub fn build_catalog(answers: &AnswerMap) -> Vec<Step> {
    let branch: &[Step] = match answers.gender() {
        Some(Gender::Female) => &FEMALE_BLOCK,
        Some(Gender::Male) => &MALE_BLOCK,
        None => &[],
    };

    let mut steps = Vec::with_capacity(BRANCHED_CATALOG_LEN);
    steps.extend_from_slice(&BASE_BLOCK);
    steps.extend_from_slice(branch);
    steps.extend_from_slice(&SHARED_TAIL);
    steps
}

/// Static definition of a question, whether or not the current branch asks it.
#[must_use]
pub fn question(id: QuestionId) -> &'static QuestionStep {
    match id {
        QuestionId::Age => &AGE,
        QuestionId::Gender => &GENDER,
        QuestionId::MainProblem => &MAIN_PROBLEM,
        QuestionId::LifeSituation => &LIFE_SITUATION,
        QuestionId::HormonalImpact => &HORMONAL_IMPACT,
        QuestionId::IdentityFemininity => &IDENTITY_FEMININITY,
        QuestionId::DhtAwareness => &DHT_AWARENESS,
        QuestionId::TreatmentWillingness => &TREATMENT_WILLINGNESS,
        QuestionId::CompetitorAwareness => &COMPETITOR_AWARENESS,
        QuestionId::SocialImpact => &SOCIAL_IMPACT,
        QuestionId::Relationships => &RELATIONSHIPS,
        QuestionId::HowDesperately => &HOW_DESPERATELY,
        QuestionId::HowLong => &HOW_LONG,
        QuestionId::BiggestFear => &BIGGEST_FEAR,
        QuestionId::WhatFailed => &WHAT_FAILED,
        QuestionId::QualificationBudget => &QUALIFICATION_BUDGET,
        QuestionId::HowBadlyNeed => &HOW_BADLY_NEED,
    }
}

/// Resolve a recorded answer to the option it came from.
///
/// Text that matches no option resolves to `None`, which every scoring rule
/// treats as "not satisfied".
#[must_use]
pub fn choice(id: QuestionId, text: &str) -> Option<&'static Choice> {
    question(id).choice(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizflow_types::Marker;

    fn ids(steps: &[Step]) -> Vec<QuestionId> {
        steps.iter().filter_map(Step::question_id).collect()
    }

    fn with_gender(gender: &str) -> AnswerMap {
        [(QuestionId::Gender, gender)].into_iter().collect()
    }

    #[test]
    fn no_gender_yields_base_and_tail() {
        let steps = build_catalog(&AnswerMap::new());
        assert_eq!(steps.len(), BASE_CATALOG_LEN);
        assert_eq!(steps.len(), 16);
        assert!(ids(&steps).iter().all(|id| !id.is_gender_conditional()));
    }

    #[test]
    fn unrecognised_gender_adds_nothing() {
        let steps = build_catalog(&with_gender("Prefer not to say"));
        assert_eq!(steps, build_catalog(&AnswerMap::new()));
    }

    #[test]
    fn female_block_follows_base_block() {
        let steps = build_catalog(&with_gender("Female"));
        assert_eq!(steps.len(), BRANCHED_CATALOG_LEN);
        assert_eq!(steps[4].question_id(), Some(QuestionId::HormonalImpact));
        assert_eq!(steps[5].question_id(), Some(QuestionId::IdentityFemininity));

        let ids = ids(&steps);
        assert!(!ids.contains(&QuestionId::DhtAwareness));
        assert!(!ids.contains(&QuestionId::TreatmentWillingness));
    }

    #[test]
    fn male_block_follows_base_block() {
        let steps = build_catalog(&with_gender("Male"));
        assert_eq!(steps.len(), BRANCHED_CATALOG_LEN);
        assert_eq!(steps[4].question_id(), Some(QuestionId::DhtAwareness));
        assert_eq!(steps[5].question_id(), Some(QuestionId::TreatmentWillingness));

        let ids = ids(&steps);
        assert!(!ids.contains(&QuestionId::HormonalImpact));
        assert!(!ids.contains(&QuestionId::IdentityFemininity));
    }

    #[test]
    fn tail_is_identical_for_every_branch() {
        let none = build_catalog(&AnswerMap::new());
        let female = build_catalog(&with_gender("Female"));
        let male = build_catalog(&with_gender("Male"));

        assert_eq!(none[4..], female[6..]);
        assert_eq!(none[4..], male[6..]);
        assert_eq!(
            none.last().and_then(Step::question_id),
            Some(QuestionId::HowBadlyNeed)
        );
    }

    #[test]
    fn rebuild_is_structurally_equal() {
        let answers: AnswerMap = [
            (QuestionId::Gender, "Female"),
            (QuestionId::Age, "40-49"),
        ]
        .into_iter()
        .collect();
        assert_eq!(build_catalog(&answers), build_catalog(&answers));
    }

    #[test]
    fn info_steps_sit_in_the_tail() {
        let steps = build_catalog(&AnswerMap::new());
        let info_positions: Vec<usize> = steps
            .iter()
            .enumerate()
            .filter(|(_, step)| step.is_info())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(info_positions, vec![6, 9, 12]);
    }

    #[test]
    fn gender_branch_follows_option_text() {
        for text in question(QuestionId::Gender).option_texts() {
            let expected = match text {
                "Female" | "Male" => BRANCHED_CATALOG_LEN,
                _ => BASE_CATALOG_LEN,
            };
            assert_eq!(build_catalog(&with_gender(text)).len(), expected, "{text}");
        }
    }

    #[test]
    fn every_question_is_reachable_by_id() {
        for id in QuestionId::ALL {
            assert_eq!(question(id).id, id);
            assert!(!question(id).options.is_empty());
        }
    }

    #[test]
    fn option_texts_are_unique_within_a_question() {
        for id in QuestionId::ALL {
            let texts: Vec<&str> = question(id).option_texts().collect();
            let mut deduped = texts.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(texts.len(), deduped.len(), "duplicate option in {id}");
        }
    }

    #[test]
    fn choice_resolves_markers() {
        let chosen = choice(
            QuestionId::HormonalImpact,
            "Yes, definitely - it started after pregnancy/menopause",
        );
        assert!(chosen.is_some_and(|c| c.has(Marker::HormonesCertain)));
        assert!(choice(QuestionId::HormonalImpact, "Yes, definitely").is_none());
    }
}
