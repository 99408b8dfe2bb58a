//! Severity and persona heuristics.
//!
//! Both are pure functions of the answer map and are recomputed on every
//! read. A missing answer, or an answer that matches no known option, simply
//! fails the rule.

use quizflow_types::{AnswerMap, Gender, Marker, Persona, QuestionId, Severity};

use crate::catalog;

struct SeverityRule {
    question: QuestionId,
    marker: Marker,
    weight: u32,
}

// Each marker sits on at least one reachable option, so every rule can fire
// and the maximum score is 13.
const SEVERITY_RULES: &[SeverityRule] = &[
    SeverityRule {
        question: QuestionId::MainProblem,
        marker: Marker::SevereDistress,
        weight: 4,
    },
    SeverityRule {
        question: QuestionId::HowDesperately,
        marker: Marker::NearlyHopeless,
        weight: 4,
    },
    SeverityRule {
        question: QuestionId::SocialImpact,
        marker: Marker::SevereSocialImpact,
        weight: 3,
    },
    SeverityRule {
        question: QuestionId::HowBadlyNeed,
        marker: Marker::UrgentNeed,
        weight: 2,
    },
];

struct PersonaRule {
    persona: Persona,
    requires: Option<Gender>,
    question: QuestionId,
    marker: Marker,
    weight: u32,
}

const PERSONA_RULES: &[PersonaRule] = &[
    PersonaRule {
        persona: Persona::HormonalWoman,
        requires: Some(Gender::Female),
        question: QuestionId::HormonalImpact,
        marker: Marker::HormonesCertain,
        weight: 4,
    },
    PersonaRule {
        persona: Persona::HormonalWoman,
        requires: None,
        question: QuestionId::IdentityFemininity,
        marker: Marker::LostFemininity,
        weight: 3,
    },
    PersonaRule {
        persona: Persona::HormonalWoman,
        requires: None,
        question: QuestionId::MainProblem,
        marker: Marker::LostFemininity,
        weight: 2,
    },
    PersonaRule {
        persona: Persona::BiohackerMan,
        requires: Some(Gender::Male),
        question: QuestionId::TreatmentWillingness,
        marker: Marker::WantsNatural,
        weight: 4,
    },
    PersonaRule {
        persona: Persona::BiohackerMan,
        requires: None,
        question: QuestionId::DhtAwareness,
        marker: Marker::KnowsDht,
        weight: 3,
    },
    PersonaRule {
        persona: Persona::SickPerson,
        requires: None,
        question: QuestionId::LifeSituation,
        marker: Marker::Postpartum,
        weight: 4,
    },
    PersonaRule {
        persona: Persona::SickPerson,
        requires: None,
        question: QuestionId::HowDesperately,
        marker: Marker::NearlyHopeless,
        weight: 3,
    },
    PersonaRule {
        persona: Persona::WorkPerson,
        requires: None,
        question: QuestionId::SocialImpact,
        marker: Marker::NoticedAtWork,
        weight: 3,
    },
    PersonaRule {
        persona: Persona::WorkPerson,
        requires: None,
        question: QuestionId::BiggestFear,
        marker: Marker::FearsLookingOld,
        weight: 2,
    },
    PersonaRule {
        persona: Persona::TiredParent,
        requires: None,
        question: QuestionId::Relationships,
        marker: Marker::AvoidsIntimacy,
        weight: 3,
    },
];

/// Whether the answer recorded for `question` carries `marker`.
#[must_use]
pub fn answered_with(answers: &AnswerMap, question: QuestionId, marker: Marker) -> bool {
    answers
        .get(question)
        .and_then(|text| catalog::choice(question, text))
        .is_some_and(|choice| choice.has(marker))
}

/// Raw severity score before bucketing.
#[must_use]
pub fn severity_score(answers: &AnswerMap) -> u32 {
    SEVERITY_RULES
        .iter()
        .filter(|rule| answered_with(answers, rule.question, rule.marker))
        .map(|rule| rule.weight)
        .sum()
}

#[must_use]
pub fn severity(answers: &AnswerMap) -> Severity {
    Severity::from_score(severity_score(answers))
}

/// Per-persona counters, indexed in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PersonaScores([u32; 5]);

impl PersonaScores {
    #[must_use]
    pub fn get(&self, persona: Persona) -> u32 {
        self.0[persona.index()]
    }

    /// Highest counter. Ties, including all-zero, go to the earliest persona.
    #[must_use]
    pub fn winner(&self) -> Persona {
        let mut best = Persona::ALL[0];
        for persona in Persona::ALL.into_iter().skip(1) {
            if self.get(persona) > self.get(best) {
                best = persona;
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (Persona, u32)> + '_ {
        Persona::ALL.into_iter().map(|persona| (persona, self.get(persona)))
    }
}

#[must_use]
pub fn persona_scores(answers: &AnswerMap) -> PersonaScores {
    let gender = answers.gender();
    let mut counters = [0_u32; 5];
    for rule in PERSONA_RULES {
        if rule.requires.is_some_and(|required| gender != Some(required)) {
            continue;
        }
        if answered_with(answers, rule.question, rule.marker) {
            counters[rule.persona.index()] += rule.weight;
        }
    }
    PersonaScores(counters)
}

#[must_use]
pub fn persona(answers: &AnswerMap) -> Persona {
    persona_scores(answers).winner()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(QuestionId, &str)]) -> AnswerMap {
        pairs.iter().copied().collect()
    }

    const MAX_SEVERITY: &[(QuestionId, &str)] = &[
        (QuestionId::MainProblem, "I'm terrified I'll go completely bald"),
        (QuestionId::HowDesperately, "I've almost given up hope completely"),
        (QuestionId::SocialImpact, "My confidence is completely shot"),
        (QuestionId::HowBadlyNeed, "DESPERATELY - I can't lose any more hair"),
    ];

    #[test]
    fn empty_answers_are_okay() {
        assert_eq!(severity_score(&AnswerMap::new()), 0);
        assert_eq!(severity(&AnswerMap::new()), Severity::Okay);
    }

    #[test]
    fn every_marker_adds_its_weight() {
        let all = answers(MAX_SEVERITY);
        assert_eq!(severity_score(&all), 13);
        assert_eq!(severity(&all), Severity::VeryBad);
    }

    #[test]
    fn bucket_boundaries() {
        let urgent = answers(&MAX_SEVERITY[3..]);
        assert_eq!(severity_score(&urgent), 2);
        assert_eq!(severity(&urgent), Severity::Okay);

        let social = answers(&MAX_SEVERITY[2..3]);
        assert_eq!(severity(&social), Severity::NotGood);

        let two_big = answers(&MAX_SEVERITY[..2]);
        assert_eq!(severity_score(&two_big), 8);
        assert_eq!(severity(&two_big), Severity::Bad);

        let three = answers(&MAX_SEVERITY[1..]);
        assert_eq!(severity_score(&three), 9);
        assert_eq!(severity(&three), Severity::Bad);
    }

    #[test]
    fn severity_never_drops_as_markers_are_added() {
        let mut current = AnswerMap::new();
        let mut previous = severity(&current);
        for (id, text) in MAX_SEVERITY {
            current.record(*id, *text);
            let next = severity(&current);
            assert!(next >= previous);
            previous = next;
        }
    }

    #[test]
    fn unmarked_options_score_nothing() {
        let calm = answers(&[
            (QuestionId::MainProblem, "I avoid mirrors and photos"),
            (QuestionId::HowBadlyNeed, "Somewhat - I want to prevent it getting worse"),
        ]);
        assert_eq!(severity_score(&calm), 0);
    }

    #[test]
    fn unknown_text_scores_nothing() {
        let garbled = answers(&[(QuestionId::HowBadlyNeed, "DESPERATELY")]);
        assert_eq!(severity_score(&garbled), 0);
    }

    #[test]
    fn empty_answers_default_to_first_persona() {
        let scores = persona_scores(&AnswerMap::new());
        assert!(scores.iter().all(|(_, score)| score == 0));
        assert_eq!(persona(&AnswerMap::new()), Persona::HormonalWoman);
    }

    #[test]
    fn hormonal_woman_scenario() {
        let answers = answers(&[
            (QuestionId::Gender, "Female"),
            (
                QuestionId::HormonalImpact,
                "Yes, definitely - it started after pregnancy/menopause",
            ),
        ]);
        let scores = persona_scores(&answers);
        assert!(scores.get(Persona::HormonalWoman) >= 4);
        assert!(
            scores
                .iter()
                .all(|(_, score)| score <= scores.get(Persona::HormonalWoman))
        );
        assert_eq!(persona(&answers), Persona::HormonalWoman);
    }

    #[test]
    fn gender_gate_applies_to_stale_branch_answers() {
        let switched = answers(&[
            (QuestionId::Gender, "Male"),
            (
                QuestionId::HormonalImpact,
                "Yes, definitely - it started after pregnancy/menopause",
            ),
        ]);
        assert_eq!(persona_scores(&switched).get(Persona::HormonalWoman), 0);
    }

    #[test]
    fn biohacker_man_wins_with_both_markers() {
        let answers = answers(&[
            (QuestionId::Gender, "Male"),
            (QuestionId::TreatmentWillingness, "I'm open to natural solutions"),
            (QuestionId::DhtAwareness, "Yes, I know DHT is the main culprit"),
        ]);
        assert_eq!(persona_scores(&answers).get(Persona::BiohackerMan), 7);
        assert_eq!(persona(&answers), Persona::BiohackerMan);
    }

    #[test]
    fn tie_goes_to_earlier_persona() {
        // HormonalWoman and WorkPerson both reach 5.
        let answers = answers(&[
            (
                QuestionId::LifeSituation,
                "I'm postpartum and my hair is falling out in chunks",
            ),
            (QuestionId::SocialImpact, "People at work are noticing my thin spots"),
            (QuestionId::BiggestFear, "Looking old and unattractive"),
            (QuestionId::IdentityFemininity, "I don't feel feminine anymore"),
            (QuestionId::MainProblem, "I don't feel feminine anymore"),
        ]);
        let scores = persona_scores(&answers);
        assert_eq!(scores.get(Persona::HormonalWoman), 5);
        assert_eq!(scores.get(Persona::SickPerson), 4);
        assert_eq!(scores.get(Persona::WorkPerson), 5);
        assert_eq!(persona(&answers), Persona::HormonalWoman);
    }

    #[test]
    fn later_persona_wins_only_when_strictly_greater() {
        let answers = answers(&[(
            QuestionId::Relationships,
            "I avoid intimacy because I'm embarrassed",
        )]);
        assert_eq!(persona(&answers), Persona::TiredParent);
    }
}
