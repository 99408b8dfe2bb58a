//! Derived classification labels and the flow phase.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Only the exact option texts select a branch.
    #[must_use]
    pub fn from_answer(raw: &str) -> Option<Self> {
        match raw {
            "Female" => Some(Gender::Female),
            "Male" => Some(Gender::Male),
            _ => None,
        }
    }
}

/// How bad the self-reported problem is. Ordered from mildest to worst.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, serde::Serialize,
)]
pub enum Severity {
    #[default]
    Okay,
    NotGood,
    Bad,
    VeryBad,
}

impl Severity {
    /// Bucket a raw score. Each threshold is inclusive.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= 10 {
            Severity::VeryBad
        } else if score >= 6 {
            Severity::Bad
        } else if score >= 3 {
            Severity::NotGood
        } else {
            Severity::Okay
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Okay => "OKAY",
            Severity::NotGood => "NOT GOOD",
            Severity::Bad => "BAD",
            Severity::VeryBad => "VERY BAD",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Audience segment inferred from the answers.
///
/// Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Persona {
    HormonalWoman,
    BiohackerMan,
    SickPerson,
    WorkPerson,
    TiredParent,
}

impl Persona {
    pub const ALL: [Persona; 5] = [
        Persona::HormonalWoman,
        Persona::BiohackerMan,
        Persona::SickPerson,
        Persona::WorkPerson,
        Persona::TiredParent,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Persona::HormonalWoman => "hormonal_woman",
            Persona::BiohackerMan => "biohacker_man",
            Persona::SickPerson => "sick_person",
            Persona::WorkPerson => "work_person",
            Persona::TiredParent => "tired_parent",
        }
    }

    /// Profile name shown on the result page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Persona::HormonalWoman => "Hormonal shift",
            Persona::BiohackerMan => "DHT-driven thinning",
            Persona::SickPerson => "Recovery and stress",
            Persona::WorkPerson => "Professional image",
            Persona::TiredParent => "Busy parent",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Intro,
    Quiz {
        index: usize,
    },
    Analysis,
    Result,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Quiz { .. } => "quiz",
            Phase::Analysis => "analysis",
            Phase::Result => "result",
        }
    }

    #[must_use]
    pub const fn quiz_index(self) -> Option<usize> {
        match self {
            Phase::Quiz { index } => Some(index),
            _ => None,
        }
    }
}
