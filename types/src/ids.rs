use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown question id: {0:?}")]
pub struct UnknownQuestionId(pub String);

/// Identifier of every question the catalog can ask.
///
/// The string form (`as_str`) is the stable answer-map key reported to telemetry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Age,
    Gender,
    MainProblem,
    LifeSituation,
    HormonalImpact,
    IdentityFemininity,
    DhtAwareness,
    TreatmentWillingness,
    CompetitorAwareness,
    SocialImpact,
    Relationships,
    HowDesperately,
    HowLong,
    BiggestFear,
    WhatFailed,
    QualificationBudget,
    HowBadlyNeed,
}

impl QuestionId {
    pub const ALL: [QuestionId; 17] = [
        QuestionId::Age,
        QuestionId::Gender,
        QuestionId::MainProblem,
        QuestionId::LifeSituation,
        QuestionId::HormonalImpact,
        QuestionId::IdentityFemininity,
        QuestionId::DhtAwareness,
        QuestionId::TreatmentWillingness,
        QuestionId::CompetitorAwareness,
        QuestionId::SocialImpact,
        QuestionId::Relationships,
        QuestionId::HowDesperately,
        QuestionId::HowLong,
        QuestionId::BiggestFear,
        QuestionId::WhatFailed,
        QuestionId::QualificationBudget,
        QuestionId::HowBadlyNeed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            QuestionId::Age => "age",
            QuestionId::Gender => "gender",
            QuestionId::MainProblem => "main_problem",
            QuestionId::LifeSituation => "life_situation",
            QuestionId::HormonalImpact => "hormonal_impact",
            QuestionId::IdentityFemininity => "identity_femininity",
            QuestionId::DhtAwareness => "dht_awareness",
            QuestionId::TreatmentWillingness => "treatment_willingness",
            QuestionId::CompetitorAwareness => "competitor_awareness",
            QuestionId::SocialImpact => "social_impact",
            QuestionId::Relationships => "relationships",
            QuestionId::HowDesperately => "how_desperately",
            QuestionId::HowLong => "how_long",
            QuestionId::BiggestFear => "biggest_fear",
            QuestionId::WhatFailed => "what_failed",
            QuestionId::QualificationBudget => "qualification_budget",
            QuestionId::HowBadlyNeed => "how_badly_need",
        }
    }

    /// Parse the stable string key back into an id.
    pub fn parse(raw: &str) -> Result<Self, UnknownQuestionId> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == trimmed)
            .ok_or_else(|| UnknownQuestionId(trimmed.to_string()))
    }

    /// Questions that only appear for one gender.
    #[must_use]
    pub const fn is_gender_conditional(self) -> bool {
        matches!(
            self,
            QuestionId::HormonalImpact
                | QuestionId::IdentityFemininity
                | QuestionId::DhtAwareness
                | QuestionId::TreatmentWillingness
        )
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = UnknownQuestionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Identifier of an informational interstitial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoId {
    NotAlone,
    HiddenCause,
    NaturalBlocker,
}

impl InfoId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            InfoId::NotAlone => "not_alone",
            InfoId::HiddenCause => "hidden_cause",
            InfoId::NaturalBlocker => "natural_blocker",
        }
    }
}

impl fmt::Display for InfoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
