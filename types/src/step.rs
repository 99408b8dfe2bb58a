//! Quiz step definitions.
//!
//! Steps are plain `'static` data: the catalog is assembled from constant
//! tables, so a `Step` is `Copy` and two builds compare equal by value.

use crate::{InfoId, QuestionId};

/// Stable tag attached to an answer option at definition time.
///
/// Scoring and result selection look for markers instead of matching copy
/// text, so rewording an option never silently changes a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Strongest distress answer to "how does it make you feel".
    SevereDistress,
    LostFemininity,
    Postpartum,
    HormonesCertain,
    KnowsDht,
    WantsNatural,
    /// Hair loss is visibly affecting daily life.
    SevereSocialImpact,
    NoticedAtWork,
    AvoidsIntimacy,
    NearlyHopeless,
    YearsOfThinning,
    JustStarted,
    SincePregnancy,
    FearsBaldness,
    FearsLookingOld,
    UrgentNeed,
}

/// One selectable answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    text: &'static str,
    markers: &'static [Marker],
}

impl Choice {
    #[must_use]
    pub const fn plain(text: &'static str) -> Self {
        Self { text, markers: &[] }
    }

    #[must_use]
    pub const fn tagged(text: &'static str, markers: &'static [Marker]) -> Self {
        Self { text, markers }
    }

    #[must_use]
    pub const fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub const fn markers(&self) -> &'static [Marker] {
        self.markers
    }

    #[must_use]
    pub fn has(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionStep {
    pub id: QuestionId,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub options: &'static [Choice],
}

impl QuestionStep {
    /// Resolve an answer text to the option it was selected from.
    #[must_use]
    pub fn choice(&self, text: &str) -> Option<&'static Choice> {
        self.options.iter().find(|choice| choice.text == text)
    }

    pub fn option_texts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(Choice::text)
    }
}

/// Visual hint for an informational step. Rendering decides what it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoStyle {
    Reassurance,
    Insight,
    Evidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoStep {
    pub id: InfoId,
    pub title: &'static str,
    pub content: &'static str,
    pub style: InfoStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Question(QuestionStep),
    Info(InfoStep),
}

impl Step {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Step::Question(question) => question.title,
            Step::Info(info) => info.title,
        }
    }

    /// Key reported to telemetry for this step.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Step::Question(question) => question.id.as_str(),
            Step::Info(info) => info.id.as_str(),
        }
    }

    #[must_use]
    pub fn as_question(&self) -> Option<&QuestionStep> {
        match self {
            Step::Question(question) => Some(question),
            Step::Info(_) => None,
        }
    }

    #[must_use]
    pub fn question_id(&self) -> Option<QuestionId> {
        self.as_question().map(|question| question.id)
    }

    #[must_use]
    pub fn is_info(&self) -> bool {
        matches!(self, Step::Info(_))
    }
}
