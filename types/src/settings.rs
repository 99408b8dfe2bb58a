//! Resolved configuration types shared across crates.
//!
//! Raw TOML structs (all `Option` fields) stay in `quizflow-config`. The
//! loader resolves them into these types, so holding one of these values is
//! proof that it was validated.

use std::time::Duration;

use crate::NonEmptyString;

pub const DEFAULT_CONTENT_NAME: &str = "Hair Loss Quiz";
pub const DEFAULT_PRODUCT_URL: &str = "https://pumpkinseedoil.co/products/pumpkin-seed-oil";
pub const DEFAULT_ANSWER_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_ANALYSIS_STEP: Duration = Duration::from_secs(3);

/// Settings for a single quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    content_name: NonEmptyString,
    product_url: NonEmptyString,
    answer_debounce: Duration,
    analysis_step: Duration,
}

impl QuizSettings {
    #[must_use]
    pub fn new(
        content_name: NonEmptyString,
        product_url: NonEmptyString,
        answer_debounce: Duration,
        analysis_step: Duration,
    ) -> Self {
        Self {
            content_name,
            product_url,
            answer_debounce,
            analysis_step,
        }
    }

    /// Name attached to every telemetry event as `content_name`.
    #[must_use]
    pub fn content_name(&self) -> &str {
        self.content_name.as_str()
    }

    #[must_use]
    pub fn product_url(&self) -> &str {
        self.product_url.as_str()
    }

    /// Delay between an answer being recorded and the flow advancing.
    #[must_use]
    pub fn answer_debounce(&self) -> Duration {
        self.answer_debounce
    }

    /// How long each analysis message stays on screen.
    #[must_use]
    pub fn analysis_step(&self) -> Duration {
        self.analysis_step
    }

    #[must_use]
    pub fn with_answer_debounce(mut self, debounce: Duration) -> Self {
        self.answer_debounce = debounce;
        self
    }

    #[must_use]
    pub fn with_analysis_step(mut self, step: Duration) -> Self {
        self.analysis_step = step;
        self
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            content_name: NonEmptyString::new(DEFAULT_CONTENT_NAME)
                .expect("DEFAULT_CONTENT_NAME must be non-empty"),
            product_url: NonEmptyString::new(DEFAULT_PRODUCT_URL)
                .expect("DEFAULT_PRODUCT_URL must be non-empty"),
            answer_debounce: DEFAULT_ANSWER_DEBOUNCE,
            analysis_step: DEFAULT_ANALYSIS_STEP,
        }
    }
}

/// A resolved HTTP collector target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorTarget {
    pub endpoint: NonEmptyString,
    /// Measurement or pixel id sent alongside each event.
    pub id: Option<NonEmptyString>,
}

/// Telemetry wiring. An absent collector means events for it are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetrySettings {
    pub enabled: bool,
    pub analytics: Option<CollectorTarget>,
    pub pixel: Option<CollectorTarget>,
    pub timeout: Duration,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            analytics: None,
            pixel: None,
            timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_quiz() {
        let settings = QuizSettings::default();
        assert_eq!(settings.content_name(), "Hair Loss Quiz");
        assert_eq!(settings.answer_debounce(), Duration::from_millis(500));
        assert_eq!(settings.analysis_step(), Duration::from_secs(3));
        assert!(settings.product_url().starts_with("https://"));
    }

    #[test]
    fn builders_override_delays() {
        let settings = QuizSettings::default()
            .with_answer_debounce(Duration::ZERO)
            .with_analysis_step(Duration::from_millis(10));
        assert_eq!(settings.answer_debounce(), Duration::ZERO);
        assert_eq!(settings.analysis_step(), Duration::from_millis(10));
    }
}
