//! Configuration loading for Quizflow.
//!
//! Raw TOML structs mirror `~/.quizflow/config.toml` with every field
//! optional. [`QuizflowConfig::quiz_settings`] and
//! [`QuizflowConfig::telemetry_settings`] resolve them into the validated
//! types from `quizflow-types`, falling back to defaults field by field.
//!
//! ```toml
//! [quiz]
//! content_name = "Hair Loss Quiz"
//! product_url = "https://pumpkinseedoil.co/products/pumpkin-seed-oil"
//! answer_debounce_ms = 500
//! analysis_step_ms = 3000
//!
//! [telemetry]
//! enabled = true
//! analytics_endpoint = "${QUIZFLOW_ANALYTICS_URL}"
//! analytics_measurement_id = "G-XXXXXXX"
//! pixel_endpoint = "https://pixel.example/events"
//! pixel_id = "1234567890"
//! timeout_seconds = 5
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

use quizflow_types::{CollectorTarget, NonEmptyString, QuizSettings, TelemetrySettings};

pub const PRODUCT_URL_ENV: &str = "QUIZFLOW_PRODUCT_URL";
pub const TELEMETRY_ENV: &str = "QUIZFLOW_TELEMETRY";

const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizflowConfig {
    pub quiz: Option<QuizConfig>,
    pub telemetry: Option<TelemetryConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizConfig {
    /// Reported to telemetry as `content_name`.
    pub content_name: Option<String>,
    /// Purchase page opened by every call to action.
    pub product_url: Option<String>,
    pub answer_debounce_ms: Option<u64>,
    pub analysis_step_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub analytics_endpoint: Option<String>,
    pub analytics_measurement_id: Option<String>,
    pub pixel_endpoint: Option<String>,
    pub pixel_id: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            analytics_endpoint: None,
            analytics_measurement_id: None,
            pixel_endpoint: None,
            pixel_id: None,
            timeout_seconds: None,
        }
    }
}

/// Replace `${VAR}` references with the variable's value (empty when unset).
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        if !name.is_empty() {
            out.push_str(&env::var(name).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Expand and validate an optional string field.
fn resolve_string(raw: Option<&String>) -> Option<NonEmptyString> {
    raw.map(|value| expand_env_vars(value))
        .and_then(|value| NonEmptyString::new(value.trim()).ok())
}

fn telemetry_disabled_by_env() -> bool {
    env::var(TELEMETRY_ENV).is_ok_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "0" | "off" | "false" | "no"
        )
    })
}

impl QuizflowConfig {
    /// Load the user config. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "Failed to read config");
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::parse(&content).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "Failed to parse config");
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve quiz settings. `QUIZFLOW_PRODUCT_URL` overrides the file.
    #[must_use]
    pub fn quiz_settings(&self) -> QuizSettings {
        let defaults = QuizSettings::default();
        let quiz = self.quiz.as_ref();

        let content_name = resolve_string(quiz.and_then(|q| q.content_name.as_ref()))
            .unwrap_or_else(|| {
                NonEmptyString::new(defaults.content_name())
                    .expect("default content name is non-empty")
            });
        let env_url = env::var(PRODUCT_URL_ENV).ok();
        let product_url = resolve_string(env_url.as_ref())
            .or_else(|| resolve_string(quiz.and_then(|q| q.product_url.as_ref())))
            .unwrap_or_else(|| {
                NonEmptyString::new(defaults.product_url())
                    .expect("default product url is non-empty")
            });
        let answer_debounce = quiz
            .and_then(|q| q.answer_debounce_ms)
            .map_or(defaults.answer_debounce(), Duration::from_millis);
        let analysis_step = quiz
            .and_then(|q| q.analysis_step_ms)
            .map_or(defaults.analysis_step(), Duration::from_millis);

        QuizSettings::new(content_name, product_url, answer_debounce, analysis_step)
    }

    /// Resolve telemetry wiring. `QUIZFLOW_TELEMETRY=off` disables it.
    #[must_use]
    pub fn telemetry_settings(&self) -> TelemetrySettings {
        let defaults = TelemetrySettings::default();
        let Some(raw) = self.telemetry.as_ref() else {
            return TelemetrySettings {
                enabled: defaults.enabled && !telemetry_disabled_by_env(),
                ..defaults
            };
        };

        let analytics = resolve_string(raw.analytics_endpoint.as_ref()).map(|endpoint| {
            CollectorTarget {
                endpoint,
                id: resolve_string(raw.analytics_measurement_id.as_ref()),
            }
        });
        let pixel = resolve_string(raw.pixel_endpoint.as_ref()).map(|endpoint| CollectorTarget {
            endpoint,
            id: resolve_string(raw.pixel_id.as_ref()),
        });

        TelemetrySettings {
            enabled: raw.enabled && !telemetry_disabled_by_env(),
            analytics,
            pixel,
            timeout: raw
                .timeout_seconds
                .map_or(defaults.timeout, Duration::from_secs),
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".quizflow").join("config.toml"))
}
