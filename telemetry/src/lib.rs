//! Best-effort telemetry for Quizflow.
//!
//! The quiz reports what the user does through the [`TelemetrySink`]
//! capability. Sinks never return errors and never block the caller:
//!
//! | Sink | Purpose |
//! |------|---------|
//! | [`NoopSink`] | telemetry disabled |
//! | [`RecordingSink`] | tests and local debugging |
//! | [`FanoutSink`] | send one event to several sinks |
//! | [`AnalyticsCollector`] | product analytics endpoint |
//! | [`PixelCollector`] | conversion pixel endpoint |
//!
//! Use [`sink_from_settings`] to build the configured set.

mod event;
mod http;
mod sink;

pub use event::{Channel, EVENT_CATEGORY, EventName, ParamValue, TelemetryEvent};
pub use http::{AnalyticsCollector, PixelCollector};
pub use sink::{FanoutSink, NoopSink, RecordingSink, TelemetrySink};

use quizflow_types::TelemetrySettings;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("invalid collector endpoint {endpoint:?}: {source}")]
    Endpoint {
        endpoint: String,
        source: url::ParseError,
    },
}

/// Build the sink described by `settings`.
///
/// Collectors that fail to initialise are skipped with a warning. Disabled
/// telemetry, or no configured collector, yields a [`NoopSink`].
#[must_use]
pub fn sink_from_settings(settings: &TelemetrySettings) -> Box<dyn TelemetrySink> {
    if !settings.enabled {
        tracing::debug!("Telemetry disabled");
        return Box::new(NoopSink);
    }

    let mut fanout = FanoutSink::new();
    if let Some(target) = &settings.analytics {
        match AnalyticsCollector::new(target, settings.timeout) {
            Ok(collector) => fanout.push(Box::new(collector)),
            Err(e) => tracing::warn!("Analytics collector unavailable: {e}"),
        }
    }
    if let Some(target) = &settings.pixel {
        match PixelCollector::new(target, settings.timeout) {
            Ok(collector) => fanout.push(Box::new(collector)),
            Err(e) => tracing::warn!("Pixel collector unavailable: {e}"),
        }
    }

    if fanout.is_empty() {
        tracing::debug!("No telemetry collectors configured");
        Box::new(NoopSink)
    } else {
        tracing::info!(collectors = fanout.len(), "Telemetry enabled");
        Box::new(fanout)
    }
}
