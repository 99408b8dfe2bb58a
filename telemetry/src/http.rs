//! HTTP collectors.
//!
//! Both collectors serialize the event on the caller's thread and hand the
//! request to a spawned task on the current Tokio runtime. Outside a runtime
//! the event is dropped. Responses are only logged.

use std::time::Duration;

use chrono::Utc;
use reqwest::redirect::Policy;
use reqwest::{Client, RequestBuilder, Url};
use serde_json::{Value, json};
use tokio::runtime::Handle;
use uuid::Uuid;

use quizflow_types::CollectorTarget;

use crate::TelemetryError;
use crate::event::{Channel, EventName, TelemetryEvent};
use crate::sink::TelemetrySink;

fn build_client(timeout: Duration) -> Result<Client, TelemetryError> {
    Client::builder()
        .timeout(timeout)
        .redirect(Policy::none())
        .build()
        .map_err(TelemetryError::Client)
}

fn parse_endpoint(target: &CollectorTarget) -> Result<Url, TelemetryError> {
    let raw = target.endpoint.as_str();
    Url::parse(raw).map_err(|source| TelemetryError::Endpoint {
        endpoint: raw.to_owned(),
        source,
    })
}

/// Send `request` in the background. Never blocks, never reports failure.
fn dispatch(collector: &'static str, event: EventName, request: RequestBuilder) {
    let Ok(handle) = Handle::try_current() else {
        tracing::debug!(collector, %event, "No async runtime; dropping telemetry event");
        return;
    };

    handle.spawn(async move {
        match request.send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(collector, %event, "Telemetry event delivered");
            }
            Ok(response) => {
                tracing::warn!(
                    collector,
                    %event,
                    status = %response.status(),
                    "Telemetry collector rejected event"
                );
            }
            Err(error) => {
                tracing::warn!(collector, %event, %error, "Telemetry collector unreachable");
            }
        }
    });
}

/// Product analytics endpoint.
///
/// Posts `{client_id, events: [{name, params}]}`. The measurement id, when
/// configured, is sent as the `measurement_id` query parameter.
pub struct AnalyticsCollector {
    client: Client,
    endpoint: Url,
    client_id: Uuid,
}

impl AnalyticsCollector {
    pub fn new(target: &CollectorTarget, timeout: Duration) -> Result<Self, TelemetryError> {
        let mut endpoint = parse_endpoint(target)?;
        if let Some(id) = &target.id {
            endpoint
                .query_pairs_mut()
                .append_pair("measurement_id", id.as_str());
        }
        Ok(Self {
            client: build_client(timeout)?,
            endpoint,
            client_id: Uuid::new_v4(),
        })
    }

    /// Stable per-session identifier sent with every batch.
    #[must_use]
    pub fn client_id(&self) -> Uuid {
        self.client_id
    }

    fn body(&self, event: &TelemetryEvent) -> Value {
        json!({
            "client_id": self.client_id.to_string(),
            "events": [event],
        })
    }
}

impl TelemetrySink for AnalyticsCollector {
    fn emit(&self, event: &TelemetryEvent) {
        if event.channel() != Channel::Analytics {
            return;
        }
        let request = self
            .client
            .post(self.endpoint.clone())
            .json(&self.body(event));
        dispatch("analytics", event.name(), request);
    }
}

/// Conversion pixel endpoint. Only pixel-channel events are sent.
pub struct PixelCollector {
    client: Client,
    endpoint: Url,
    pixel_id: Option<String>,
}

impl PixelCollector {
    pub fn new(target: &CollectorTarget, timeout: Duration) -> Result<Self, TelemetryError> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: parse_endpoint(target)?,
            pixel_id: target.id.as_ref().map(|id| id.as_str().to_owned()),
        })
    }

    fn body(&self, event: &TelemetryEvent) -> Value {
        let custom_data: serde_json::Map<String, Value> = event
            .params()
            .map(|(key, value)| (key.to_owned(), json!(value)))
            .collect();
        json!({
            "pixel_id": self.pixel_id,
            "event_name": event.name(),
            "event_id": Uuid::new_v4().to_string(),
            "event_time": Utc::now().timestamp(),
            "custom_data": custom_data,
        })
    }
}

impl TelemetrySink for PixelCollector {
    fn emit(&self, event: &TelemetryEvent) {
        if event.channel() != Channel::Pixel {
            return;
        }
        let request = self
            .client
            .post(self.endpoint.clone())
            .json(&self.body(event));
        dispatch("pixel", event.name(), request);
    }
}
