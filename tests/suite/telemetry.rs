//! Collector delivery against mock HTTP endpoints.

use std::time::Duration;

use quizflow_engine::{QuizFlow, QuizSettings};
use quizflow_telemetry::{
    AnalyticsCollector, EventName, PixelCollector, TelemetryEvent, TelemetrySink,
    sink_from_settings,
};
use quizflow_types::TelemetrySettings;
use serde_json::Value;
use tokio::time::sleep;
use wiremock::Request;

use crate::common::{collector_target, start_collector, wait_for_requests};

const TIMEOUT: Duration = Duration::from_secs(2);

fn body(request: &Request) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

#[tokio::test]
async fn analytics_posts_client_id_and_event() {
    let server = start_collector("/collect", 204).await;
    let target = collector_target(&format!("{}/collect", server.uri()), Some("G-TEST"));
    let collector = AnalyticsCollector::new(&target, TIMEOUT).unwrap();

    collector.emit(&TelemetryEvent::new(EventName::QuizStarted).with("timestamp", "now"));

    let received = wait_for_requests(&server, 1).await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.query(), Some("measurement_id=G-TEST"));

    let json = body(&received[0]);
    assert_eq!(json["client_id"], collector.client_id().to_string());
    assert_eq!(json["events"][0]["name"], "quiz_started");
    assert_eq!(json["events"][0]["params"]["timestamp"], "now");
}

#[tokio::test]
async fn pixel_posts_standard_event() {
    let server = start_collector("/events", 200).await;
    let target = collector_target(&format!("{}/events", server.uri()), Some("123"));
    let collector = PixelCollector::new(&target, TIMEOUT).unwrap();

    collector.emit(&TelemetryEvent::new(EventName::Lead).with("quiz_severity", "BAD"));

    let received = wait_for_requests(&server, 1).await;
    assert_eq!(received.len(), 1);
    let json = body(&received[0]);
    assert_eq!(json["pixel_id"], "123");
    assert_eq!(json["event_name"], "Lead");
    assert_eq!(json["custom_data"]["quiz_severity"], "BAD");
    assert!(json["event_time"].as_i64().is_some_and(|t| t > 0));
}

#[tokio::test]
async fn collectors_ignore_the_other_channel() {
    let analytics = start_collector("/collect", 204).await;
    let pixel = start_collector("/events", 200).await;

    let analytics_sink =
        AnalyticsCollector::new(&collector_target(&analytics.uri(), None), TIMEOUT).unwrap();
    let pixel_sink = PixelCollector::new(&collector_target(&pixel.uri(), None), TIMEOUT).unwrap();

    analytics_sink.emit(&TelemetryEvent::new(EventName::ViewContent));
    pixel_sink.emit(&TelemetryEvent::new(EventName::QuestionViewed));

    sleep(Duration::from_millis(200)).await;
    assert!(analytics.received_requests().await.unwrap().is_empty());
    assert!(pixel.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn collector_errors_never_reach_the_quiz() {
    let failing = start_collector("/collect", 500).await;
    let settings = TelemetrySettings {
        analytics: Some(collector_target(&format!("{}/collect", failing.uri()), None)),
        // Nothing listens on the discard port.
        pixel: Some(collector_target("http://127.0.0.1:9/events", None)),
        timeout: Duration::from_millis(200),
        ..TelemetrySettings::default()
    };
    let mut flow = QuizFlow::new(QuizSettings::default(), sink_from_settings(&settings));

    flow.start().unwrap();
    flow.go_back().unwrap();

    // quiz_start_button_clicked, quiz_started, question_viewed
    let received = wait_for_requests(&failing, 3).await;
    assert_eq!(received.len(), 3);
    // Requests are sent concurrently, so arrival order is not fixed.
    let mut names: Vec<String> = received
        .iter()
        .filter_map(|request| body(request)["events"][0]["name"].as_str().map(str::to_owned))
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["question_viewed", "quiz_start_button_clicked", "quiz_started"]
    );
}

#[test]
fn emitting_outside_a_runtime_is_a_no_op() {
    let collector =
        AnalyticsCollector::new(&collector_target("http://127.0.0.1:9/", None), TIMEOUT).unwrap();
    collector.emit(&TelemetryEvent::new(EventName::QuizStarted));
}
