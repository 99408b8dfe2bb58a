//! Shared test utilities and fixtures
//!
//! Helpers for driving a [`QuizFlow`] by hand and for standing up mock
//! telemetry collectors.

#![allow(dead_code)]

use std::time::Duration;

use quizflow_engine::{QuestionId, QuizFlow, QuizSettings, RecordingSink, Step};
use quizflow_types::{CollectorTarget, NonEmptyString};
use tokio::time::sleep;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const DEBOUNCE: Duration = Duration::from_millis(500);
pub const ANALYSIS_STEP: Duration = Duration::from_secs(3);

/// A flow with default settings that records everything it emits.
pub fn recorded_flow() -> (QuizFlow, RecordingSink) {
    let sink = RecordingSink::new();
    (QuizFlow::new(QuizSettings::default(), sink.clone()), sink)
}

/// Answer every remaining step, then stop at the analysis screen.
///
/// `pick` chooses the answer for each question; `None` falls back to the
/// first option.
pub fn answer_all(flow: &mut QuizFlow, pick: impl Fn(QuestionId) -> Option<&'static str>) {
    while let Some(step) = flow.current_step() {
        match step {
            Step::Question(question) => {
                let value = pick(question.id).unwrap_or_else(|| question.options[0].text());
                flow.submit_answer(question.id, value).unwrap();
                flow.tick(DEBOUNCE);
            }
            Step::Info(_) => flow.continue_from_info().unwrap(),
        }
    }
}

/// Tick through all five analysis messages.
pub fn finish_analysis(flow: &mut QuizFlow) {
    for _ in 0..5 {
        flow.tick(ANALYSIS_STEP);
    }
}

pub fn collector_target(endpoint: &str, id: Option<&str>) -> CollectorTarget {
    CollectorTarget {
        endpoint: NonEmptyString::new(endpoint).unwrap(),
        id: id.map(|id| NonEmptyString::new(id).unwrap()),
    }
}

/// Start a mock collector that accepts any POST on `route`.
pub async fn start_collector(route: &str, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

/// Wait until `server` has seen `count` requests, or give up after ~2s.
pub async fn wait_for_requests(server: &MockServer, count: usize) -> Vec<Request> {
    for _ in 0..100 {
        let received = server.received_requests().await.unwrap_or_default();
        if received.len() >= count {
            return received;
        }
        sleep(Duration::from_millis(20)).await;
    }
    server.received_requests().await.unwrap_or_default()
}
