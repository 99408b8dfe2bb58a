//! Config files feeding a live session.

use std::fs;
use std::time::Duration;

use quizflow_config::{ConfigError, QuizflowConfig};
use quizflow_engine::{Phase, QuestionId, QuizFlow};
use quizflow_telemetry::{ParamValue, RecordingSink};
use tempfile::tempdir;

use crate::common::answer_all;

#[test]
fn config_file_shapes_the_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[quiz]
content_name = "Spring Campaign"
product_url = "https://shop.example/oil"
analysis_step_ms = 10

[telemetry]
enabled = false
"#,
    )
    .unwrap();

    let config = QuizflowConfig::load_from(&path).unwrap();
    assert!(!config.telemetry_settings().enabled);

    let settings = config.quiz_settings();
    assert_eq!(settings.analysis_step(), Duration::from_millis(10));

    let sink = RecordingSink::new();
    let mut flow = QuizFlow::new(settings, sink.clone());
    flow.start().unwrap();
    answer_all(&mut flow, |id| (id == QuestionId::Gender).then_some("Male"));
    for _ in 0..5 {
        flow.tick(Duration::from_millis(10));
    }

    assert_eq!(flow.phase(), Phase::Result);
    assert_eq!(flow.cta_clicked().unwrap(), "https://shop.example/oil");
    assert!(sink.events().iter().all(|event| {
        event.param("content_name").and_then(ParamValue::as_text) == Some("Spring Campaign")
    }));
}

#[test]
fn broken_config_reports_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[quiz\ncontent_name = ").unwrap();

    let err = QuizflowConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path);
}
