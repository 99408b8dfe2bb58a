//! End-to-end quiz sessions driven through the public flow API.

use quizflow_core::{BASE_CATALOG_LEN, BRANCHED_CATALOG_LEN, UrgencyBlock, severity};
use quizflow_engine::{FlowError, Phase, QuestionId, Severity};
use quizflow_telemetry::{Channel, EventName, ParamValue};

use crate::common::{ANALYSIS_STEP, answer_all, finish_analysis, recorded_flow};

fn gender(choice: &'static str) -> impl Fn(QuestionId) -> Option<&'static str> {
    move |id| (id == QuestionId::Gender).then_some(choice)
}

#[test]
fn undisclosed_gender_runs_the_short_catalog() {
    let (mut flow, _sink) = recorded_flow();
    flow.start().unwrap();
    assert_eq!(flow.progress().map(|p| p.total), Some(BASE_CATALOG_LEN));

    answer_all(&mut flow, gender("Prefer not to say"));

    assert_eq!(flow.phase(), Phase::Analysis);
    assert_eq!(flow.answers().len(), 13);
    assert!(!flow.answers().contains(QuestionId::HormonalImpact));
    assert!(!flow.answers().contains(QuestionId::DhtAwareness));
}

#[test]
fn female_session_includes_the_female_block() {
    let (mut flow, _sink) = recorded_flow();
    flow.start().unwrap();
    answer_all(&mut flow, gender("Female"));

    assert!(flow.answers().contains(QuestionId::HormonalImpact));
    assert!(flow.answers().contains(QuestionId::IdentityFemininity));
    assert!(!flow.answers().contains(QuestionId::DhtAwareness));
    assert_eq!(flow.answers().len(), 15);
}

#[test]
fn full_session_reaches_result_with_consistent_view() {
    let (mut flow, sink) = recorded_flow();
    flow.start().unwrap();
    answer_all(&mut flow, gender("Male"));
    finish_analysis(&mut flow);

    assert_eq!(flow.phase(), Phase::Result);
    let view = flow.result_view().unwrap();
    assert_eq!(view.severity, severity(flow.answers()));
    assert_eq!(view.urgency, UrgencyBlock::select(flow.answers()));

    let completed: Vec<_> = sink
        .events()
        .into_iter()
        .filter(|event| event.name() == EventName::QuizCompleted)
        .collect();
    assert_eq!(completed.len(), 2);
    assert_eq!(
        completed[1].param("total_questions").and_then(ParamValue::as_int),
        Some(BRANCHED_CATALOG_LEN as i64)
    );
    assert_eq!(
        completed[1].param("answers_count").and_then(ParamValue::as_int),
        Some(15)
    );
}

#[test]
fn desperate_answers_score_very_bad() {
    let (mut flow, _sink) = recorded_flow();
    flow.start().unwrap();
    answer_all(&mut flow, |id| match id {
        QuestionId::Gender => Some("Male"),
        QuestionId::MainProblem => Some("I'm terrified I'll go completely bald"),
        QuestionId::SocialImpact => Some("My confidence is completely shot"),
        QuestionId::HowDesperately => Some("I've almost given up hope completely"),
        QuestionId::HowBadlyNeed => Some("DESPERATELY - I can't lose any more hair"),
        _ => None,
    });
    finish_analysis(&mut flow);

    let view = flow.result_view().unwrap();
    assert_eq!(view.severity, Severity::VeryBad);
}

#[test]
fn every_event_carries_category_and_content_name() {
    let (mut flow, sink) = recorded_flow();
    flow.start().unwrap();
    answer_all(&mut flow, gender("Female"));
    finish_analysis(&mut flow);
    flow.cta_clicked().unwrap();

    let events = sink.events();
    assert!(!events.is_empty());
    for event in &events {
        assert_eq!(
            event.param("event_category").and_then(ParamValue::as_text),
            Some("quiz_interaction"),
            "{} lacks event_category",
            event.name()
        );
        assert_eq!(
            event.param("content_name").and_then(ParamValue::as_text),
            Some("Hair Loss Quiz")
        );
    }
    assert!(events.iter().any(|e| e.channel() == Channel::Pixel));
    assert!(events.iter().any(|e| e.channel() == Channel::Analytics));
}

#[test]
fn back_from_first_question_returns_to_intro_and_restart_works() {
    let (mut flow, sink) = recorded_flow();
    flow.start().unwrap();
    flow.go_back().unwrap();
    assert_eq!(flow.phase(), Phase::Intro);

    sink.take();
    flow.start().unwrap();
    assert_eq!(flow.phase(), Phase::Quiz { index: 0 });
    assert_eq!(sink.names().first(), Some(&EventName::QuizStartButtonClicked));
}

#[test]
fn input_during_analysis_is_rejected() {
    let (mut flow, _sink) = recorded_flow();
    flow.start().unwrap();
    answer_all(&mut flow, gender("Male"));

    assert!(matches!(
        flow.go_back(),
        Err(FlowError::InvalidPhase { .. })
    ));
    assert!(matches!(
        flow.submit_answer(QuestionId::Age, "Under 30"),
        Err(FlowError::InvalidPhase { .. })
    ));
}

#[test]
fn teardown_mid_analysis_freezes_the_session() {
    let (mut flow, sink) = recorded_flow();
    flow.start().unwrap();
    answer_all(&mut flow, gender("Male"));
    flow.tick(ANALYSIS_STEP);

    flow.teardown();
    let before = sink.len();
    finish_analysis(&mut flow);

    assert_eq!(flow.phase(), Phase::Analysis);
    assert_eq!(sink.len(), before);
}

#[test]
fn declining_opens_the_follow_up_offer() {
    let (mut flow, sink) = recorded_flow();
    flow.start().unwrap();
    answer_all(&mut flow, gender("Male"));
    finish_analysis(&mut flow);

    assert_eq!(flow.popup_cta_clicked(), Err(FlowError::PopupClosed));
    flow.decline_offer().unwrap();
    assert!(flow.is_popup_open());

    let url = flow.popup_cta_clicked().unwrap().to_owned();
    assert_eq!(url, flow.settings().product_url());
    assert_eq!(sink.names().last(), Some(&EventName::PopupInteraction));

    flow.dismiss_popup();
    assert!(!flow.is_popup_open());
}
