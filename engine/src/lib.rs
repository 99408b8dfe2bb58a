//! Session engine for Quizflow - flow controller and analysis pacing.
//!
//! This crate holds the stateful parts of a quiz session without any
//! terminal dependencies. Time enters only through [`QuizFlow::tick`].

pub mod analysis;
pub mod flow;

pub use analysis::{AnalysisSequencer, AnalysisView, MessageStatus};
pub use flow::{FlowError, Progress, QuizFlow};

pub use quizflow_core::{ResultView, UrgencyBlock};
pub use quizflow_telemetry::{NoopSink, RecordingSink, TelemetryEvent, TelemetrySink};
pub use quizflow_types::{
    AnswerMap, InfoStep, Phase, QuestionId, QuestionStep, QuizSettings, Severity, Step,
};
