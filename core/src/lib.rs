//! Core domain logic for Quizflow.
//!
//! Everything in this crate is a pure function of the answer map:
//! the question catalog, the scoring heuristics, and result selection.
//! No timers, no IO, no telemetry.

pub mod catalog;
pub mod content;
pub mod result;
pub mod scoring;

pub use catalog::{BASE_CATALOG_LEN, BRANCHED_CATALOG_LEN, build_catalog};
pub use content::{
    ANALYSIS_FOOTER, ANALYSIS_HEADING, ANALYSIS_MESSAGES, INTRO_BODY, INTRO_HEADLINE,
    INTRO_TAGLINE, START_BUTTON_TEXT,
};
pub use result::{ResultView, UrgencyBlock};
pub use scoring::{PersonaScores, persona, persona_scores, severity, severity_score};
