//! Quiz flow controller.
//!
//! [`QuizFlow`] owns the whole session: answers, phase, pending timers and
//! the telemetry sink. Every state change goes through one of its methods.
//!
//! # Phases
//!
//! ```text
//! Intro --start--> Quiz(0) --answer/continue--> Quiz(n) --last step--> Analysis --sequence--> Result
//!   ^                 |
//!   +----go_back------+
//! ```
//!
//! # Time
//!
//! The controller never reads a clock for its own behaviour. Callers feed
//! elapsed time through [`QuizFlow::tick`], which fires the answer debounce
//! and drives the analysis sequence. Tests advance time by hand.

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use thiserror::Error;

use quizflow_core::result::{DECLINE_BUTTON_TEXT, POPUP_CTA_TEXT};
use quizflow_core::{ResultView, build_catalog, persona, severity};
use quizflow_telemetry::{EVENT_CATEGORY, EventName, TelemetryEvent, TelemetrySink};
use quizflow_types::{AnswerMap, Countdown, Phase, QuestionId, QuizSettings, Step};

use crate::analysis::{AnalysisSequencer, AnalysisView};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("cannot {action} during {phase}")]
    InvalidPhase {
        action: &'static str,
        phase: &'static str,
    },
    #[error("current step is {current}, not {requested}")]
    WrongStep {
        current: &'static str,
        requested: QuestionId,
    },
    #[error("{value:?} is not an option for {question}")]
    UnknownOption { question: QuestionId, value: String },
    #[error("current step is not an info step")]
    NotInfoStep,
    #[error("{0} has not been answered")]
    Unanswered(QuestionId),
    #[error("no follow-up offer is open")]
    PopupClosed,
    #[error("quiz session has ended")]
    TornDown,
}

/// Position in the current catalog, for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based step number.
    pub number: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.number * 100 / self.total).min(100) as u8
    }
}

pub struct QuizFlow {
    settings: QuizSettings,
    sink: Box<dyn TelemetrySink>,
    phase: Phase,
    answers: AnswerMap,
    /// Session clock, advanced only by `tick`.
    now: Duration,
    step_shown_at: Duration,
    pending_advance: Option<Countdown>,
    analysis: Option<AnalysisSequencer>,
    popup_open: bool,
    torn_down: bool,
}

impl QuizFlow {
    #[must_use]
    pub fn new(settings: QuizSettings, sink: impl TelemetrySink + 'static) -> Self {
        Self {
            settings,
            sink: Box::new(sink),
            phase: Phase::Intro,
            answers: AnswerMap::new(),
            now: Duration::ZERO,
            step_shown_at: Duration::ZERO,
            pending_advance: None,
            analysis: None,
            popup_open: false,
            torn_down: false,
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// The step on screen, or `None` outside the quiz or when the index no
    /// longer fits the catalog.
    #[must_use]
    pub fn current_step(&self) -> Option<Step> {
        let index = self.phase.quiz_index()?;
        build_catalog(&self.answers).get(index).copied()
    }

    /// Previously recorded answer for the question on screen.
    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        let id = self.current_step()?.question_id()?;
        self.answers.get(id)
    }

    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        let index = self.phase.quiz_index()?;
        let total = build_catalog(&self.answers).len();
        (index < total).then_some(Progress {
            number: index + 1,
            total,
        })
    }

    #[must_use]
    pub fn is_advance_pending(&self) -> bool {
        self.pending_advance.is_some()
    }

    #[must_use]
    pub fn analysis_view(&self) -> Option<AnalysisView> {
        match self.phase {
            Phase::Analysis => self.analysis.as_ref().map(AnalysisSequencer::view),
            _ => None,
        }
    }

    #[must_use]
    pub fn result_view(&self) -> Option<ResultView> {
        matches!(self.phase, Phase::Result).then(|| ResultView::from_answers(&self.answers))
    }

    #[must_use]
    pub fn is_popup_open(&self) -> bool {
        self.popup_open
    }

    /// Whole seconds of session time.
    #[must_use]
    pub fn time_on_page(&self) -> u64 {
        self.now.as_secs()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    pub fn start(&mut self) -> Result<(), FlowError> {
        self.require_live()?;
        self.require_phase("start", matches!(self.phase, Phase::Intro))?;

        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.emit(
            TelemetryEvent::new(EventName::QuizStartButtonClicked)
                .with("button_location", "hero_section")
                .with("timestamp", timestamp.clone()),
        );
        self.emit(TelemetryEvent::new(EventName::Lead));
        self.emit(TelemetryEvent::new(EventName::QuizStarted).with("timestamp", timestamp));
        self.emit(TelemetryEvent::new(EventName::InitiateCheckout));

        tracing::debug!("Quiz started");
        self.show_step(0);
        Ok(())
    }

    /// Record `value` for `question` and schedule the move to the next step.
    ///
    /// Answering again before the debounce fires replaces the answer and
    /// restarts the delay.
    pub fn submit_answer(&mut self, question: QuestionId, value: &str) -> Result<(), FlowError> {
        self.require_live()?;
        self.revalidate();
        let index = self.quiz_index("answer a question")?;
        let Some(step) = self.current_step() else {
            return Err(self.phase_error("answer a question"));
        };
        let Some(current) = step.as_question() else {
            return Err(FlowError::WrongStep {
                current: step.key(),
                requested: question,
            });
        };
        if current.id != question {
            return Err(FlowError::WrongStep {
                current: current.id.as_str(),
                requested: question,
            });
        }
        let Some(choice) = current.choice(value) else {
            return Err(FlowError::UnknownOption {
                question,
                value: value.to_owned(),
            });
        };

        let spent = self.now.saturating_sub(self.step_shown_at).as_secs();
        self.answers.record(question, choice.text());
        let label = severity(&self.answers).label();

        self.emit(
            TelemetryEvent::new(EventName::QuestionTimeSpent)
                .with("question_id", question.as_str())
                .with("time_spent_seconds", spent)
                .with("quiz_severity", label),
        );
        self.emit(
            TelemetryEvent::new(EventName::QuestionAnswered)
                .with("question_id", question.as_str())
                .with("answer_selected", choice.text())
                .with("time_spent_seconds", spent)
                .with("question_number", index + 1)
                .with("quiz_severity", label),
        );
        self.emit(TelemetryEvent::new(EventName::ViewContent).with("quiz_severity", label));

        tracing::debug!(%question, "Answer recorded");
        self.pending_advance = Some(Countdown::new(self.settings.answer_debounce()));
        Ok(())
    }

    /// Move past the current step immediately.
    ///
    /// Questions must be answered first. Leaving the last step starts the
    /// analysis sequence.
    pub fn advance(&mut self) -> Result<(), FlowError> {
        self.require_live()?;
        self.revalidate();
        let index = self.quiz_index("advance")?;
        if let Some(id) = self.current_step().and_then(|step| step.question_id())
            && !self.answers.contains(id)
        {
            return Err(FlowError::Unanswered(id));
        }

        self.pending_advance = None;
        let total = build_catalog(&self.answers).len();
        if index + 1 < total {
            self.show_step(index + 1);
        } else {
            self.enter_analysis(total);
        }
        Ok(())
    }

    pub fn continue_from_info(&mut self) -> Result<(), FlowError> {
        self.require_live()?;
        self.revalidate();
        self.quiz_index("continue")?;
        let Some(Step::Info(info)) = self.current_step() else {
            return Err(FlowError::NotInfoStep);
        };

        self.emit(
            TelemetryEvent::new(EventName::InfoBoxInteraction)
                .with("info_box_title", info.title)
                .with("action", "continued"),
        );
        self.advance()
    }

    /// Step back one screen. From the first step this returns to the intro.
    pub fn go_back(&mut self) -> Result<(), FlowError> {
        self.require_live()?;
        self.revalidate();
        let index = self.quiz_index("go back")?;
        self.pending_advance = None;

        if index == 0 {
            tracing::debug!("Back to intro");
            self.phase = Phase::Intro;
        } else {
            self.show_step(index - 1);
        }
        Ok(())
    }

    /// Advance the session clock by `delta` and fire whatever is due.
    pub fn tick(&mut self, delta: Duration) {
        if self.torn_down {
            return;
        }
        self.now = self.now.saturating_add(delta);
        // Analysis entered during this tick starts counting on the next one.
        let analysing = matches!(self.phase, Phase::Analysis);

        if let Some(timer) = self.pending_advance.as_mut() {
            timer.advance(delta);
            if timer.is_finished() {
                self.pending_advance = None;
                if let Err(e) = self.advance() {
                    tracing::warn!("Scheduled advance dropped: {e}");
                }
            }
        }

        if analysing
            && let Some(sequencer) = self.analysis.as_mut()
            && sequencer.tick(delta)
        {
            self.finish_analysis();
        }

        self.revalidate();
    }

    /// Cancel every pending timer. Later ticks do nothing and every other
    /// transition fails with [`FlowError::TornDown`].
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        tracing::debug!(phase = self.phase.as_str(), "Quiz flow torn down");
        self.pending_advance = None;
        self.analysis = None;
        self.torn_down = true;
    }

    // ------------------------------------------------------------------
    // Result page
    // ------------------------------------------------------------------

    /// Report the main call to action and return the product URL.
    pub fn cta_clicked(&mut self) -> Result<&str, FlowError> {
        self.require_live()?;
        self.require_phase("open the offer", matches!(self.phase, Phase::Result))?;
        let label = severity(&self.answers).label();
        self.emit(
            TelemetryEvent::new(EventName::CtaClicked)
                .with("cta_location", "main_results")
                .with("quiz_severity", label)
                .with("time_on_page_seconds", self.time_on_page()),
        );
        self.emit(TelemetryEvent::new(EventName::AddToWishlist).with("quiz_severity", label));
        Ok(self.settings.product_url())
    }

    pub fn decline_offer(&mut self) -> Result<(), FlowError> {
        self.require_live()?;
        self.require_phase("decline the offer", matches!(self.phase, Phase::Result))?;
        self.emit(
            TelemetryEvent::new(EventName::NoThanksClicked)
                .with("quiz_severity", severity(&self.answers).label())
                .with("button_text", DECLINE_BUTTON_TEXT)
                .with("time_on_page_seconds", self.time_on_page()),
        );
        self.popup_open = true;
        Ok(())
    }

    pub fn popup_cta_clicked(&mut self) -> Result<&str, FlowError> {
        self.require_live()?;
        if !self.popup_open {
            return Err(FlowError::PopupClosed);
        }
        self.emit(
            TelemetryEvent::new(EventName::PopupInteraction)
                .with("action", "product_button_clicked")
                .with("button_text", POPUP_CTA_TEXT),
        );
        Ok(self.settings.product_url())
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_open = false;
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn emit(&self, event: TelemetryEvent) {
        let event = event
            .with("event_category", EVENT_CATEGORY)
            .with("content_name", self.settings.content_name());
        self.sink.emit(&event);
    }

    fn phase_error(&self, action: &'static str) -> FlowError {
        FlowError::InvalidPhase {
            action,
            phase: self.phase.as_str(),
        }
    }

    fn require_live(&self) -> Result<(), FlowError> {
        if self.torn_down {
            Err(FlowError::TornDown)
        } else {
            Ok(())
        }
    }

    fn require_phase(&self, action: &'static str, allowed: bool) -> Result<(), FlowError> {
        if allowed {
            Ok(())
        } else {
            Err(self.phase_error(action))
        }
    }

    fn quiz_index(&self, action: &'static str) -> Result<usize, FlowError> {
        self.phase
            .quiz_index()
            .ok_or_else(|| self.phase_error(action))
    }

    fn show_step(&mut self, index: usize) {
        self.phase = Phase::Quiz { index };
        self.step_shown_at = self.now;

        let Some(step) = self.current_step() else {
            self.revalidate();
            return;
        };
        tracing::debug!(index, step = step.key(), "Showing step");
        self.emit(
            TelemetryEvent::new(EventName::QuestionViewed)
                .with("question_id", step.key())
                .with("question_title", step.title())
                .with("question_number", index + 1),
        );
    }

    fn enter_analysis(&mut self, total: usize) {
        let label = severity(&self.answers).label();
        self.emit(
            TelemetryEvent::new(EventName::QuizCompleted)
                .with("quiz_severity", label)
                .with("total_questions", total)
                .with("time_on_page_seconds", self.time_on_page()),
        );
        self.emit(TelemetryEvent::new(EventName::CompleteRegistration).with("quiz_severity", label));

        tracing::debug!(answers = self.answers.len(), "Entering analysis");
        self.phase = Phase::Analysis;
        self.analysis = Some(AnalysisSequencer::new(self.settings.analysis_step()));
    }

    fn finish_analysis(&mut self) {
        let label = severity(&self.answers).label();
        let total = build_catalog(&self.answers).len();
        let answered = self.answers.len();
        self.emit(
            TelemetryEvent::new(EventName::QuizCompleted)
                .with("quiz_severity", label)
                .with("user_persona", persona(&self.answers).as_str())
                .with("total_questions", total)
                .with("answers_count", answered)
                .with("time_on_page_seconds", self.time_on_page()),
        );
        self.emit(
            TelemetryEvent::new(EventName::CompleteRegistration)
                .with("quiz_severity", label)
                .with("total_questions", total)
                .with("answers_count", answered),
        );

        tracing::debug!("Showing result");
        self.phase = Phase::Result;
        self.analysis = None;
    }

    /// Fail closed: an index outside the current catalog returns to the intro.
    fn revalidate(&mut self) {
        let Some(index) = self.phase.quiz_index() else {
            return;
        };
        let total = build_catalog(&self.answers).len();
        if index >= total {
            tracing::warn!(index, total, "Step index out of range; resetting to intro");
            self.phase = Phase::Intro;
            self.pending_advance = None;
        }
    }
}
