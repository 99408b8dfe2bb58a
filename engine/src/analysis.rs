//! Scripted "analysis" pacing between the last answer and the result page.

use std::cmp::Ordering;
use std::time::Duration;

use quizflow_core::ANALYSIS_MESSAGES;
use quizflow_types::Countdown;

/// Display state of one analysis message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Done,
    Active,
    Pending,
}

/// Steps through [`ANALYSIS_MESSAGES`], holding each for one step duration.
///
/// The first message is active on construction. Completion is reported once,
/// after the last message has been held for a full step.
#[derive(Debug, Clone)]
pub struct AnalysisSequencer {
    current: usize,
    timer: Countdown,
    step: Duration,
    complete: bool,
}

impl AnalysisSequencer {
    #[must_use]
    pub fn new(step: Duration) -> Self {
        Self {
            current: 0,
            timer: Countdown::new(step),
            step,
            complete: false,
        }
    }

    /// Advance by `delta`. Returns `true` on the tick that completes the sequence.
    ///
    /// Time past a step boundary carries into the next step, so one large
    /// delta behaves like many small ones.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.complete {
            return false;
        }

        self.timer.advance(delta);
        while self.timer.is_finished() {
            if self.current + 1 >= ANALYSIS_MESSAGES.len() {
                self.complete = true;
                tracing::debug!("Analysis sequence finished");
                return true;
            }
            let carry = self.timer.overshoot();
            self.current += 1;
            self.timer = Countdown::new(self.step);
            self.timer.advance(carry);
            tracing::debug!(message = self.current, "Analysis step");
        }
        false
    }

    #[must_use]
    pub fn view(&self) -> AnalysisView {
        AnalysisView {
            current: self.current,
        }
    }
}

/// Snapshot for rendering the analysis screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisView {
    current: usize,
}

impl AnalysisView {
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        ANALYSIS_MESSAGES[self.current]
    }

    /// Bar fill, counting the active message as reached.
    #[must_use]
    pub fn percent(&self) -> u8 {
        ((self.current + 1) * 100 / ANALYSIS_MESSAGES.len()) as u8
    }

    #[must_use]
    pub fn status(&self, index: usize) -> MessageStatus {
        match index.cmp(&self.current) {
            Ordering::Less => MessageStatus::Done,
            Ordering::Equal => MessageStatus::Active,
            Ordering::Greater => MessageStatus::Pending,
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = (&'static str, MessageStatus)> + '_ {
        ANALYSIS_MESSAGES
            .iter()
            .enumerate()
            .map(|(index, message)| (*message, self.status(index)))
    }
}
