//! Deterministic countdowns driven by explicit time deltas.
//!
//! Nothing here reads a wall clock. Owners call `advance` with the time that
//! passed, which keeps every delay reproducible in tests.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    elapsed: Duration,
    duration: Duration,
}

impl Countdown {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Time accumulated past the deadline.
    #[must_use]
    pub fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}
