//! Restartable autoplay interval.
//!
//! The timer is a deadline, not a thread: the event loop asks for
//! [`AutoplayTimer::deadline`] to size its poll timeout and calls
//! [`AutoplayTimer::poll`] afterwards. Dropping or cancelling the timer
//! guarantees no further tick is produced.

use std::time::{Duration, Instant};
use tracing::debug;

/// Inputs that decide whether autoplay runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayConditions {
    /// Autoplay flag from the slide state.
    pub is_playing: bool,
    /// Current page count.
    pub page_count: usize,
    /// Pointer is over the carousel.
    pub is_hovered: bool,
}

impl AutoplayConditions {
    /// Running condition: playing, more than one page, not hovered.
    pub fn should_run(&self) -> bool {
        self.is_playing && self.page_count > 1 && !self.is_hovered
    }
}

/// Fixed-cadence interval that restarts whenever its conditions change.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval: Duration,
    deadline: Option<Instant>,
    last_conditions: Option<AutoplayConditions>,
}

impl AutoplayTimer {
    /// Create a stopped timer with the given cadence.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
            last_conditions: None,
        }
    }

    /// Cadence between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Reconcile with the latest conditions.
    ///
    /// Any change restarts the countdown from zero if the running condition
    /// holds, and clears it otherwise. Unchanged conditions leave a running
    /// countdown alone.
    pub fn sync(&mut self, conditions: AutoplayConditions, now: Instant) {
        if self.last_conditions == Some(conditions) {
            return;
        }
        self.last_conditions = Some(conditions);

        if conditions.should_run() {
            self.deadline = Some(now + self.interval);
            debug!(interval_ms = self.interval.as_millis() as u64, "autoplay armed");
        } else if self.deadline.take().is_some() {
            debug!(?conditions, "autoplay cleared");
        }
    }

    /// Fire if due. A fired timer re-arms one interval after `now`, so missed
    /// ticks are never replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// When the next tick is due, if running.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a countdown is active.
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Stop unconditionally and forget the last conditions.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.last_conditions = None;
    }
}
