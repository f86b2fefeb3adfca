//! Trailing debounce for viewport resize notifications.

use std::time::{Duration, Instant};

/// Collapses a burst of resize notifications into the last width.
///
/// Each [`push`](Self::push) restarts the quiet period; [`poll`](Self::poll)
/// yields the latest width once no resize has arrived for `quiet`.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<(u32, Instant)>,
}

impl ResizeDebouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a resize to `width_px` observed at `now`.
    pub fn push(&mut self, width_px: u32, now: Instant) {
        self.pending = Some((width_px, now));
    }

    /// Instant at which the pending width becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, at)| at + self.quiet)
    }

    /// Take the pending width if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<u32> {
        match self.pending {
            Some((width, at)) if now.saturating_duration_since(at) >= self.quiet => {
                self.pending = None;
                Some(width)
            }
            _ => None,
        }
    }

    /// Whether a width is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
