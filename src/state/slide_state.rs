//! Slide index state machine.
//!
//! [`SlideMachine`] is the single writer of [`SlideState`]. Every mutation is a
//! guarded transition that reports a [`TransitionOutcome`]; invalid index
//! requests are wrapped or ignored, never reported as errors.

use crate::model::Direction;
use tracing::debug;

/// Authoritative position, direction and play state of the carousel.
///
/// A read-only snapshot; only [`SlideMachine`] can produce a changed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideState {
    current_index: usize,
    direction: Direction,
    is_playing: bool,
}

impl SlideState {
    fn initial() -> Self {
        Self {
            current_index: 0,
            direction: Direction::Forward,
            is_playing: true,
        }
    }

    /// Index of the page being shown. Always `< page_count`.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Direction of the last user- or timer-directed transition.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether autoplay is enabled.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }
}

impl Default for SlideState {
    fn default() -> Self {
        Self::initial()
    }
}

/// A single request to change the slide state.
///
/// Produced by input sources, consumed immediately by [`SlideMachine::apply`];
/// never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRequest {
    /// Advance one page, wrapping from last to first.
    Next,
    /// Go back one page, wrapping from first to last.
    Previous,
    /// Jump to a page. Out-of-range and negative targets wrap cyclically.
    GoTo(i64),
    /// Enable or disable autoplay.
    SetPlaying(bool),
}

/// What a state machine operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The page changed in the given direction.
    Moved {
        /// Page before the transition.
        from: usize,
        /// Page after the transition.
        to: usize,
        /// Recorded direction.
        direction: Direction,
    },
    /// Guarded no-op; nothing changed.
    Unchanged,
    /// The index was pulled back into range after the page count shrank.
    /// Direction is untouched.
    Clamped {
        /// Index that fell out of range.
        from: usize,
        /// Last valid index.
        to: usize,
    },
    /// Autoplay flag changed to the contained value.
    PlayingChanged(bool),
    /// State returned to `{0, forward, playing}` for a new item list.
    Reset,
}

impl TransitionOutcome {
    /// Whether anything observable changed.
    pub fn is_change(&self) -> bool {
        !matches!(self, TransitionOutcome::Unchanged)
    }

    /// Whether the change should be presented as a slide animation.
    ///
    /// Only directed moves animate; clamps and resets are silent corrections.
    pub fn is_animated(&self) -> bool {
        matches!(self, TransitionOutcome::Moved { .. })
    }
}

/// Wrap any integer onto `0..page_count`.
pub fn normalize_index(target: i64, page_count: usize) -> usize {
    let count = page_count.max(1) as i64;
    target.rem_euclid(count) as usize
}

/// Single-writer owner of [`SlideState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideMachine {
    state: SlideState,
    page_count: usize,
}

impl SlideMachine {
    /// Create a machine at `{0, forward, playing}` for `page_count` pages.
    pub fn new(page_count: usize) -> Self {
        Self {
            state: SlideState::initial(),
            page_count: page_count.max(1),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> SlideState {
        self.state
    }

    /// Number of pages the index ranges over. Always at least 1.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Jump to `target`, wrapping cyclically.
    ///
    /// No-op when the wrapped target is the current page or there is only one
    /// page. Direction is forward when the wrapped target is above the current
    /// index, backward otherwise.
    pub fn go_to(&mut self, target: i64) -> TransitionOutcome {
        if self.page_count <= 1 {
            return TransitionOutcome::Unchanged;
        }
        let to = normalize_index(target, self.page_count);
        let direction = if to > self.state.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.move_to(to, direction)
    }

    /// Advance one page. Always forward, including the wrap from last to first.
    pub fn next(&mut self) -> TransitionOutcome {
        if self.page_count <= 1 {
            return TransitionOutcome::Unchanged;
        }
        let to = normalize_index(self.state.current_index as i64 + 1, self.page_count);
        self.move_to(to, Direction::Forward)
    }

    /// Go back one page. Always backward, including the wrap from first to last.
    pub fn previous(&mut self) -> TransitionOutcome {
        if self.page_count <= 1 {
            return TransitionOutcome::Unchanged;
        }
        let to = normalize_index(self.state.current_index as i64 - 1, self.page_count);
        self.move_to(to, Direction::Backward)
    }

    /// Set the autoplay flag. Does not touch any timer.
    pub fn set_playing(&mut self, playing: bool) -> TransitionOutcome {
        if self.state.is_playing == playing {
            return TransitionOutcome::Unchanged;
        }
        self.state.is_playing = playing;
        debug!(playing, "autoplay flag changed");
        TransitionOutcome::PlayingChanged(playing)
    }

    /// Adopt a new page count, clamping the index if it fell out of range.
    ///
    /// The clamp is a silent correction: direction is left as it was.
    pub fn set_page_count(&mut self, page_count: usize) -> TransitionOutcome {
        self.page_count = page_count.max(1);
        let last = self.page_count - 1;
        if self.state.current_index > last {
            let from = self.state.current_index;
            self.state.current_index = last;
            debug!(from, to = last, "clamped slide index after page count shrank");
            return TransitionOutcome::Clamped { from, to: last };
        }
        TransitionOutcome::Unchanged
    }

    /// Return to `{0, forward, playing}` with a fresh page count.
    pub fn reset(&mut self, page_count: usize) -> TransitionOutcome {
        self.state = SlideState::initial();
        self.page_count = page_count.max(1);
        debug!(page_count = self.page_count, "slide state reset");
        TransitionOutcome::Reset
    }

    /// Apply one request.
    pub fn apply(&mut self, request: TransitionRequest) -> TransitionOutcome {
        match request {
            TransitionRequest::Next => self.next(),
            TransitionRequest::Previous => self.previous(),
            TransitionRequest::GoTo(target) => self.go_to(target),
            TransitionRequest::SetPlaying(playing) => self.set_playing(playing),
        }
    }

    fn move_to(&mut self, to: usize, direction: Direction) -> TransitionOutcome {
        let from = self.state.current_index;
        if to == from {
            return TransitionOutcome::Unchanged;
        }
        self.state.current_index = to;
        self.state.direction = direction;
        debug!(from, to, ?direction, "slide transition");
        TransitionOutcome::Moved {
            from,
            to,
            direction,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "slide_state_tests.rs"]
mod tests;
