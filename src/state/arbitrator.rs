//! Input arbitration.
//!
//! Translates events from the four input sources (autoplay timer, swipe
//! gestures, keyboard, on-screen controls) into at most one
//! [`TransitionRequest`] each. The arbitrator never mutates slide state; the
//! caller feeds its output straight into [`SlideMachine::apply`].
//!
//! [`SlideMachine::apply`]: super::slide_state::SlideMachine::apply

use super::slide_state::{SlideState, TransitionRequest};
use crate::model::KeyAction;
use crate::view_state::ControlHit;

/// Horizontal swipe gesture, named by finger travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Content dragged leftwards: reveals the next page.
    Left,
    /// Content dragged rightwards: reveals the previous page.
    Right,
}

/// An event from any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The autoplay interval elapsed.
    AutoplayTick,
    /// A completed swipe gesture.
    Swipe(SwipeDirection),
    /// A bound key was pressed.
    Key(KeyAction),
    /// An on-screen control was clicked.
    Control(ControlHit),
}

/// Maps input events to transition requests, scoping keyboard input to focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArbitrator {
    focus_within: bool,
}

impl InputArbitrator {
    /// Create an arbitrator with focus outside the carousel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether keyboard focus is inside the carousel region.
    pub fn focus_within(&self) -> bool {
        self.focus_within
    }

    /// Record whether keyboard focus is inside the carousel region.
    pub fn set_focus_within(&mut self, focused: bool) {
        self.focus_within = focused;
    }

    /// Translate one event. Returns `None` for events the carousel ignores.
    ///
    /// Keyboard events are dropped entirely while focus is outside the
    /// carousel. No debouncing: each event yields at most one request.
    pub fn translate(
        &self,
        event: InputEvent,
        state: &SlideState,
        page_count: usize,
    ) -> Option<TransitionRequest> {
        match event {
            InputEvent::AutoplayTick => Some(TransitionRequest::Next),
            InputEvent::Swipe(SwipeDirection::Left) => Some(TransitionRequest::Next),
            InputEvent::Swipe(SwipeDirection::Right) => Some(TransitionRequest::Previous),
            InputEvent::Key(action) => {
                if !self.focus_within {
                    return None;
                }
                translate_key(action, state, page_count)
            }
            InputEvent::Control(hit) => Some(translate_control(hit, state)),
        }
    }
}

fn translate_key(
    action: KeyAction,
    state: &SlideState,
    page_count: usize,
) -> Option<TransitionRequest> {
    match action {
        KeyAction::Next => Some(TransitionRequest::Next),
        KeyAction::Previous => Some(TransitionRequest::Previous),
        KeyAction::TogglePlay => Some(TransitionRequest::SetPlaying(!state.is_playing())),
        KeyAction::First => Some(TransitionRequest::GoTo(0)),
        KeyAction::Last => Some(TransitionRequest::GoTo(last_index(page_count))),
        KeyAction::CycleFocus | KeyAction::Help | KeyAction::Reload | KeyAction::Quit => None,
    }
}

fn translate_control(hit: ControlHit, state: &SlideState) -> TransitionRequest {
    match hit {
        ControlHit::Previous => TransitionRequest::Previous,
        ControlHit::Next => TransitionRequest::Next,
        ControlHit::Dot(index) => TransitionRequest::GoTo(index as i64),
        ControlHit::PlayPause => TransitionRequest::SetPlaying(!state.is_playing()),
    }
}

fn last_index(page_count: usize) -> i64 {
    page_count.max(1) as i64 - 1
}

// ===== Tests =====

#[cfg(test)]
#[path = "arbitrator_tests.rs"]
mod tests;
