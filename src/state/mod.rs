//! Carousel state machine and UI state (pure).
//!
//! All state transitions are synchronous and testable without a terminal.
//! Time is passed in as `Instant` values rather than read from the clock.

pub mod app_state;
pub mod arbitrator;
pub mod autoplay;
pub mod carousel;
pub mod slide_state;
pub mod swipe;

// Re-export for convenience
pub use app_state::{AppState, FocusRegion};
pub use arbitrator::{InputArbitrator, InputEvent, SwipeDirection};
pub use autoplay::{AutoplayConditions, AutoplayTimer};
pub use carousel::{Carousel, CarouselSettings};
pub use slide_state::{
    normalize_index, SlideMachine, SlideState, TransitionOutcome, TransitionRequest,
};
pub use swipe::{PointerPos, SwipeConfig, SwipeTracker};
