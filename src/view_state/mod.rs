//! View-state layer - derived layout data for the carousel
//!
//! Pure functions and small state holders that sit between the raw host
//! environment (viewport width, pointer coordinates) and the slide state
//! machine.
//!
//! # Module Structure
//!
//! - `viewport`: ViewportClass and Breakpoints - width → items per page
//! - `partition`: page slicing of the item list (derived, never stored)
//! - `resize`: ResizeDebouncer - trailing debounce of resize notifications
//! - `hit_test`: ControlLayout - pointer hit-testing against controls

pub mod partition;
pub mod resize;
pub mod viewport;

pub use hit_test::{ControlHit, ControlLayout};
pub use partition::{page_at, page_count, partition};
pub use resize::ResizeDebouncer;
pub use viewport::{Breakpoints, ViewportClass};
