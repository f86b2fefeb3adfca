//! techdeck
//!
//! Responsive, auto-advancing technology carousel for the terminal.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `view_state` and `state`
//! are synchronous and take time as an explicit `Instant`; `view` owns the
//! terminal and the event loop; `config`, `logging` and `source` handle the
//! outside world.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
