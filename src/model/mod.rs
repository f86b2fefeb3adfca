//! Domain model types (pure).
//!
//! All types in this module are pure data with no I/O.

pub mod direction;
pub mod error;
pub mod item;
pub mod key_action;

// Re-export for convenience
pub use direction::Direction;
pub use error::{AppError, ItemsError};
pub use item::{default_technologies, Item, UNKNOWN_ITEM_NAME};
pub use key_action::KeyAction;
