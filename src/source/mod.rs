//! Item list sources.
//!
//! The carousel shows either the built-in technology catalogue or a list read
//! from a JSON/TOML file. A file source can be re-read on demand.

use crate::model::{default_technologies, Item, ItemsError};
use std::path::PathBuf;

pub mod file;

pub use file::load_items_file;

/// Where the item list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSource {
    /// The built-in technology catalogue.
    Builtin,
    /// A JSON or TOML file, re-read on every load.
    File(PathBuf),
}

impl ItemSource {
    /// Pick the source for an optional configured path.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ItemSource::File(path),
            None => ItemSource::Builtin,
        }
    }

    /// Load the current item list.
    ///
    /// # Errors
    ///
    /// Returns `ItemsError` if a file source cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<Item>, ItemsError> {
        match self {
            ItemSource::Builtin => Ok(default_technologies()),
            ItemSource::File(path) => load_items_file(path),
        }
    }

    /// Whether reloading can produce a different list.
    pub fn is_reloadable(&self) -> bool {
        matches!(self, ItemSource::File(_))
    }
}
