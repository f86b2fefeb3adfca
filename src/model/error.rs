//! Error types for techdeck.
//!
//! Hierarchical error taxonomy built on `thiserror`, composing via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all fallible concerns
//!   - [`ConfigError`] - Config file read/parse/validation failures
//!   - [`ItemsError`] - Item list file failures (missing, unreadable, malformed)
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! # What is NOT an error
//!
//! Carousel navigation never fails. Out-of-range, negative, or single-page index
//! requests are wrapped or ignored inside the state machine and never surface
//! here.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Recovery Behavior
///
/// - **Config/Logging/Terminal**: Fatal at startup, reported on stderr.
/// - **Items**: Fatal at startup; during a live reload the previous list is kept
///   and the failure is logged.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Item list could not be loaded.
    #[error("Failed to load items: {0}")]
    Items(#[from] ItemsError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading the item list from a file.
#[derive(Debug, Error)]
pub enum ItemsError {
    /// The configured item file does not exist.
    #[error("Item file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The item file exists but could not be read.
    #[error("Failed to read item file {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The item file contents are not a valid item list.
    #[error("Invalid item file {path}: {reason}")]
    Parse {
        /// Path with invalid contents.
        path: PathBuf,
        /// Parser error details.
        reason: String,
    },

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported item file format (expected .json or .toml): {0}")]
    UnsupportedFormat(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_error_converts_into_app_error() {
        fn load() -> Result<(), AppError> {
            Err(ItemsError::FileNotFound {
                path: PathBuf::from("/missing/items.json"),
            })?;
            Ok(())
        }

        let err = load().unwrap_err();
        assert!(matches!(err, AppError::Items(ItemsError::FileNotFound { .. })));
        assert!(err.to_string().contains("/missing/items.json"));
    }

    #[test]
    fn io_error_converts_into_terminal_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Terminal(_)));
        assert!(err.to_string().starts_with("Terminal error"));
    }

    #[test]
    fn unsupported_format_names_the_path() {
        let err = ItemsError::UnsupportedFormat(PathBuf::from("items.yaml"));
        assert!(err.to_string().contains("items.yaml"));
    }
}
