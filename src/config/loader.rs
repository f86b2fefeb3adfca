//! Configuration file loading with precedence handling.

use crate::state::{CarouselSettings, SwipeConfig};
use crate::view_state::Breakpoints;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TECHDECK_CONFIG";
/// Environment variable overriding the autoplay interval (milliseconds).
pub const AUTOPLAY_ENV: &str = "TECHDECK_AUTOPLAY_MS";
/// Environment variable naming an item file.
pub const ITEMS_ENV: &str = "TECHDECK_ITEMS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A resolved value is out of range.
    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/techdeck/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Autoplay cadence in milliseconds.
    #[serde(default)]
    pub autoplay_interval_ms: Option<u64>,

    /// Minimum horizontal drag for a swipe, in pixels.
    #[serde(default)]
    pub swipe_threshold_px: Option<u32>,

    /// Maximum press-to-release time for a swipe, in milliseconds.
    #[serde(default)]
    pub swipe_max_duration_ms: Option<u64>,

    /// Pixels per terminal column when mapping to viewport width.
    #[serde(default)]
    pub cell_width_px: Option<u32>,

    /// Quiet period before a resize is applied, in milliseconds.
    #[serde(default)]
    pub resize_debounce_ms: Option<u64>,

    /// Whether autoplay starts enabled.
    #[serde(default)]
    pub autoplay: Option<bool>,

    /// Item list file (JSON or TOML).
    #[serde(default)]
    pub items_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Viewport breakpoints; missing thresholds keep their defaults.
    #[serde(default)]
    pub breakpoints: Option<Breakpoints>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Autoplay cadence in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Swipe threshold in pixels.
    pub swipe_threshold_px: u32,
    /// Swipe duration window in milliseconds.
    pub swipe_max_duration_ms: u64,
    /// Pixels per terminal column.
    pub cell_width_px: u32,
    /// Resize debounce in milliseconds.
    pub resize_debounce_ms: u64,
    /// Whether autoplay starts enabled.
    pub autoplay: bool,
    /// Item list file; `None` uses the built-in catalogue.
    pub items_file: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Viewport breakpoints.
    pub breakpoints: Breakpoints,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 4000,
            swipe_threshold_px: 50,
            swipe_max_duration_ms: 500,
            cell_width_px: 8,
            resize_debounce_ms: 100,
            autoplay: true,
            items_file: None,
            log_file_path: default_log_path(),
            breakpoints: Breakpoints::default(),
        }
    }
}

impl ResolvedConfig {
    /// Reject values the carousel cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "autoplay_interval_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.cell_width_px == 0 {
            return Err(ConfigError::Invalid {
                field: "cell_width_px",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.breakpoints.is_ascending() {
            return Err(ConfigError::Invalid {
                field: "breakpoints",
                reason: format!(
                    "must be strictly ascending, got small={} medium={} large={} extra_large={}",
                    self.breakpoints.small,
                    self.breakpoints.medium,
                    self.breakpoints.large,
                    self.breakpoints.extra_large
                ),
            });
        }
        Ok(())
    }

    /// Carousel tunables derived from this config.
    pub fn carousel_settings(&self) -> CarouselSettings {
        CarouselSettings {
            autoplay_interval: Duration::from_millis(self.autoplay_interval_ms),
            swipe: SwipeConfig {
                threshold_px: self.swipe_threshold_px,
                max_duration: Duration::from_millis(self.swipe_max_duration_ms),
            },
            breakpoints: self.breakpoints,
            start_playing: self.autoplay,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/techdeck/techdeck.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("techdeck").join("techdeck.log")
    } else {
        PathBuf::from("techdeck.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/techdeck/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("techdeck").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TECHDECK_CONFIG` environment variable
/// 3. Default path `~/.config/techdeck/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        autoplay_interval_ms: config
            .autoplay_interval_ms
            .unwrap_or(defaults.autoplay_interval_ms),
        swipe_threshold_px: config
            .swipe_threshold_px
            .unwrap_or(defaults.swipe_threshold_px),
        swipe_max_duration_ms: config
            .swipe_max_duration_ms
            .unwrap_or(defaults.swipe_max_duration_ms),
        cell_width_px: config.cell_width_px.unwrap_or(defaults.cell_width_px),
        resize_debounce_ms: config
            .resize_debounce_ms
            .unwrap_or(defaults.resize_debounce_ms),
        autoplay: config.autoplay.unwrap_or(defaults.autoplay),
        items_file: config.items_file.or(defaults.items_file),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        breakpoints: config.breakpoints.unwrap_or(defaults.breakpoints),
    }
}

/// An environment override that was present but could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredEnvVar {
    /// Variable name.
    pub name: &'static str,
    /// Raw value as found in the environment.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TECHDECK_AUTOPLAY_MS`: Override autoplay interval (ignored if not a number)
/// - `TECHDECK_ITEMS`: Override item file path
///
/// Runs before logging is initialized, so rejected values are returned
/// rather than logged. Pass them to [`warn_ignored_env`] once a subscriber
/// is installed.
pub fn apply_env_overrides(
    mut config: ResolvedConfig,
) -> (ResolvedConfig, Vec<IgnoredEnvVar>) {
    let mut ignored = Vec::new();

    if let Ok(raw) = std::env::var(AUTOPLAY_ENV) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.autoplay_interval_ms = ms,
            Err(e) => ignored.push(IgnoredEnvVar {
                name: AUTOPLAY_ENV,
                value: raw,
                reason: e.to_string(),
            }),
        }
    }

    if let Ok(path) = std::env::var(ITEMS_ENV) {
        if !path.is_empty() {
            config.items_file = Some(PathBuf::from(path));
        }
    }

    (config, ignored)
}

/// Emit one warning per rejected environment override.
pub fn warn_ignored_env(ignored: &[IgnoredEnvVar]) {
    for var in ignored {
        warn!(value = %var.value, error = %var.reason, "ignoring unparseable {}", var.name);
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    items_override: Option<PathBuf>,
    interval_override: Option<u64>,
    paused_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(items) = items_override {
        config.items_file = Some(items);
    }

    if let Some(interval) = interval_override {
        config.autoplay_interval_ms = interval;
    }

    if let Some(paused) = paused_override {
        config.autoplay = !paused;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
