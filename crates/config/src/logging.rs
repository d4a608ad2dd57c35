//! Logging configuration.
//!
//! The terminal UI owns stdout, so log output goes to a file or nowhere.
//! With no file configured logging stays off.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter levels accepted in `level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for log output.
///
/// # Examples
///
/// ```
/// use huddle_config::LogConfig;
///
/// let config = LogConfig::default();
/// assert_eq!(config.level, "info");
/// assert!(!config.is_enabled());
///
/// let config = LogConfig::to_file("/tmp/huddle.log").with_level("debug");
/// assert!(config.is_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Maximum level to record (`trace` .. `error`, or `off`).
    #[serde(default = "default_level")]
    pub level: String,

    /// File to append log lines to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Creates a configuration that logs to `path` at the default level.
    #[must_use]
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            level: default_level(),
            file: Some(path.into()),
        }
    }

    /// Replaces the level.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Returns `true` if log lines will be written anywhere.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some() && !self.level.eq_ignore_ascii_case("off")
    }

    /// Validates the log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for an unknown level.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel(self.level.clone()))
        }
    }
}
