//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

use huddle_protocol::ProtocolError;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The log level is not one of the recognized filter levels.
    #[error("invalid log level: {0:?} (expected trace, debug, info, warn, error or off)")]
    InvalidLogLevel(String),

    /// The user name is empty or whitespace.
    #[error("user name must not be empty")]
    EmptyUserName,

    /// A customizer color is not a `#RRGGBB` hex string.
    #[error("invalid {role} color: {source}")]
    InvalidColor {
        /// Which customizer color was rejected.
        role: &'static str,
        /// The underlying parse error.
        #[source]
        source: ProtocolError,
    },

    /// An environment variable holds a value that does not parse.
    #[error("invalid value in {var}: {source}")]
    InvalidEnv {
        /// The environment variable name.
        var: &'static str,
        /// The underlying parse error.
        #[source]
        source: ProtocolError,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = ConfigError::InvalidEnv {
            var: "HUDDLE_THEME",
            source: ProtocolError::UnknownTheme("neon".to_string()),
        };
        assert_eq!(err.to_string(), "invalid value in HUDDLE_THEME: unknown theme: neon");

        let err = ConfigError::InvalidLogLevel("loud".to_string());
        assert!(err.to_string().starts_with(r#"invalid log level: "loud""#));
    }
}
