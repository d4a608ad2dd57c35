//! Error types for the huddle-protocol crate.
//!
//! Domain operations (formatting, board moves, theme application) are
//! infallible. These errors only surface when parsing user or config input
//! into protocol types.

use thiserror::Error;

/// Errors that can occur when parsing protocol values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The theme key is not part of the catalog.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// The column identifier does not name one of the three board columns.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// The view name is neither `chat` nor `board`.
    #[error("unknown view: {0}")]
    UnknownView(String),

    /// The input is not a `#RRGGBB` hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidHexColor(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
