//! The two top-level views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Which view is mounted.
///
/// # Examples
///
/// ```
/// use huddle_protocol::View;
///
/// assert_eq!(View::Chat.toggle(), View::Board);
/// assert_eq!(View::Board.title(), "Task Board");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Team chat with channel sidebar and composer.
    #[default]
    Chat,
    /// Kanban task board.
    Board,
}

impl View {
    /// Returns the other view.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Chat => Self::Board,
            Self::Board => Self::Chat,
        }
    }

    /// Returns the header title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Chat => "Team Chat",
            Self::Board => "Task Board",
        }
    }

    /// Returns the identifier used in configuration.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Board => "board",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for View {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" => Ok(Self::Chat),
            "board" | "kanban" => Ok(Self::Board),
            _ => Err(ProtocolError::UnknownView(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for view in [View::Chat, View::Board] {
            assert_eq!(view.toggle().toggle(), view);
        }
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("Chat".parse::<View>(), Ok(View::Chat));
        assert_eq!("kanban".parse::<View>(), Ok(View::Board));
        assert_eq!(
            "inbox".parse::<View>(),
            Err(ProtocolError::UnknownView("inbox".to_string()))
        );
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&View::Board).expect("serialize");
        assert_eq!(json, r#""board""#);
    }
}
