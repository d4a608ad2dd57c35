//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

use crate::compose::Wrap;

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use huddle_protocol::Message;
///
/// let msg = Message::SwitchView;
/// assert!(!msg.is_terminating());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Switch between the chat and board views.
    SwitchView,
    /// Open the theme selector.
    OpenThemeMenu,
    /// Open the theme customizer.
    OpenCustomizer,
    /// Save the current theme to the user configuration.
    SaveTheme,
    /// Escape: close overlay, cancel a drag or clear selection (contextual).
    Escape,

    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up.
    NavigateUp,
    /// Move selection down.
    NavigateDown,
    /// Confirm the highlighted item, or drop a grabbed task.
    Select,
    /// Grab the selected task, or drop the grabbed one.
    Grab,
    /// Open the add-task input on the selected column.
    OpenAddTask,

    /// Type a character into the focused input.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the character before the cursor (or the selection).
    Backspace,
    /// Delete the character after the cursor (or the selection).
    Delete,
    /// Insert a line break.
    Newline,
    /// Submit the focused input.
    Submit,
    /// Move the cursor left.
    CursorLeft {
        /// Extend the selection instead of collapsing it.
        extend: bool,
    },
    /// Move the cursor right.
    CursorRight {
        /// Extend the selection instead of collapsing it.
        extend: bool,
    },
    /// Move the cursor to the start of the input.
    CursorHome {
        /// Extend the selection instead of collapsing it.
        extend: bool,
    },
    /// Move the cursor to the end of the input.
    CursorEnd {
        /// Extend the selection instead of collapsing it.
        extend: bool,
    },
    /// Wrap the selection in markup.
    Format {
        /// Which markup to insert.
        wrap: Wrap,
    },
    /// Replace the input with the first suggestion.
    AcceptSuggestion,

    /// Left mouse button pressed at coordinates (column, row).
    MousePress {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },
    /// Mouse moved with the left button held.
    MouseDrag {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },
    /// Left mouse button released.
    MouseRelease {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message edits or moves within a text input.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::Message;
    ///
    /// assert!(Message::Input { ch: 'a' }.is_text_edit());
    /// assert!(!Message::SwitchView.is_text_edit());
    /// ```
    #[must_use]
    pub fn is_text_edit(&self) -> bool {
        matches!(
            self,
            Self::Input { .. }
                | Self::Backspace
                | Self::Delete
                | Self::Newline
                | Self::CursorLeft { .. }
                | Self::CursorRight { .. }
                | Self::CursorHome { .. }
                | Self::CursorEnd { .. }
                | Self::Format { .. }
                | Self::AcceptSuggestion
        )
    }

    /// Returns `true` if this is a mouse message.
    #[must_use]
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MousePress { .. } | Self::MouseDrag { .. } | Self::MouseRelease { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::Select.is_navigation());
        assert!(!Message::CursorLeft { extend: false }.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
    }

    #[test]
    fn message_text_edit_detection() {
        assert!(Message::Newline.is_text_edit());
        assert!(Message::Format { wrap: Wrap::Bold }.is_text_edit());
        assert!(Message::CursorEnd { extend: true }.is_text_edit());
        assert!(!Message::Submit.is_text_edit());
        assert!(!Message::Grab.is_text_edit());
    }

    #[test]
    fn message_mouse_detection() {
        assert!(Message::MousePress { column: 1, row: 2 }.is_mouse());
        assert!(Message::MouseRelease { column: 1, row: 2 }.is_mouse());
        assert!(!Message::Select.is_mouse());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::SwitchView).expect("serialize");
        assert_eq!(json, r#""switch_view""#);

        let json =
            serde_json::to_string(&Message::Format { wrap: Wrap::CodeBlock }).expect("serialize");
        assert_eq!(json, r#"{"format":{"wrap":"code_block"}}"#);
    }
}
