//! Status bar rendering widget.
//!
//! This module provides functions for rendering the footer status bar
//! with keybinding hints for the current input mode, and an optional
//! feedback message on the right.

use huddle_protocol::View;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::event::InputMode;
use crate::palette::UiColors;
use crate::state::AppState;

/// A key and what it does.
pub type KeyHint = (&'static str, &'static str);

const CHAT_HINTS: &[KeyHint] = &[
    ("Enter", "Send"),
    ("Alt+Enter", "Newline"),
    ("Ctrl+B", "Bold"),
    ("Ctrl+K", "Code"),
    ("F2", "Board"),
    ("F1", "Help"),
];

const BOARD_HINTS: &[KeyHint] = &[
    ("←→↑↓", "Navigate"),
    ("Space", "Grab"),
    ("a", "Add task"),
    ("F2", "Chat"),
    ("F1", "Help"),
];

const DRAG_HINTS: &[KeyHint] = &[
    ("←→↑↓", "Move"),
    ("Space", "Drop"),
    ("Esc", "Cancel"),
];

const ADD_TASK_HINTS: &[KeyHint] = &[("Enter", "Add"), ("Tab", "Suggestion"), ("Esc", "Cancel")];

const MENU_HINTS: &[KeyHint] = &[("↑↓", "Select"), ("Enter", "Apply"), ("Esc", "Close")];

/// Returns the hints for what the keyboard currently does.
///
/// Any open overlay shows the menu hints.
///
/// # Examples
///
/// ```
/// use huddle_protocol::dummy::{dummy_board, dummy_chat};
/// use huddle_tui::AppState;
/// use huddle_tui::widgets::status_bar::key_hints;
///
/// let mut state = AppState::new(dummy_chat(), dummy_board());
/// assert!(key_hints(&state).contains(&("Enter", "Send")));
///
/// state.open_theme_menu();
/// assert!(key_hints(&state).contains(&("Esc", "Close")));
/// ```
#[must_use]
pub fn key_hints(state: &AppState) -> &'static [KeyHint] {
    if !state.overlay.is_none() {
        return MENU_HINTS;
    }
    match (state.input_mode(), state.view) {
        (InputMode::Board, _) if state.drag.is_some() => DRAG_HINTS,
        (InputMode::Board, _) => BOARD_HINTS,
        (_, View::Chat) => CHAT_HINTS,
        (_, View::Board) => ADD_TASK_HINTS,
    }
}

/// Renders the status bar with keybinding hints.
///
/// # Layout
///
/// ```text
///  Enter Send  Alt+Enter Newline  Ctrl+B Bold            Theme saved
/// ```
///
/// # Examples
///
/// ```
/// use huddle_tui::palette::UiColors;
/// use huddle_tui::widgets::render_status_bar;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(&[("F1", "Help")], Some("Theme saved"), &UiColors::default(), area, &mut buf);
/// ```
pub fn render_status_bar(
    hints: &[KeyHint],
    message: Option<&str>,
    colors: &UiColors,
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = colors.accent().add_modifier(Modifier::BOLD);
    let text_style = colors.base();

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}  "), text_style));
    }

    let message = message.unwrap_or_default();
    let message_width = u16::try_from(message.chars().count() + 1).unwrap_or(u16::MAX);
    let [hints_area, message_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(message_width)]).areas(area);

    Paragraph::new(Line::from(spans))
        .style(colors.base())
        .render(hints_area, buf);
    Paragraph::new(Line::from(Span::styled(message, colors.heading())))
        .style(colors.base())
        .render(message_area, buf);
}
