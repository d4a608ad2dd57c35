//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Which keys mean what depends on the [`InputMode`]:
//! the chat composer owns plain keys, so global shortcuts use function keys
//! and `Ctrl` chords.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use huddle_protocol::{Message, Wrap};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// A text input has focus: the chat composer, the add-task field or a
    /// customizer color.
    #[default]
    Text,
    /// The task board has focus.
    Board,
    /// An overlay list has focus: help, theme menu or customizer roles.
    Menu,
}

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled. Key release and repeat events
/// are ignored.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_to_message(*key, mode),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only the left button is handled: press, drag and release each produce a
/// message carrying the pointer coordinates.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::MousePress { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::MouseDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::MouseRelease { column, row }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound in `mode`.
///
/// # Key Bindings (all modes)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `F1` | Toggle help |
/// | `F2` | Switch between chat and board |
/// | `F3` | Open the theme menu |
/// | `F4` | Open the theme customizer |
/// | `Ctrl+S` | Save the current theme |
#[must_use]
pub fn key_to_message(key: KeyEvent, mode: InputMode) -> Option<Message> {
    if let Some(msg) = global_key_to_message(key) {
        return Some(msg);
    }

    match mode {
        InputMode::Text => key_to_text_message(key),
        InputMode::Board => key_to_board_message(key),
        InputMode::Menu => key_to_menu_message(key),
    }
}

fn global_key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            KeyCode::Char('s') => Some(Message::SaveTheme),
            _ => None,
        };
    }

    match key.code {
        KeyCode::F(1) => Some(Message::ToggleHelp),
        KeyCode::F(2) => Some(Message::SwitchView),
        KeyCode::F(3) => Some(Message::OpenThemeMenu),
        KeyCode::F(4) => Some(Message::OpenCustomizer),
        _ => None,
    }
}

/// Converts a key event to a text-editing message.
///
/// # Key Bindings (Text Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | Any char | Input |
/// | `Enter` | Submit |
/// | `Alt+Enter` or `Shift+Enter` | Insert line break |
/// | `Ctrl+B` | Wrap selection in bold |
/// | `Ctrl+K` | Wrap selection in a code block |
/// | `Tab` | Accept the first suggestion |
/// | `←` `→` `Home` `End` | Move cursor (`Shift` extends the selection) |
/// | `Backspace` / `Delete` | Delete |
/// | `Esc` | Escape |
#[must_use]
fn key_to_text_message(key: KeyEvent) -> Option<Message> {
    let extend = key.modifiers.contains(KeyModifiers::SHIFT);

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('b') => Some(Message::Format { wrap: Wrap::Bold }),
            KeyCode::Char('k') => Some(Message::Format {
                wrap: Wrap::CodeBlock,
            }),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
        {
            Some(Message::Newline)
        }
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab => Some(Message::AcceptSuggestion),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Delete => Some(Message::Delete),
        KeyCode::Left => Some(Message::CursorLeft { extend }),
        KeyCode::Right => Some(Message::CursorRight { extend }),
        KeyCode::Home => Some(Message::CursorHome { extend }),
        KeyCode::End => Some(Message::CursorEnd { extend }),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Message::Input { ch })
        }
        _ => None,
    }
}

/// Converts a key event to a board message.
///
/// # Key Bindings (Board Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `←` `→` `↑` `↓` | Navigate, or move the drop target while dragging |
/// | `Space` | Grab the selected task, or drop the grabbed one |
/// | `Enter` | Drop the grabbed task |
/// | `a` | Add a task to the selected column |
/// | `?` | Toggle help |
/// | `Esc` | Cancel the drag or clear the selection |
#[must_use]
fn key_to_board_message(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Char(' ') => Some(Message::Grab),
        KeyCode::Enter => Some(Message::Select),
        KeyCode::Char('a') => Some(Message::OpenAddTask),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to an overlay message.
///
/// Characters are forwarded as input so that any key can dismiss help.
#[must_use]
fn key_to_menu_message(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Char(ch) => Some(Message::Input { ch }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let key = make_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [InputMode::Text, InputMode::Board, InputMode::Menu] {
            assert_eq!(key_to_message(key, mode), Some(Message::Quit), "{mode:?}");
        }
    }

    #[test]
    fn function_keys_are_global() {
        for mode in [InputMode::Text, InputMode::Board, InputMode::Menu] {
            assert_eq!(
                key_to_message(make_key(KeyCode::F(1)), mode),
                Some(Message::ToggleHelp)
            );
            assert_eq!(
                key_to_message(make_key(KeyCode::F(2)), mode),
                Some(Message::SwitchView)
            );
            assert_eq!(
                key_to_message(make_key(KeyCode::F(3)), mode),
                Some(Message::OpenThemeMenu)
            );
            assert_eq!(
                key_to_message(make_key(KeyCode::F(4)), mode),
                Some(Message::OpenCustomizer)
            );
        }
        assert_eq!(key_to_message(make_key(KeyCode::F(5)), InputMode::Board), None);
    }

    #[test]
    fn ctrl_s_saves_theme() {
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Char('s'), KeyModifiers::CONTROL),
                InputMode::Text
            ),
            Some(Message::SaveTheme)
        );
    }

    #[test]
    fn text_mode_types_plain_keys() {
        // 'q', 'a' and '?' are text, not commands, while typing
        for ch in ['q', 'a', '?', ' '] {
            assert_eq!(
                key_to_message(make_key(KeyCode::Char(ch)), InputMode::Text),
                Some(Message::Input { ch })
            );
        }
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Char('H'), KeyModifiers::SHIFT),
                InputMode::Text
            ),
            Some(Message::Input { ch: 'H' })
        );
    }

    #[test]
    fn text_mode_enter_variants() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter), InputMode::Text),
            Some(Message::Submit)
        );
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Enter, KeyModifiers::ALT),
                InputMode::Text
            ),
            Some(Message::Newline)
        );
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Enter, KeyModifiers::SHIFT),
                InputMode::Text
            ),
            Some(Message::Newline)
        );
    }

    #[test]
    fn text_mode_formatting_chords() {
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Char('b'), KeyModifiers::CONTROL),
                InputMode::Text
            ),
            Some(Message::Format { wrap: Wrap::Bold })
        );
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Char('k'), KeyModifiers::CONTROL),
                InputMode::Text
            ),
            Some(Message::Format {
                wrap: Wrap::CodeBlock
            })
        );
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Char('x'), KeyModifiers::CONTROL),
                InputMode::Text
            ),
            None
        );
    }

    #[test]
    fn text_mode_cursor_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Left), InputMode::Text),
            Some(Message::CursorLeft { extend: false })
        );
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::End, KeyModifiers::SHIFT),
                InputMode::Text
            ),
            Some(Message::CursorEnd { extend: true })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Tab), InputMode::Text),
            Some(Message::AcceptSuggestion)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Backspace), InputMode::Text),
            Some(Message::Backspace)
        );
    }

    #[test]
    fn board_mode_keys() {
        let board = |code| key_to_message(make_key(code), InputMode::Board);
        assert_eq!(board(KeyCode::Left), Some(Message::NavigateLeft));
        assert_eq!(board(KeyCode::Down), Some(Message::NavigateDown));
        assert_eq!(board(KeyCode::Char(' ')), Some(Message::Grab));
        assert_eq!(board(KeyCode::Enter), Some(Message::Select));
        assert_eq!(board(KeyCode::Char('a')), Some(Message::OpenAddTask));
        assert_eq!(board(KeyCode::Char('?')), Some(Message::ToggleHelp));
        assert_eq!(board(KeyCode::Esc), Some(Message::Escape));
    }

    #[test]
    fn vim_keys_not_mapped_on_board() {
        for ch in ['h', 'j', 'k', 'l', 'q'] {
            assert_eq!(
                key_to_message(make_key(KeyCode::Char(ch)), InputMode::Board),
                None
            );
        }
    }

    #[test]
    fn menu_mode_keys() {
        let menu = |code| key_to_message(make_key(code), InputMode::Menu);
        assert_eq!(menu(KeyCode::Up), Some(Message::NavigateUp));
        assert_eq!(menu(KeyCode::Enter), Some(Message::Select));
        assert_eq!(menu(KeyCode::Char(' ')), Some(Message::Select));
        assert_eq!(menu(KeyCode::Esc), Some(Message::Escape));
        assert_eq!(menu(KeyCode::Char('x')), Some(Message::Input { ch: 'x' }));
    }

    #[test]
    fn mouse_left_button_lifecycle() {
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Down(MouseButton::Left), 10, 5)),
            Some(Message::MousePress { column: 10, row: 5 })
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Drag(MouseButton::Left), 11, 6)),
            Some(Message::MouseDrag { column: 11, row: 6 })
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Up(MouseButton::Left), 12, 7)),
            Some(Message::MouseRelease { column: 12, row: 7 })
        );
    }

    #[test]
    fn mouse_other_buttons_ignored() {
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Down(MouseButton::Right), 10, 5)),
            None
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Moved, 10, 5)),
            None
        );
    }

    #[test]
    fn event_to_message_ignores_key_release() {
        let mut key = make_key(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(event_to_message(&Event::Key(key), InputMode::Board), None);

        let press = Event::Key(make_key(KeyCode::Enter));
        assert_eq!(
            event_to_message(&press, InputMode::Board),
            Some(Message::Select)
        );
    }

    #[test]
    fn event_to_message_ignores_resize_events() {
        assert_eq!(
            event_to_message(&Event::Resize(80, 24), InputMode::Text),
            None
        );
    }
}
