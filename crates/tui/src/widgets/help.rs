//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available keybindings
//! when the user presses `F1` (or `?` outside text input).

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::palette::UiColors;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 24;

/// Keybindings by section.
const SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Global",
        &[
            ("F1", "Toggle help"),
            ("F2", "Switch chat / board"),
            ("F3", "Choose theme"),
            ("F4", "Customize colors"),
            ("Ctrl+S", "Save theme"),
            ("Ctrl+C", "Quit"),
        ],
    ),
    (
        "Chat",
        &[
            ("Enter", "Send message"),
            ("Alt+Enter", "New line"),
            ("Ctrl+B", "Bold selection"),
            ("Ctrl+K", "Code block"),
            ("Tab", "Accept suggestion"),
            ("Shift+←→", "Select text"),
        ],
    ),
    (
        "Board",
        &[
            ("←→↑↓", "Move selection"),
            ("Space", "Grab / drop task"),
            ("Esc", "Cancel drag"),
            ("a", "Add task"),
            ("Mouse", "Drag a card"),
        ],
    ),
];

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, clearing the area
/// behind it first.
///
/// # Arguments
///
/// * `colors` - The active theme colors
/// * `area` - The full terminal area (the overlay will be centered within it)
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use huddle_tui::palette::UiColors;
/// use huddle_tui::widgets::render_help_overlay;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(&UiColors::default(), area, &mut buf);
/// ```
pub fn render_help_overlay(colors: &UiColors, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            colors.accent().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(" Press any key to close ", colors.hint()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.accent())
        .style(colors.base());

    Paragraph::new(build_help_lines(colors))
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines(colors: &UiColors) -> Vec<Line<'static>> {
    let key_style = colors.accent();
    let text_style = colors.base();

    let mut lines = Vec::new();
    for (i, (title, bindings)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(format!("  {title}"), colors.heading())));
        lines.extend(bindings.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:<11}"), key_style),
                Span::styled(*action, text_style),
            ])
        }));
    }
    lines
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
