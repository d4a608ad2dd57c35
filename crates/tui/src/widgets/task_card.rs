//! Task card rendering widget.
//!
//! A card is a bordered single line of task text. The selected card is drawn
//! in the theme's primary color; the card being dragged gets a thick border.

use huddle_protocol::Task;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::palette::UiColors;

/// How a card is highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardHighlight {
    /// Not highlighted.
    #[default]
    None,
    /// The keyboard selection.
    Selected,
    /// The task being dragged, drawn at its drop target.
    Grabbed,
}

/// Renders a task card to the buffer.
///
/// # Layout
///
/// ```text
/// ╭────────────────╮
/// │ Task content...│
/// ╰────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use huddle_protocol::Task;
/// use huddle_tui::palette::UiColors;
/// use huddle_tui::widgets::{render_task_card, CardHighlight};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let task = Task::new("Fix responsive layout");
/// let area = Rect::new(0, 0, 24, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, CardHighlight::Selected, &UiColors::default(), area, &mut buf);
/// ```
pub fn render_task_card(
    task: &Task,
    highlight: CardHighlight,
    colors: &UiColors,
    area: Rect,
    buf: &mut Buffer,
) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_type, border_style, text_style) = match highlight {
        CardHighlight::None => (
            BorderType::Rounded,
            Style::default().fg(colors.border),
            colors.base(),
        ),
        CardHighlight::Selected => (
            BorderType::Rounded,
            colors.accent(),
            colors.base().add_modifier(Modifier::BOLD),
        ),
        CardHighlight::Grabbed => (
            BorderType::Thick,
            colors.accent(),
            colors.accent().add_modifier(Modifier::BOLD),
        ),
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let content = truncate_string(&task.content, inner_width);

    Paragraph::new(Line::from(Span::styled(content, text_style)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        )
        .render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
