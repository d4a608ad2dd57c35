//! Theme customizer panel widget.
//!
//! Lists the customizable roles with a swatch and the hex value. The role
//! being edited shows the inline editor in place of its value, and a
//! rejected value is reported under the list.

use huddle_protocol::CustomRole;
use huddle_protocol::color::parse_hex;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::help::centered_rect;
use super::input::input_lines;
use crate::customizer_state::CustomizerState;
use crate::palette::{UiColors, to_color};

/// The width of the customizer panel.
const CUSTOMIZER_WIDTH: u16 = 44;

/// The height of the customizer panel.
const CUSTOMIZER_HEIGHT: u16 = 10;

/// Width of the role name column.
const LABEL_WIDTH: usize = 12;

/// Renders the customizer panel centered in `area`.
///
/// # Layout
///
/// ```text
/// ╭ Customize Theme ─────────────────────────╮
/// │ Primary      ██ #0ea5e9                  │
/// │ Background   ██ #ffffff                  │
/// │ Foreground   ██ #020817                  │
/// │                                          │
/// │ (error, if any)                          │
/// │                                          │
/// │ Enter edit · Esc close                   │
/// ╰──────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use huddle_protocol::ThemeCustomizer;
/// use huddle_tui::customizer_state::CustomizerState;
/// use huddle_tui::palette::UiColors;
/// use huddle_tui::widgets::render_customizer;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let state = CustomizerState::new(ThemeCustomizer::default());
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_customizer(&state, &UiColors::default(), area, &mut buf);
/// ```
pub fn render_customizer(state: &CustomizerState, colors: &UiColors, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(CUSTOMIZER_WIDTH, CUSTOMIZER_HEIGHT, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Customize Theme ",
            colors.accent().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.accent())
        .style(colors.base());

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);

    let [roles_area, _, error_area, _, hint_area] = Layout::vertical([
        Constraint::Length(3), // Roles
        Constraint::Length(1), // Separator
        Constraint::Length(2), // Error
        Constraint::Min(0),
        Constraint::Length(1), // Hints
    ])
    .areas(inner);

    let lines: Vec<Line> = CustomRole::all()
        .into_iter()
        .map(|role| role_line(state, role, colors))
        .collect();
    Paragraph::new(lines).render(roles_area, buf);

    if let Some(error) = state.error() {
        Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )))
        .render(error_area, buf);
    }

    let hint = if state.is_editing() {
        " Enter confirm · Esc cancel"
    } else {
        " Enter edit · Esc close"
    };
    Paragraph::new(Line::from(Span::styled(hint, colors.hint()))).render(hint_area, buf);
}

/// Builds the line for one role.
fn role_line(state: &CustomizerState, role: CustomRole, colors: &UiColors) -> Line<'static> {
    let selected = state.selected_role() == role;
    let value = state.draft().get(role).to_string();

    let label_style = if selected {
        colors.accent().add_modifier(Modifier::BOLD)
    } else {
        colors.base()
    };
    let marker = if selected { "›" } else { " " };
    let swatch = parse_hex(&value).map_or(Color::Reset, to_color);

    let mut spans = vec![
        Span::styled(marker, colors.accent()),
        Span::styled(
            format!("{:<LABEL_WIDTH$}", role.display_name()),
            label_style,
        ),
        Span::styled("██", Style::default().fg(swatch)),
        Span::raw(" "),
    ];

    match state.editor() {
        Some(editor) if selected => {
            spans.extend(
                input_lines(editor, colors.base(), true)
                    .into_iter()
                    .flat_map(|line| line.spans),
            );
        }
        _ => spans.push(Span::styled(value, colors.base())),
    }

    Line::from(spans)
}
