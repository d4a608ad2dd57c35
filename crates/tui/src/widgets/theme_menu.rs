//! Theme selector overlay.

use huddle_protocol::ThemeKey;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::help::centered_rect;
use crate::palette::{UiColors, swatch_color};

const MENU_WIDTH: u16 = 30;

/// Renders the theme menu centered in `area`.
///
/// Each theme is listed with a swatch of its primary color; the current
/// theme is checked and the highlighted row is drawn in reverse video.
///
/// # Examples
///
/// ```
/// use huddle_protocol::ThemeKey;
/// use huddle_tui::palette::UiColors;
/// use huddle_tui::widgets::render_theme_menu;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_theme_menu(ThemeKey::Jade, 0, &UiColors::default(), area, &mut buf);
/// ```
pub fn render_theme_menu(
    current: ThemeKey,
    highlighted: usize,
    colors: &UiColors,
    area: Rect,
    buf: &mut Buffer,
) {
    let themes = ThemeKey::all();
    let height = u16::try_from(themes.len()).unwrap_or(0) + 4;
    let popup_area = centered_rect(MENU_WIDTH, height, area);
    Clear.render(popup_area, buf);

    let mut lines: Vec<Line> = themes
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let mark = if *key == current { "✓" } else { " " };
            let name_style = if i == highlighted {
                colors.base().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                colors.base()
            };
            Line::from(vec![
                Span::raw(" "),
                Span::styled("●", Style::default().fg(swatch_color(*key))),
                Span::raw(" "),
                Span::styled(format!("{:<14}", key.name()), name_style),
                Span::styled(format!(" {mark}"), colors.accent()),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(" Enter apply · Esc close", colors.hint())));

    Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    " Theme ",
                    colors.accent().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(colors.accent())
                .style(colors.base()),
        )
        .render(popup_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn lists_every_theme_and_checks_current() {
        let area = Rect::new(0, 0, MENU_WIDTH, 9);
        let mut buf = Buffer::empty(area);

        render_theme_menu(ThemeKey::Barbra, 0, &UiColors::default(), area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf), @r"
        ╭ Theme ─────────────────────╮
        │ ● Jade                     │
        │ ● Indigo                   │
        │ ● Barbra         ✓         │
        │ ● Lagoon                   │
        │ ● Sun Flower               │
        │                            │
        │ Enter apply · Esc close    │
        ╰────────────────────────────╯
        ");
    }

    #[test]
    fn swatches_use_theme_primary() {
        let area = Rect::new(0, 0, MENU_WIDTH, 9);
        let mut buf = Buffer::empty(area);

        render_theme_menu(ThemeKey::Jade, 0, &UiColors::default(), area, &mut buf);

        let swatch = buf.cell((2, 1)).expect("cell should exist");
        assert_eq!(swatch.symbol(), "●");
        assert_eq!(swatch.fg, swatch_color(ThemeKey::all()[0]));
    }

    #[test]
    fn highlighted_row_is_reversed() {
        let area = Rect::new(0, 0, MENU_WIDTH, 9);
        let mut buf = Buffer::empty(area);

        render_theme_menu(ThemeKey::Jade, 2, &UiColors::default(), area, &mut buf);

        let cell = buf.cell((4, 3)).expect("cell should exist");
        assert!(cell.modifier.contains(Modifier::REVERSED));
        let cell = buf.cell((4, 2)).expect("cell should exist");
        assert!(!cell.modifier.contains(Modifier::REVERSED));
    }
}
