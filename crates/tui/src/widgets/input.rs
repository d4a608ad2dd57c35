//! Text input rendering.
//!
//! The chat composer, the add-task field and the customizer editor all draw a
//! [`Composer`] the same way: selected text and the cursor cell are shown in
//! reverse video, so no terminal cursor positioning is needed.

use huddle_protocol::Composer;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Widget},
};

use crate::palette::UiColors;

/// Maximum number of suggestions shown at once.
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Default)]
struct LinesBuilder {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    run: String,
    run_style: Style,
}

impl LinesBuilder {
    fn push(&mut self, ch: char, style: Style) {
        if style != self.run_style {
            self.flush_run();
            self.run_style = style;
        }
        self.run.push(ch);
    }

    fn flush_run(&mut self) {
        if !self.run.is_empty() {
            let text = std::mem::take(&mut self.run);
            self.spans.push(Span::styled(text, self.run_style));
        }
    }

    fn end_line(&mut self) {
        self.flush_run();
        self.lines.push(Line::from(std::mem::take(&mut self.spans)));
    }
}

/// Builds the lines of a text input.
///
/// With `focused` set, the cursor is drawn as a reversed cell (a reversed
/// space at the end of a line) and the selection is reversed.
///
/// # Examples
///
/// ```
/// use huddle_protocol::Composer;
/// use huddle_tui::widgets::input::input_lines;
/// use ratatui::style::Style;
///
/// let composer = Composer::with_text("one\ntwo");
/// let lines = input_lines(&composer, Style::default(), true);
/// assert_eq!(lines.len(), 2);
/// ```
#[must_use]
pub fn input_lines(composer: &Composer, style: Style, focused: bool) -> Vec<Line<'static>> {
    let text = composer.text();
    let selection = composer.selection();
    let cursor = composer.cursor();
    let reversed = style.add_modifier(Modifier::REVERSED);
    let show_cursor = focused && selection.is_empty();

    let mut builder = LinesBuilder {
        run_style: style,
        ..LinesBuilder::default()
    };

    for (idx, ch) in text.char_indices() {
        let at_cursor = show_cursor && idx == cursor;
        if ch == '\n' {
            if at_cursor {
                builder.push(' ', reversed);
            }
            builder.end_line();
            continue;
        }
        let selected = focused && selection.contains(&idx);
        builder.push(ch, if selected || at_cursor { reversed } else { style });
    }
    if show_cursor && cursor == text.len() {
        builder.push(' ', reversed);
    }
    builder.end_line();
    builder.lines
}

/// Renders a bordered text input.
///
/// The content scrolls so the cursor line stays visible. An empty, unfocused
/// input shows `placeholder`.
pub fn render_input(
    composer: &Composer,
    title: &str,
    placeholder: &str,
    focused: bool,
    colors: &UiColors,
    area: Rect,
    buf: &mut Buffer,
) {
    let border_style = if focused {
        colors.accent()
    } else {
        Style::default().fg(colors.border)
    };
    let block = Block::default()
        .title(Span::styled(format!(" {title} "), border_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(colors.base());

    let inner = block.inner(area);
    block.render(area, buf);

    let lines = if composer.is_empty() && !focused {
        vec![Line::from(Span::styled(placeholder.to_string(), colors.hint()))]
    } else {
        input_lines(composer, colors.base(), focused)
    };

    let (cursor_line, _) = composer.cursor_line_col();
    let scroll = cursor_line.saturating_sub(usize::from(inner.height).saturating_sub(1));
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    Paragraph::new(lines)
        .scroll((scroll, 0))
        .render(inner, buf);
}

/// Renders a suggestion list just above `anchor`, within `bounds`.
///
/// The first suggestion is the one `Tab` accepts and is highlighted.
pub fn render_suggestions(
    suggestions: &[&str],
    colors: &UiColors,
    anchor: Rect,
    bounds: Rect,
    buf: &mut Buffer,
) {
    if suggestions.is_empty() {
        return;
    }

    let shown = suggestions.len().min(MAX_SUGGESTIONS);
    let height = u16::try_from(shown).unwrap_or(0) + 2;
    let top = anchor.y.saturating_sub(height).max(bounds.y);
    let height = height.min(anchor.y.saturating_sub(top));
    if height < 3 {
        return;
    }
    let area = Rect::new(anchor.x, top, anchor.width, height);

    let items: Vec<ListItem> = suggestions
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, suggestion)| {
            let style = if i == 0 {
                colors.accent().add_modifier(Modifier::BOLD)
            } else {
                colors.base()
            };
            ListItem::new(Line::from(Span::styled(format!(" {suggestion}"), style)))
        })
        .collect();

    Clear.render(area, buf);
    List::new(items)
        .block(
            Block::default()
                .title(Span::styled(" Suggestions (Tab) ", colors.hint()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors.border))
                .style(colors.base()),
        )
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn cursor_at_end_adds_reversed_cell() {
        let composer = Composer::with_text("hi");
        let lines = input_lines(&composer, Style::default(), true);

        assert_eq!(line_text(&lines[0]), "hi ");
        let last = lines[0].spans.last().unwrap();
        assert_eq!(last.content, " ");
        assert!(last.style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn unfocused_input_has_no_cursor() {
        let composer = Composer::with_text("hi");
        let lines = input_lines(&composer, Style::default(), false);
        assert_eq!(line_text(&lines[0]), "hi");
        assert_eq!(lines[0].spans.len(), 1);
    }

    #[test]
    fn cursor_in_middle_reverses_char() {
        let mut composer = Composer::with_text("abc");
        composer.move_left(false);
        let lines = input_lines(&composer, Style::default(), true);

        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "ab");
        assert_eq!(spans[1].content, "c");
        assert!(spans[1].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn selection_is_reversed() {
        let mut composer = Composer::with_text("hello");
        composer.move_home(false);
        composer.move_right(true);
        composer.move_right(true);
        let lines = input_lines(&composer, Style::default(), true);

        let spans = &lines[0].spans;
        assert_eq!(spans[0].content, "he");
        assert!(spans[0].style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(spans[1].content, "llo");
    }

    #[test]
    fn newlines_split_lines() {
        let composer = Composer::with_text("a\nb\n");
        let lines = input_lines(&composer, Style::default(), true);
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[2]), " ");
    }

    #[test]
    fn render_input_shows_placeholder_when_unfocused() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        render_input(
            &Composer::default(),
            "Add task",
            "Type here...",
            false,
            &UiColors::default(),
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Add task"));
        assert!(content.contains("Type here..."));
    }

    #[test]
    fn render_input_scrolls_to_cursor() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        render_input(
            &Composer::with_text("first\nsecond\nthird"),
            "Message",
            "",
            true,
            &UiColors::default(),
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("third"));
        assert!(!content.contains("first"));
    }

    #[test]
    fn suggestions_render_above_anchor() {
        let bounds = Rect::new(0, 0, 40, 12);
        let anchor = Rect::new(0, 9, 40, 3);
        let mut buf = Buffer::empty(bounds);

        render_suggestions(
            &["Great work everyone!", "I'm working on it now"],
            &UiColors::default(),
            anchor,
            bounds,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[5].contains("Suggestions"));
        assert!(lines[6].contains("Great work everyone!"));
        assert!(lines[7].contains("I'm working on it now"));
    }

    #[test]
    fn suggestions_skip_when_no_room() {
        let bounds = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(bounds);
        render_suggestions(
            &["Great work everyone!"],
            &UiColors::default(),
            Rect::new(0, 1, 40, 2),
            bounds,
            &mut buf,
        );
        assert!(!buffer_to_string(&buf).contains("Great"));
    }
}
