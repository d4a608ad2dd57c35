//! Rendering of formatted chat markup as styled terminal lines.
//!
//! The chat formatter emits a small tag vocabulary: `<pre>`, `<strong>` and
//! `<br>`. This module turns that markup into ratatui [`Line`]s. Tags are
//! tracked with depth counters rather than a tree, so interleaved tags such
//! as `<pre><strong></pre></strong>` (which nested delimiters can produce)
//! still render without losing text. Anything that is not a known tag is
//! literal text.

use huddle_protocol::format::{LINE_BREAK, PRE_CLOSE, PRE_OPEN, STRONG_CLOSE, STRONG_OPEN};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Styles applied to markup spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupStyles {
    /// Plain text.
    pub text: Style,
    /// Text inside `<pre>`.
    pub code: Style,
}

impl Default for MarkupStyles {
    fn default() -> Self {
        Self {
            text: Style::default(),
            code: Style::default().add_modifier(Modifier::DIM),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    PreOpen,
    PreClose,
    StrongOpen,
    StrongClose,
    LineBreak,
}

impl Tag {
    const ALL: [(&'static str, Self); 5] = [
        (PRE_OPEN, Self::PreOpen),
        (PRE_CLOSE, Self::PreClose),
        (STRONG_OPEN, Self::StrongOpen),
        (STRONG_CLOSE, Self::StrongClose),
        (LINE_BREAK, Self::LineBreak),
    ];

    /// Matches a tag at the start of `input`, returning it and its length.
    fn parse(input: &str) -> Option<(Self, usize)> {
        Self::ALL
            .into_iter()
            .find(|(literal, _)| input.starts_with(literal))
            .map(|(literal, tag)| (tag, literal.len()))
    }
}

#[derive(Debug, Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    pending: String,
    pre_depth: usize,
    strong_depth: usize,
}

impl LineBuilder {
    fn style(&self, styles: MarkupStyles) -> Style {
        let style = if self.pre_depth > 0 {
            styles.code
        } else {
            styles.text
        };
        if self.strong_depth > 0 {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    fn flush_span(&mut self, styles: MarkupStyles) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.spans.push(Span::styled(text, self.style(styles)));
        }
    }

    fn flush_line(&mut self, styles: MarkupStyles) {
        self.flush_span(styles);
        self.lines.push(Line::from(std::mem::take(&mut self.spans)));
    }

    fn apply(&mut self, tag: Tag, styles: MarkupStyles) {
        match tag {
            Tag::LineBreak => {
                self.flush_line(styles);
                return;
            }
            _ => self.flush_span(styles),
        }
        match tag {
            Tag::PreOpen => self.pre_depth += 1,
            Tag::PreClose => self.pre_depth = self.pre_depth.saturating_sub(1),
            Tag::StrongOpen => self.strong_depth += 1,
            Tag::StrongClose => self.strong_depth = self.strong_depth.saturating_sub(1),
            Tag::LineBreak => {}
        }
    }
}

/// Converts formatter markup into styled lines.
///
/// Always returns at least one line.
///
/// # Examples
///
/// ```
/// use huddle_tui::markup::{markup_to_lines, MarkupStyles};
///
/// let lines = markup_to_lines("<strong>hi</strong><br>there", MarkupStyles::default());
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].spans[0].content, "hi");
/// ```
#[must_use]
pub fn markup_to_lines(markup: &str, styles: MarkupStyles) -> Vec<Line<'static>> {
    let mut builder = LineBuilder::default();
    let mut rest = markup;

    while let Some(ch) = rest.chars().next() {
        if ch == '<'
            && let Some((tag, len)) = Tag::parse(rest)
        {
            builder.apply(tag, styles);
            rest = &rest[len..];
            continue;
        }
        builder.pending.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    builder.flush_line(styles);
    builder.lines
}

/// Returns the visible text of markup, with line breaks as `\n`.
#[must_use]
pub fn plain_text(markup: &str) -> String {
    markup_to_lines(markup, MarkupStyles::default())
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_protocol::format_message;

    fn styles() -> MarkupStyles {
        MarkupStyles {
            text: Style::default(),
            code: Style::default().add_modifier(Modifier::ITALIC),
        }
    }

    #[test]
    fn plain_text_is_one_span() {
        let lines = markup_to_lines("hello", styles());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[0].spans[0].content, "hello");
    }

    #[test]
    fn empty_markup_is_one_empty_line() {
        let lines = markup_to_lines("", styles());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans.is_empty());
    }

    #[test]
    fn strong_is_bold() {
        let lines = markup_to_lines("a <strong>b</strong> c", styles());
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, "b");
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[2].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn line_breaks_split_lines() {
        let lines = markup_to_lines("one<br>two<br><br>four", styles());
        assert_eq!(lines.len(), 4);
        assert!(lines[2].spans.is_empty());
    }

    #[test]
    fn code_block_uses_code_style() {
        let lines = markup_to_lines("<pre>let x = 1;</pre>", styles());
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn nested_emphasis_inside_code_block() {
        let lines = markup_to_lines(&format_message("```a\n*b*```"), styles());
        assert_eq!(lines.len(), 2);
        let b = &lines[1].spans[0];
        assert_eq!(b.content, "b");
        assert!(b.style.add_modifier.contains(Modifier::BOLD));
        assert!(b.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn interleaved_tags_keep_text() {
        assert_eq!(plain_text("<pre>x<strong>y</pre>z</strong>"), "xyz");
    }

    #[test]
    fn unknown_tags_are_literal() {
        assert_eq!(plain_text("a <b> c < d"), "a <b> c < d");
    }

    #[test]
    fn stray_closing_tags_are_ignored() {
        let lines = markup_to_lines("</strong>x", styles());
        assert_eq!(lines[0].spans[0].content, "x");
        assert!(!lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn unicode_text_survives() {
        assert_eq!(plain_text("🌻 <strong>é</strong>"), "🌻 é");
    }
}
