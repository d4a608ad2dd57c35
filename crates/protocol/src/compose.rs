//! Text composition: the input buffer behind the chat composer and the board
//! add-task field, plus the suggestion filter both use.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Minimum input length (in characters, exclusive) before suggestions show.
pub const SUGGESTION_THRESHOLD: usize = 2;

/// Returns the candidates that contain `input`, ignoring case.
///
/// Nothing is suggested until the input is longer than
/// [`SUGGESTION_THRESHOLD`] characters.
///
/// # Examples
///
/// ```
/// use huddle_protocol::compose::filter_suggestions;
///
/// let candidates = ["Great work everyone!", "I'm working on it now"];
/// assert_eq!(filter_suggestions("WORK", &candidates), candidates);
/// assert!(filter_suggestions("wo", &candidates).is_empty());
/// ```
#[must_use]
pub fn filter_suggestions<'a>(input: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    if input.chars().count() <= SUGGESTION_THRESHOLD {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .collect()
}

/// Inline markup the composer can wrap around a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wrap {
    /// `*…*`
    Bold,
    /// A fenced block: three backticks and a newline on each side.
    CodeBlock,
}

impl Wrap {
    /// Returns the opening and closing delimiters.
    #[must_use]
    pub const fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Bold => ("*", "*"),
            Self::CodeBlock => ("```\n", "\n```"),
        }
    }
}

/// Wraps `selection` of `text` in the delimiters of `wrap`.
///
/// An empty selection inserts an empty pair at that position. Returns the
/// new text and the byte offset just past the inserted content, before the
/// closing delimiter.
///
/// # Panics
///
/// Panics if the selection is out of bounds or not on character boundaries.
///
/// # Examples
///
/// ```
/// use huddle_protocol::compose::{wrap_selection, Wrap};
///
/// let (text, _) = wrap_selection("say hi now", 4..6, Wrap::Bold);
/// assert_eq!(text, "say *hi* now");
///
/// let (text, _) = wrap_selection("x", 0..1, Wrap::CodeBlock);
/// assert_eq!(text, "```\nx\n```");
/// ```
#[must_use]
pub fn wrap_selection(text: &str, selection: Range<usize>, wrap: Wrap) -> (String, usize) {
    let (open, close) = wrap.delimiters();
    let mut out = String::with_capacity(text.len() + open.len() + close.len());
    out.push_str(&text[..selection.start]);
    out.push_str(open);
    out.push_str(&text[selection.clone()]);
    let inner_end = out.len();
    out.push_str(close);
    out.push_str(&text[selection.end..]);
    (out, inner_end)
}

/// An editable text buffer with a cursor and an optional selection anchor.
///
/// Positions are byte offsets that always sit on character boundaries.
///
/// # Examples
///
/// ```
/// use huddle_protocol::compose::{Composer, Wrap};
///
/// let mut composer = Composer::default();
/// for ch in "hello".chars() {
///     composer.insert_char(ch);
/// }
/// composer.select_all();
/// composer.wrap(Wrap::Bold);
/// assert_eq!(composer.text(), "*hello*");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    text: String,
    cursor: usize,
    anchor: Option<usize>,
}

impl Composer {
    /// Creates a composer holding `text` with the cursor at the end.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            anchor: None,
        }
    }

    /// Returns the current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the selected byte range, or an empty range at the cursor.
    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        match self.anchor {
            Some(anchor) if anchor < self.cursor => anchor..self.cursor,
            Some(anchor) => self.cursor..anchor,
            None => self.cursor..self.cursor,
        }
    }

    /// Returns `true` if a non-empty range is selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selection().is_empty()
    }

    /// Replaces the whole buffer, placing the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        *self = Self::with_text(text);
    }

    /// Empties the buffer and returns what it held.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        self.anchor = None;
        std::mem::take(&mut self.text)
    }

    /// Selects the whole buffer.
    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.cursor = self.text.len();
    }

    /// Inserts a character, replacing the selection if there is one.
    pub fn insert_char(&mut self, ch: char) {
        self.delete_selection();
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Inserts a line break at the cursor.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Deletes the selection, or the character before the cursor.
    pub fn backspace(&mut self) {
        if self.delete_selection() {
            return;
        }
        if let Some(prev) = self.prev_boundary(self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Deletes the selection, or the character after the cursor.
    pub fn delete(&mut self) {
        if self.delete_selection() {
            return;
        }
        if let Some(next) = self.next_boundary(self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    /// Moves the cursor one character left, optionally extending the selection.
    pub fn move_left(&mut self, extend: bool) {
        self.update_anchor(extend);
        if let Some(prev) = self.prev_boundary(self.cursor) {
            self.cursor = prev;
        }
    }

    /// Moves the cursor one character right, optionally extending the selection.
    pub fn move_right(&mut self, extend: bool) {
        self.update_anchor(extend);
        if let Some(next) = self.next_boundary(self.cursor) {
            self.cursor = next;
        }
    }

    /// Moves the cursor to the start of the buffer.
    pub fn move_home(&mut self, extend: bool) {
        self.update_anchor(extend);
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the buffer.
    pub fn move_end(&mut self, extend: bool) {
        self.update_anchor(extend);
        self.cursor = self.text.len();
    }

    /// Wraps the selection (or an empty span at the cursor) in markup.
    ///
    /// The cursor ends up after the wrapped content and the selection is
    /// cleared.
    pub fn wrap(&mut self, wrap: Wrap) {
        let (text, cursor) = wrap_selection(&self.text, self.selection(), wrap);
        self.text = text;
        self.cursor = cursor;
        self.anchor = None;
    }

    /// Returns the cursor as a `(line, column)` pair, counting characters.
    #[must_use]
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        (line, before[line_start..].chars().count())
    }

    fn update_anchor(&mut self, extend: bool) {
        if extend {
            self.anchor.get_or_insert(self.cursor);
        } else {
            self.anchor = None;
        }
    }

    fn delete_selection(&mut self) -> bool {
        let selection = self.selection();
        self.anchor = None;
        if selection.is_empty() {
            return false;
        }
        self.text.replace_range(selection.clone(), "");
        self.cursor = selection.start;
        true
    }

    fn prev_boundary(&self, pos: usize) -> Option<usize> {
        self.text[..pos].char_indices().next_back().map(|(idx, _)| idx)
    }

    fn next_boundary(&self, pos: usize) -> Option<usize> {
        self.text[pos..]
            .chars()
            .next()
            .map(|ch| pos + ch.len_utf8())
    }
}
