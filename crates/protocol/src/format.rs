//! Chat message formatting.
//!
//! A raw message is turned into display markup by an ordered pipeline of
//! regex passes. Each pass runs over the output of the previous one, so markup
//! inserted early is visible to later passes:
//!
//! 1. `code-block`: triple-backtick spans (non-greedy, across lines) become
//!    `<pre>…</pre>`.
//! 2. `bold`: single-asterisk spans (non-greedy, one line) become
//!    `<strong>…</strong>`.
//! 3. `line-break`: every newline becomes `<br>`.
//!
//! Asterisks inside a code block are therefore still turned into bold, and
//! newlines inside a code block still become `<br>`. That interaction is kept
//! as-is; unterminated delimiters stay literal.

use std::sync::LazyLock;

use regex::Regex;

/// Opening tag of a code block.
pub const PRE_OPEN: &str = "<pre>";
/// Closing tag of a code block.
pub const PRE_CLOSE: &str = "</pre>";
/// Opening tag of a bold span.
pub const STRONG_OPEN: &str = "<strong>";
/// Closing tag of a bold span.
pub const STRONG_CLOSE: &str = "</strong>";
/// Line break marker.
pub const LINE_BREAK: &str = "<br>";

static CODE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("code block pattern is valid"));

// Any line terminator ends a bold span, not just `\n`
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^\n\r\x{2028}\x{2029}]*?)\*").expect("bold pattern is valid")
});

static NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n").expect("newline pattern is valid"));

/// One step of the formatting pipeline.
#[derive(Debug)]
pub struct Pass {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    replacement: &'static str,
}

impl Pass {
    /// Short name of the pass.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The regular expression this pass matches.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        self.pattern
    }

    /// Runs the pass over `input`.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement)
            .into_owned()
    }
}

static PASSES: [Pass; 3] = [
    Pass {
        name: "code-block",
        pattern: &CODE_BLOCK_RE,
        replacement: "<pre>${1}</pre>",
    },
    Pass {
        name: "bold",
        pattern: &BOLD_RE,
        replacement: "<strong>${1}</strong>",
    },
    Pass {
        name: "line-break",
        pattern: &NEWLINE_RE,
        replacement: "<br>",
    },
];

/// Returns the formatting passes in the order they run.
///
/// # Examples
///
/// ```
/// use huddle_protocol::format::passes;
///
/// let names: Vec<_> = passes().iter().map(|p| p.name()).collect();
/// assert_eq!(names, ["code-block", "bold", "line-break"]);
/// ```
#[must_use]
pub fn passes() -> &'static [Pass] {
    &PASSES
}

/// Converts a raw chat message into display markup.
///
/// # Examples
///
/// ```
/// use huddle_protocol::format_message;
///
/// assert_eq!(format_message("*hello*"), "<strong>hello</strong>");
/// assert_eq!(format_message("line1\nline2"), "line1<br>line2");
/// assert_eq!(format_message("```let x = 1;```"), "<pre>let x = 1;</pre>");
/// ```
#[must_use]
pub fn format_message(raw: &str) -> String {
    passes()
        .iter()
        .fold(raw.to_string(), |text, pass| pass.apply(&text))
}
