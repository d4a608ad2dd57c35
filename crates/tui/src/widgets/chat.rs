//! Chat view rendering.
//!
//! The chat view is a channel sidebar next to the message list, with the
//! composer docked below the messages and suggestions floating above it.
//!
//! ```text
//! ╭ Channels ──────╮╭ # general ─────────────────────╮
//! │ # general      ││ S  Sarah Chen  10:30 AM        │
//! │ # development  ││    Good morning everyone!      │
//! │                ││                                │
//! │ Direct Messages│╰────────────────────────────────╯
//! │ (S) Sarah Chen │╭ Message #general ──────────────╮
//! ╰────────────────╯╰────────────────────────────────╯
//! ```

use huddle_protocol::dummy::{CHANNELS, DIRECT_MESSAGES};
use huddle_protocol::{ChatLog, ChatMessage, Composer, format_message};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::input::{render_input, render_suggestions};
use crate::layout::{COMPOSER_HEIGHT, SIDEBAR_WIDTH};
use crate::markup::{MarkupStyles, markup_to_lines};
use crate::palette::UiColors;

/// The channel every message goes to.
const ACTIVE_CHANNEL: &str = "# general";

/// Indent of message bodies under their author line.
const BODY_INDENT: &str = "   ";

/// The chat view as it should be drawn.
#[derive(Debug, Clone, Copy)]
pub struct ChatView<'a> {
    /// The message history.
    pub chat: &'a ChatLog,
    /// The composer.
    pub composer: &'a Composer,
    /// Whether the composer has keyboard focus.
    pub focused: bool,
    /// The local user, whose messages are highlighted.
    pub user_name: &'a str,
    /// Suggestions for the composer text.
    pub suggestions: &'a [&'a str],
}

/// Renders the chat view: sidebar, message list, composer and suggestions.
///
/// # Examples
///
/// ```
/// use huddle_protocol::dummy::dummy_chat;
/// use huddle_protocol::Composer;
/// use huddle_tui::palette::UiColors;
/// use huddle_tui::widgets::{render_chat, ChatView};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let chat = dummy_chat();
/// let composer = Composer::default();
/// let view = ChatView {
///     chat: &chat,
///     composer: &composer,
///     focused: true,
///     user_name: "You",
///     suggestions: &[],
/// };
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
/// render_chat(&view, &UiColors::default(), area, &mut buf);
/// ```
pub fn render_chat(view: &ChatView<'_>, colors: &UiColors, area: Rect, buf: &mut Buffer) {
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(area);
    let [messages, composer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(COMPOSER_HEIGHT)]).areas(main);

    render_sidebar(colors, sidebar, buf);
    render_messages(view.chat, view.user_name, colors, messages, buf);
    render_input(
        view.composer,
        &format!("Message {ACTIVE_CHANNEL}"),
        "Type a message...",
        view.focused,
        colors,
        composer,
        buf,
    );
    if view.focused {
        render_suggestions(view.suggestions, colors, composer, messages, buf);
    }
}

/// Renders the channel and direct message lists.
pub fn render_sidebar(colors: &UiColors, area: Rect, buf: &mut Buffer) {
    let mut lines = vec![Line::from(Span::styled("Channels", colors.heading()))];
    lines.extend(CHANNELS.iter().map(|channel| {
        let style = if *channel == ACTIVE_CHANNEL {
            colors.accent().add_modifier(Modifier::BOLD)
        } else {
            colors.base()
        };
        Line::from(Span::styled(format!(" {channel}"), style))
    }));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Direct Messages", colors.heading())));
    lines.extend(DIRECT_MESSAGES.iter().map(|name| {
        let initial = name.chars().next().unwrap_or('?');
        Line::from(vec![
            Span::styled(format!(" ({initial}) "), colors.accent()),
            Span::styled(*name, colors.base()),
        ])
    }));

    Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(" huddle ", colors.accent().add_modifier(Modifier::BOLD)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors.border))
                .style(colors.base()),
        )
        .render(area, buf);
}

/// Returns the lines of one message: an author line, then the formatted
/// body indented below it.
#[must_use]
pub fn message_lines(message: &ChatMessage, user_name: &str, colors: &UiColors) -> Vec<Line<'static>> {
    let author_style = if message.is_from(user_name) {
        colors.accent().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(colors.foreground)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", message.initial()),
            Style::default()
                .fg(colors.background)
                .bg(colors.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(message.author.clone(), author_style),
        Span::raw("  "),
        Span::styled(message.timestamp.clone(), colors.hint()),
    ])];

    let styles = MarkupStyles {
        text: colors.base(),
        code: colors.code(),
    };
    lines.extend(
        markup_to_lines(&format_message(&message.text), styles)
            .into_iter()
            .map(|mut line| {
                line.spans.insert(0, Span::raw(BODY_INDENT));
                line
            }),
    );
    lines
}

/// Renders the message list, scrolled to the newest message.
pub fn render_messages(
    chat: &ChatLog,
    user_name: &str,
    colors: &UiColors,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .title(Span::styled(format!(" {ACTIVE_CHANNEL} "), colors.heading()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.border))
        .style(colors.base());

    let inner = block.inner(area);
    block.render(area, buf);

    if chat.is_empty() {
        Paragraph::new(Line::from(Span::styled("No messages yet", colors.hint())))
            .render(inner, buf);
        return;
    }

    let mut lines = Vec::new();
    for (i, message) in chat.messages().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(message_lines(message, user_name, colors));
    }

    let overflow = lines.len().saturating_sub(usize::from(inner.height));
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    Paragraph::new(lines).scroll((scroll, 0)).render(inner, buf);
}
