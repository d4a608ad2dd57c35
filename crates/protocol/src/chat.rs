//! Chat message types.
//!
//! Messages are immutable once created and kept in an append-only
//! [`ChatLog`]. The raw text is stored as typed; formatting happens at render
//! time through [`format_message`](crate::format::format_message).

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Avatar reference used for every mock and locally sent message.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// A single chat message.
///
/// # Examples
///
/// ```
/// use huddle_protocol::ChatMessage;
///
/// let msg = ChatMessage::new(1, "Sarah Chen", "Good morning!", "10:30 AM");
/// assert_eq!(msg.initial(), 'S');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    /// Display name of the author.
    pub author: String,
    /// Avatar image reference.
    pub avatar: String,
    /// The raw message text, before formatting.
    pub text: String,
    /// Display timestamp, e.g. `10:30 AM`.
    pub timestamp: String,
}

impl ChatMessage {
    /// Creates a message with the placeholder avatar.
    #[must_use]
    pub fn new(
        id: u64,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Returns the avatar fallback letter: the first character of the author.
    #[must_use]
    pub fn initial(&self) -> char {
        self.author.chars().next().unwrap_or('?')
    }

    /// Returns `true` if the message was written by `user`.
    #[must_use]
    pub fn is_from(&self, user: &str) -> bool {
        self.author == user
    }
}

/// The append-only message history of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// Creates a log seeded with the given messages.
    #[must_use]
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// Returns the messages in order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the log has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Sends a message stamped with the current local time.
    ///
    /// The text is trimmed; blank text is ignored and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::ChatLog;
    ///
    /// let mut log = ChatLog::default();
    /// assert!(log.send("You", "   ").is_none());
    ///
    /// let msg = log.send("You", " hi there ").unwrap();
    /// assert_eq!(msg.text, "hi there");
    /// assert_eq!(msg.id, 1);
    /// ```
    pub fn send(&mut self, author: &str, text: &str) -> Option<&ChatMessage> {
        let timestamp = Local::now().format("%I:%M %p").to_string();
        self.send_at(author, text, timestamp)
    }

    /// Sends a message with an explicit display timestamp.
    pub fn send_at(
        &mut self,
        author: &str,
        text: &str,
        timestamp: impl Into<String>,
    ) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.messages.len() as u64 + 1;
        debug!(id, author, "sending chat message");
        self.messages
            .push(ChatMessage::new(id, author, text, timestamp));
        self.messages.last()
    }
}
