//! Seed data for a demo session.
//!
//! Nothing here is persisted: every session starts from the same three chat
//! messages and six board tasks.
//!
//! # Examples
//!
//! ```
//! use huddle_protocol::dummy::{dummy_board, dummy_chat};
//!
//! assert_eq!(dummy_chat().len(), 3);
//! assert_eq!(dummy_board().total_tasks(), 6);
//! ```

use crate::board::{Board, Column};
use crate::chat::{ChatLog, ChatMessage};
use crate::task::Task;

/// Channels listed in the chat sidebar.
pub const CHANNELS: [&str; 3] = ["# general", "# development", "# design"];

/// Direct message partners listed in the chat sidebar.
pub const DIRECT_MESSAGES: [&str; 3] = ["Sarah Chen", "Alex Kim", "Maria Garcia"];

/// Completions offered while composing a chat message.
pub const CHAT_SUGGESTIONS: [&str; 5] = [
    "I'll take a look at that",
    "Great work everyone!",
    "Can we schedule a meeting to discuss this?",
    "Let me know if you need any help",
    "I'm working on it now",
];

/// Completions offered while naming a new task.
pub const BOARD_SUGGESTIONS: [&str; 5] = [
    "Design system updates",
    "Fix responsive layout",
    "Update API documentation",
    "Implement new features",
    "Code review pending PRs",
];

/// Returns the opening chat history.
#[must_use]
pub fn dummy_chat() -> ChatLog {
    ChatLog::new(vec![
        ChatMessage::new(
            1,
            "Sarah Chen",
            "🌻 Good morning everyone! How's everyone doing today?",
            "10:30 AM",
        ),
        ChatMessage::new(
            2,
            "Alex Kim",
            "Morning! ☀️ Just finished reviewing the new design proposals.",
            "10:32 AM",
        ),
        ChatMessage::new(
            3,
            "Maria Garcia",
            "They look amazing! Love the warm color palette we chose! 🌻",
            "10:35 AM",
        ),
    ])
}

/// Returns the opening board: two tasks per column.
///
/// # Examples
///
/// ```
/// use huddle_protocol::dummy::dummy_board;
/// use huddle_protocol::Column;
///
/// let board = dummy_board();
/// assert_eq!(board.column(Column::InProgress)[0].content, "Implement authentication");
/// ```
#[must_use]
pub fn dummy_board() -> Board {
    let seed = [
        (Column::Todo, "task-1", "Design new landing page"),
        (Column::Todo, "task-2", "Fix navigation bug"),
        (Column::InProgress, "task-3", "Implement authentication"),
        (Column::InProgress, "task-4", "Add dark mode support"),
        (Column::Done, "task-5", "Update dependencies"),
        (Column::Done, "task-6", "Write documentation"),
    ];

    let mut board = Board::new();
    for (column, id, content) in seed {
        board.push_task(column, Task::with_id(id, content));
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_board_has_two_tasks_per_column() {
        let board = dummy_board();
        for column in Column::all() {
            assert_eq!(board.column(column).len(), 2, "{column:?}");
        }
    }

    #[test]
    fn dummy_board_ids_are_sequential() {
        let board = dummy_board();
        let ids: Vec<_> = board.task_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(
            ids,
            ["task-1", "task-2", "task-3", "task-4", "task-5", "task-6"]
        );
    }

    #[test]
    fn dummy_chat_ids_and_authors() {
        let chat = dummy_chat();
        let ids: Vec<_> = chat.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(chat.messages()[2].author, "Maria Garcia");
    }

    #[test]
    fn sidebar_lists_mock_authors() {
        let chat = dummy_chat();
        for message in chat.messages() {
            assert!(DIRECT_MESSAGES.contains(&message.author.as_str()));
        }
    }
}
