//! Task types for the task board.
//!
//! A task is deliberately small: an opaque identifier and its content text.
//! Where a task lives (which column, which position) is owned by the
//! [`Board`](crate::Board), not by the task itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a task.
///
/// Seeded tasks use short ids such as `task-1`; tasks created during a
/// session get a generated `task-<uuid>` id.
///
/// # Examples
///
/// ```
/// use huddle_protocol::TaskId;
///
/// let id = TaskId::new("task-1");
/// assert_eq!(id.as_str(), "task-1");
/// assert_ne!(TaskId::generate(), TaskId::generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh, globally unique identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("task-{}", uuid::Uuid::new_v4().simple()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A task on the board.
///
/// # Examples
///
/// ```
/// use huddle_protocol::Task;
///
/// let task = Task::new("Fix navigation bug");
/// assert_eq!(task.content, "Fix navigation bug");
/// assert!(task.id.as_str().starts_with("task-"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// The text shown on the task card.
    pub content: String,
}

impl Task {
    /// Creates a task with a generated identifier.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            content: content.into(),
        }
    }

    /// Creates a task with a specific identifier.
    ///
    /// Used for seeded mock data and tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::{Task, TaskId};
    ///
    /// let task = Task::with_id("task-7", "Write documentation");
    /// assert_eq!(task.id, TaskId::new("task-7"));
    /// ```
    #[must_use]
    pub fn with_id(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(id),
            content: content.into(),
        }
    }
}
