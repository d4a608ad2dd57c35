//! Task board types and the reordering engine.
//!
//! The board holds three fixed columns, each an ordered list of tasks. Its
//! only mutable state is column membership and order, changed either by a
//! drag gesture ([`Board::apply_drag`]) or by appending a new task
//! ([`Board::add_task`]).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProtocolError;
use crate::task::{Task, TaskId};

/// One of the three fixed task groupings.
///
/// # Examples
///
/// ```
/// use huddle_protocol::Column;
///
/// let column = Column::InProgress;
/// assert_eq!(column.display_name(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    /// Tasks waiting to be started.
    #[default]
    Todo,
    /// Tasks currently being worked on.
    InProgress,
    /// Completed tasks.
    Done,
}

impl Column {
    /// Returns all columns in board order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Todo, Self::InProgress, Self::Done]
    }

    /// Returns a human-readable name for the column header.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::Column;
    ///
    /// assert_eq!(Column::Todo.display_name(), "To Do");
    /// assert_eq!(Column::Done.display_name(), "Done");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the identifier used in configuration and logs.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Returns the position of this column on the board (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `Column` from its board position.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::Column;
    ///
    /// assert_eq!(Column::from_index(1), Some(Column::InProgress));
    /// assert_eq!(Column::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Todo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the column to the right, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the column to the left, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }
}

impl FromStr for Column {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "inProgress" | "in_progress" | "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(ProtocolError::UnknownColumn(other.to_string())),
        }
    }
}

/// A position on the board: a column and an index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragLocation {
    /// The column holding the position.
    pub column: Column,
    /// Index within the column's ordered task list.
    pub index: usize,
}

impl DragLocation {
    /// Creates a new location.
    #[must_use]
    pub const fn new(column: Column, index: usize) -> Self {
        Self { column, index }
    }
}

/// The end-event of a drag gesture.
///
/// A missing destination means the gesture was cancelled (dropped outside any
/// column, or aborted).
///
/// # Examples
///
/// ```
/// use huddle_protocol::{Column, DragLocation, DragResult};
///
/// let cancelled = DragResult::cancelled(DragLocation::new(Column::Todo, 0));
/// assert!(cancelled.destination.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragResult {
    /// Where the dragged task was picked up.
    pub source: DragLocation,
    /// Where the task was dropped, if anywhere.
    pub destination: Option<DragLocation>,
}

impl DragResult {
    /// A gesture that dropped the task at `destination`.
    #[must_use]
    pub const fn dropped(source: DragLocation, destination: DragLocation) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// A gesture that ended without a destination.
    #[must_use]
    pub const fn cancelled(source: DragLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// A single column on the board with its ordered tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    /// Which column this is.
    pub column: Column,
    /// Tasks in display order.
    pub tasks: Vec<Task>,
}

impl Lane {
    /// Creates a new empty lane for the given column.
    #[must_use]
    pub const fn new(column: Column) -> Self {
        Self {
            column,
            tasks: Vec::new(),
        }
    }

    /// Returns the number of tasks in this lane.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the lane has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The task board: three fixed columns of ordered tasks.
///
/// Every task id appears in exactly one column exactly once. Moves preserve
/// the total task count and the set of ids.
///
/// # Examples
///
/// ```
/// use huddle_protocol::{Board, Column, DragLocation, DragResult};
///
/// let mut board = Board::new();
/// board.add_task(Column::Todo, "Design landing page");
/// board.add_task(Column::Todo, "Fix navigation bug");
///
/// board.apply_drag(&DragResult::dropped(
///     DragLocation::new(Column::Todo, 0),
///     DragLocation::new(Column::Done, 0),
/// ));
///
/// assert_eq!(board.column(Column::Todo).len(), 1);
/// assert_eq!(board.column(Column::Done)[0].content, "Design landing page");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// The three lanes, indexed by [`Column::index`].
    pub lanes: [Lane; 3],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lanes: [
                Lane::new(Column::Todo),
                Lane::new(Column::InProgress),
                Lane::new(Column::Done),
            ],
        }
    }

    /// Returns the lane for the given column.
    #[must_use]
    pub fn lane(&self, column: Column) -> &Lane {
        &self.lanes[column.index()]
    }

    fn lane_mut(&mut self, column: Column) -> &mut Lane {
        &mut self.lanes[column.index()]
    }

    /// Returns the ordered tasks in the given column.
    #[must_use]
    pub fn column(&self, column: Column) -> &[Task] {
        &self.lane(column).tasks
    }

    /// Appends an existing task to the end of a column.
    ///
    /// The caller is responsible for the id being unique on the board.
    pub fn push_task(&mut self, column: Column, task: Task) {
        self.lane_mut(column).tasks.push(task);
    }

    /// Appends a new task with a generated id and trimmed content.
    ///
    /// Empty or whitespace-only content is ignored and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::{Board, Column};
    ///
    /// let mut board = Board::new();
    /// assert!(board.add_task(Column::Done, "   ").is_none());
    ///
    /// let id = board.add_task(Column::Done, "  Ship it  ").unwrap();
    /// assert_eq!(board.column(Column::Done)[0].content, "Ship it");
    /// assert_eq!(board.column(Column::Done)[0].id, id);
    /// ```
    pub fn add_task(&mut self, column: Column, content: &str) -> Option<TaskId> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        let task = Task::new(content);
        let id = task.id.clone();
        debug!(column = column.id(), task = %id, "adding task");
        self.push_task(column, task);
        Some(id)
    }

    /// Applies the end-event of a drag gesture.
    ///
    /// - Without a destination the board is unchanged.
    /// - Within one column, the task is removed first and the destination
    ///   index is interpreted against the shortened list.
    /// - Across columns, the task is removed from the source and inserted into
    ///   the destination at the given index.
    ///
    /// # Panics
    ///
    /// Indices are trusted: a source index past the end of its column, or a
    /// destination index greater than the destination length, panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::{Board, Column, DragLocation, DragResult, Task};
    ///
    /// let mut board = Board::new();
    /// for name in ["A", "B", "C"] {
    ///     board.push_task(Column::Todo, Task::with_id(name, name));
    /// }
    ///
    /// board.apply_drag(&DragResult::dropped(
    ///     DragLocation::new(Column::Todo, 0),
    ///     DragLocation::new(Column::Todo, 2),
    /// ));
    ///
    /// let order: Vec<_> = board.column(Column::Todo).iter().map(|t| t.content.as_str()).collect();
    /// assert_eq!(order, ["B", "C", "A"]);
    /// ```
    pub fn apply_drag(&mut self, result: &DragResult) {
        let Some(destination) = result.destination else {
            debug!("drag cancelled, board unchanged");
            return;
        };
        let source = result.source;

        let task = self.lane_mut(source.column).tasks.remove(source.index);
        debug!(
            task = %task.id,
            from = source.column.id(),
            from_index = source.index,
            to = destination.column.id(),
            to_index = destination.index,
            "moving task"
        );
        self.lane_mut(destination.column)
            .tasks
            .insert(destination.index, task);
    }

    /// Returns a copy of the board with the drag applied.
    #[must_use]
    pub fn moved(&self, result: &DragResult) -> Self {
        let mut board = self.clone();
        board.apply_drag(result);
        board
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.lanes.iter().map(Lane::len).sum()
    }

    /// Returns every task id on the board, column by column.
    #[must_use]
    pub fn task_ids(&self) -> Vec<&TaskId> {
        self.lanes
            .iter()
            .flat_map(|lane| lane.tasks.iter().map(|t| &t.id))
            .collect()
    }

    /// Finds a task by id, returning its location and the task.
    #[must_use]
    pub fn find_task(&self, id: &TaskId) -> Option<(DragLocation, &Task)> {
        self.lanes.iter().find_map(|lane| {
            lane.tasks
                .iter()
                .position(|t| &t.id == id)
                .map(|idx| (DragLocation::new(lane.column, idx), &lane.tasks[idx]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(todo: &[&str], in_progress: &[&str], done: &[&str]) -> Board {
        let mut board = Board::new();
        for (column, names) in [
            (Column::Todo, todo),
            (Column::InProgress, in_progress),
            (Column::Done, done),
        ] {
            for name in names {
                board.push_task(column, Task::with_id(*name, *name));
            }
        }
        board
    }

    fn names(board: &Board, column: Column) -> Vec<&str> {
        board
            .column(column)
            .iter()
            .map(|t| t.id.as_str())
            .collect()
    }

    #[test]
    fn column_all_returns_three_columns() {
        assert_eq!(
            Column::all(),
            [Column::Todo, Column::InProgress, Column::Done]
        );
    }

    #[test]
    fn column_index_roundtrip() {
        for column in Column::all() {
            assert_eq!(Column::from_index(column.index()), Some(column));
        }
    }

    #[test]
    fn column_navigation() {
        assert_eq!(Column::Todo.next(), Some(Column::InProgress));
        assert_eq!(Column::Done.next(), None);
        assert_eq!(Column::Done.previous(), Some(Column::InProgress));
        assert_eq!(Column::Todo.previous(), None);
    }

    #[test]
    fn column_parses_ids() {
        assert_eq!("todo".parse::<Column>(), Ok(Column::Todo));
        assert_eq!("inProgress".parse::<Column>(), Ok(Column::InProgress));
        assert_eq!("in_progress".parse::<Column>(), Ok(Column::InProgress));
        assert_eq!("done".parse::<Column>(), Ok(Column::Done));
        assert_eq!(
            "backlog".parse::<Column>(),
            Err(ProtocolError::UnknownColumn("backlog".to_string()))
        );
    }

    #[test]
    fn column_json_uses_original_keys() {
        let json = serde_json::to_string(&Column::InProgress).expect("serialize");
        assert_eq!(json, r#""inProgress""#);
    }

    #[test]
    fn move_within_column_uses_shortened_list() {
        let mut board = board_with(&["A", "B", "C"], &[], &[]);

        board.apply_drag(&DragResult::dropped(
            DragLocation::new(Column::Todo, 0),
            DragLocation::new(Column::Todo, 2),
        ));

        assert_eq!(names(&board, Column::Todo), ["B", "C", "A"]);
    }

    #[test]
    fn move_within_column_upwards() {
        let mut board = board_with(&["A", "B", "C"], &[], &[]);

        board.apply_drag(&DragResult::dropped(
            DragLocation::new(Column::Todo, 2),
            DragLocation::new(Column::Todo, 0),
        ));

        assert_eq!(names(&board, Column::Todo), ["C", "A", "B"]);
    }

    #[test]
    fn move_across_columns() {
        let mut board = board_with(&["A", "B"], &[], &[]);

        board.apply_drag(&DragResult::dropped(
            DragLocation::new(Column::Todo, 0),
            DragLocation::new(Column::Done, 0),
        ));

        assert_eq!(names(&board, Column::Todo), ["B"]);
        assert_eq!(names(&board, Column::Done), ["A"]);
    }

    #[test]
    fn move_across_columns_inserts_at_index() {
        let mut board = board_with(&["A"], &["X", "Y"], &[]);

        board.apply_drag(&DragResult::dropped(
            DragLocation::new(Column::Todo, 0),
            DragLocation::new(Column::InProgress, 1),
        ));

        assert!(board.column(Column::Todo).is_empty());
        assert_eq!(names(&board, Column::InProgress), ["X", "A", "Y"]);
    }

    #[test]
    fn cancelled_drag_is_noop() {
        let board = board_with(&["A", "B"], &["C"], &[]);

        let moved = board.moved(&DragResult::cancelled(DragLocation::new(Column::Todo, 1)));

        assert_eq!(moved, board);
    }

    #[test]
    fn moved_leaves_original_untouched() {
        let board = board_with(&["A", "B"], &[], &[]);
        let moved = board.moved(&DragResult::dropped(
            DragLocation::new(Column::Todo, 0),
            DragLocation::new(Column::Done, 0),
        ));

        assert_eq!(names(&board, Column::Todo), ["A", "B"]);
        assert_eq!(names(&moved, Column::Done), ["A"]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_source_is_a_contract_violation() {
        let mut board = board_with(&["A"], &[], &[]);
        board.apply_drag(&DragResult::dropped(
            DragLocation::new(Column::Todo, 5),
            DragLocation::new(Column::Done, 0),
        ));
    }

    #[test]
    fn add_task_appends_trimmed_content() {
        let mut board = board_with(&["A"], &[], &[]);

        let id = board.add_task(Column::Todo, "  New task \n").expect("task added");

        let todo = board.column(Column::Todo);
        assert_eq!(todo.len(), 2);
        assert_eq!(todo[1].content, "New task");
        assert_eq!(todo[1].id, id);
    }

    #[test]
    fn add_task_ignores_blank_content() {
        let mut board = Board::new();

        assert!(board.add_task(Column::Todo, "").is_none());
        assert!(board.add_task(Column::Todo, " \t\n ").is_none());
        assert_eq!(board.total_tasks(), 0);
    }

    #[test]
    fn find_task_reports_location() {
        let board = board_with(&["A"], &["B", "C"], &[]);

        let (location, task) = board.find_task(&TaskId::new("C")).expect("found");
        assert_eq!(location, DragLocation::new(Column::InProgress, 1));
        assert_eq!(task.content, "C");
        assert!(board.find_task(&TaskId::new("Z")).is_none());
    }
}
