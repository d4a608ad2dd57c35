//! Drag gesture recognition for the task board.
//!
//! A gesture starts when a task is grabbed (with `Space` or a mouse press) and
//! ends with a [`DragResult`]: dropped at a destination, or cancelled. While
//! the gesture is live, the board is drawn as a preview of the move, so the
//! drop target is always a position the task can actually land on.

use huddle_protocol::{Board, Column, DragLocation, DragResult};

/// Clamps a requested drop position to one the board can accept.
///
/// Within the source column the task can land on any existing index; in
/// another column it can also land after the last task.
///
/// # Examples
///
/// ```
/// use huddle_protocol::{dummy::dummy_board, Column, DragLocation};
/// use huddle_tui::gesture::clamp_target;
///
/// let board = dummy_board();
/// let source = DragLocation::new(Column::Todo, 0);
///
/// assert_eq!(clamp_target(&board, source, Column::Todo, 9).index, 1);
/// assert_eq!(clamp_target(&board, source, Column::Done, 9).index, 2);
/// ```
#[must_use]
pub fn clamp_target(board: &Board, source: DragLocation, column: Column, index: usize) -> DragLocation {
    let len = board.lane(column).len();
    let max = if column == source.column {
        len.saturating_sub(1)
    } else {
        len
    };
    DragLocation::new(column, index.min(max))
}

/// An in-flight drag of one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    source: DragLocation,
    target: DragLocation,
}

impl DragGesture {
    /// Grabs the task at `source`. The initial target is the source itself.
    #[must_use]
    pub const fn grab(source: DragLocation) -> Self {
        Self {
            source,
            target: source,
        }
    }

    /// Where the task was picked up.
    #[must_use]
    pub const fn source(&self) -> DragLocation {
        self.source
    }

    /// Where the task would land if dropped now.
    #[must_use]
    pub const fn target(&self) -> DragLocation {
        self.target
    }

    /// Moves the target one slot up.
    pub fn move_up(&mut self) {
        self.target.index = self.target.index.saturating_sub(1);
    }

    /// Moves the target one slot down, stopping at the end of the column.
    pub fn move_down(&mut self, board: &Board) {
        self.hover(board, self.target.column, self.target.index + 1);
    }

    /// Moves the target to the column on the left, keeping its row if possible.
    pub fn move_left(&mut self, board: &Board) {
        if let Some(column) = self.target.column.previous() {
            self.hover(board, column, self.target.index);
        }
    }

    /// Moves the target to the column on the right, keeping its row if possible.
    pub fn move_right(&mut self, board: &Board) {
        if let Some(column) = self.target.column.next() {
            self.hover(board, column, self.target.index);
        }
    }

    /// Points the target at `index` in `column`, clamped to a valid drop.
    pub fn hover(&mut self, board: &Board, column: Column, index: usize) {
        self.target = clamp_target(board, self.source, column, index);
    }

    /// Ends the gesture by dropping on the current target.
    #[must_use]
    pub const fn drop(self) -> DragResult {
        DragResult::dropped(self.source, self.target)
    }

    /// Ends the gesture without a destination.
    #[must_use]
    pub const fn cancel(self) -> DragResult {
        DragResult::cancelled(self.source)
    }

    /// Returns the board as it would look after dropping now.
    #[must_use]
    pub fn preview(&self, board: &Board) -> Board {
        board.moved(&self.drop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_protocol::dummy::dummy_board;
    use proptest::prelude::*;

    fn at(column: Column, index: usize) -> DragLocation {
        DragLocation::new(column, index)
    }

    #[test]
    fn grab_targets_source() {
        let gesture = DragGesture::grab(at(Column::Todo, 1));
        assert_eq!(gesture.target(), at(Column::Todo, 1));
        assert_eq!(gesture.drop(), DragResult::dropped(at(Column::Todo, 1), at(Column::Todo, 1)));
    }

    #[test]
    fn keyboard_drag_to_next_column() {
        let board = dummy_board();
        let mut gesture = DragGesture::grab(at(Column::Todo, 0));

        gesture.move_right(&board);
        gesture.move_down(&board);
        gesture.move_down(&board);
        gesture.move_down(&board);

        // In Progress holds two tasks, so the end slot is index 2
        assert_eq!(
            gesture.drop(),
            DragResult::dropped(at(Column::Todo, 0), at(Column::InProgress, 2))
        );
    }

    #[test]
    fn move_down_stops_at_last_task_in_source_column() {
        let board = dummy_board();
        let mut gesture = DragGesture::grab(at(Column::Done, 0));
        for _ in 0..5 {
            gesture.move_down(&board);
        }
        assert_eq!(gesture.target(), at(Column::Done, 1));
    }

    #[test]
    fn move_up_stops_at_top() {
        let mut gesture = DragGesture::grab(at(Column::Todo, 1));
        gesture.move_up();
        gesture.move_up();
        assert_eq!(gesture.target().index, 0);
    }

    #[test]
    fn moving_back_to_source_column_reclamps() {
        let board = dummy_board();
        let mut gesture = DragGesture::grab(at(Column::Todo, 1));
        gesture.move_right(&board);
        gesture.move_down(&board);
        assert_eq!(gesture.target(), at(Column::InProgress, 2));

        gesture.move_left(&board);
        assert_eq!(gesture.target(), at(Column::Todo, 1));
    }

    #[test]
    fn left_and_right_stop_at_edges() {
        let board = dummy_board();
        let mut gesture = DragGesture::grab(at(Column::Todo, 0));
        gesture.move_left(&board);
        assert_eq!(gesture.target().column, Column::Todo);

        gesture.move_right(&board);
        gesture.move_right(&board);
        gesture.move_right(&board);
        assert_eq!(gesture.target().column, Column::Done);
    }

    #[test]
    fn cancel_has_no_destination() {
        let mut gesture = DragGesture::grab(at(Column::InProgress, 0));
        gesture.move_right(&dummy_board());
        assert_eq!(gesture.cancel(), DragResult::cancelled(at(Column::InProgress, 0)));
    }

    #[test]
    fn hover_clamps_into_empty_column() {
        let mut board = dummy_board();
        board.apply_drag(&DragResult::dropped(at(Column::Done, 0), at(Column::Todo, 0)));
        board.apply_drag(&DragResult::dropped(at(Column::Done, 0), at(Column::Todo, 0)));
        assert!(board.lane(Column::Done).is_empty());

        let mut gesture = DragGesture::grab(at(Column::Todo, 0));
        gesture.hover(&board, Column::Done, 7);
        assert_eq!(gesture.target(), at(Column::Done, 0));
    }

    #[test]
    fn preview_matches_drop() {
        let board = dummy_board();
        let mut gesture = DragGesture::grab(at(Column::Todo, 0));
        gesture.move_right(&board);
        gesture.move_right(&board);

        let preview = gesture.preview(&board);
        assert_eq!(preview.column(Column::Done)[0].content, "Design new landing page");
        assert_eq!(preview.total_tasks(), board.total_tasks());
        // The source board is untouched
        assert_eq!(board.column(Column::Todo).len(), 2);
    }

    fn column_strategy() -> impl Strategy<Value = Column> {
        (0usize..3).prop_map(|i| Column::from_index(i).unwrap_or(Column::Todo))
    }

    proptest! {
        #[test]
        fn any_gesture_drops_to_a_valid_board(
            source_column in column_strategy(),
            source_index in 0usize..2,
            moves in proptest::collection::vec(0u8..4, 0..12),
        ) {
            let board = dummy_board();
            let mut gesture = DragGesture::grab(at(source_column, source_index));
            for step in moves {
                match step {
                    0 => gesture.move_up(),
                    1 => gesture.move_down(&board),
                    2 => gesture.move_left(&board),
                    _ => gesture.move_right(&board),
                }
            }

            let after = gesture.preview(&board);
            prop_assert_eq!(after.total_tasks(), board.total_tasks());
            let target = gesture.target();
            let moved = &board.column(source_column)[source_index];
            prop_assert_eq!(&after.column(target.column)[target.index].id, &moved.id);
        }
    }
}
