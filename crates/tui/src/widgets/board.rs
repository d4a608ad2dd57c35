//! Task board rendering widget.
//!
//! This module provides functions for rendering the complete board with its
//! three columns arranged horizontally.

use huddle_protocol::{Board, Column, Composer};
use ratatui::{buffer::Buffer, layout::Rect};

use super::lane::{LanePosition, LaneView, render_lane};
use crate::layout::board_columns;
use crate::palette::UiColors;

/// The board as it should be drawn.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// The board, or the drag preview of it.
    pub board: &'a Board,
    /// The focused column.
    pub selected_column: Column,
    /// The highlighted task in the focused column.
    pub selected_task: Option<usize>,
    /// Whether the highlighted task is being dragged.
    pub dragging: bool,
    /// The open add-task input of the focused column.
    pub add_input: Option<&'a Composer>,
    /// Suggestions for the add-task input.
    pub suggestions: &'a [&'a str],
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board` with the first column focused and nothing
    /// selected.
    #[must_use]
    pub const fn new(board: &'a Board) -> Self {
        Self {
            board,
            selected_column: Column::Todo,
            selected_task: None,
            dragging: false,
            add_input: None,
            suggestions: &[],
        }
    }
}

/// Renders the complete board to the buffer.
///
/// # Layout
///
/// ```text
/// ╭To Do (2)──────┬In Progress (2)┬Done (2)──────╮
/// │ Task 1        │ Task 3        │ Task 5       │
/// │ Task 2        │ Task 4        │ Task 6       │
/// ╰───────────────┴───────────────┴──────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use huddle_protocol::dummy::dummy_board;
/// use huddle_tui::palette::UiColors;
/// use huddle_tui::widgets::{render_board, BoardView};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let board = dummy_board();
/// let area = Rect::new(0, 0, 90, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&BoardView::new(&board), &UiColors::default(), area, &mut buf);
/// ```
pub fn render_board(view: &BoardView<'_>, colors: &UiColors, area: Rect, buf: &mut Buffer) {
    let lane_areas = board_columns(area);
    let columns = Column::all();

    for (i, (column, lane_area)) in columns.into_iter().zip(lane_areas).enumerate() {
        let focused = view.selected_column == column;

        let position = if i == 0 {
            LanePosition::First
        } else if i == columns.len() - 1 {
            LanePosition::Last
        } else {
            LanePosition::Middle
        };

        let lane_view = LaneView {
            lane: view.board.lane(column),
            focused,
            selected: if focused { view.selected_task } else { None },
            grabbed: focused && view.dragging,
            prev_focused: column.previous() == Some(view.selected_column),
            add_input: if focused { view.add_input } else { None },
            suggestions: view.suggestions,
        };

        render_lane(&lane_view, colors, position, lane_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use huddle_protocol::dummy::dummy_board;

    #[test]
    fn render_empty_board() {
        let board = Board::new();
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);

        render_board(&BoardView::new(&board), &UiColors::default(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("To Do (0)"));
        assert!(content.contains("In Progress (0)"));
        assert!(content.contains("Done (0)"));
        assert_eq!(content.matches("No tasks").count(), 3);
    }

    #[test]
    fn render_board_with_tasks() {
        let board = dummy_board();
        let area = Rect::new(0, 0, 90, 12);
        let mut buf = Buffer::empty(area);

        render_board(&BoardView::new(&board), &UiColors::default(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("To Do (2)"));
        assert!(content.contains("Design new landing page"));
        assert!(content.contains("Implement authentication"));
        assert!(content.contains("Write documentation"));
    }

    #[test]
    fn add_input_only_in_focused_column() {
        let board = dummy_board();
        let input = Composer::default();
        let area = Rect::new(0, 0, 90, 14);
        let mut buf = Buffer::empty(area);

        let view = BoardView {
            selected_column: Column::Done,
            add_input: Some(&input),
            ..BoardView::new(&board)
        };
        render_board(&view, &UiColors::default(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert_eq!(content.matches("Add task").count(), 1);
        let [_, _, done] = board_columns(area);
        let row = content.lines().find(|l| l.contains("Add task")).unwrap();
        let col = row.chars().take_while(|c| *c != 'A').count();
        assert!(col >= usize::from(done.x));
    }

    #[test]
    fn render_board_narrow_terminal() {
        let board = dummy_board();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with narrow area
        render_board(&BoardView::new(&board), &UiColors::default(), area, &mut buf);
    }
}
