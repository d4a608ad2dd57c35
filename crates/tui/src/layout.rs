//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components, and the rectangle math that both rendering
//! and mouse hit-testing rely on. Keeping both in one place guarantees that a
//! click lands on the card that was drawn under it.

use huddle_protocol::Column;
use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
///
/// The header displays the view title, the active theme and the help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each task card in rows.
///
/// This includes the border (2 rows) and one row of content.
pub const TASK_CARD_HEIGHT: u16 = 3;

/// Height of the chat composer, borders included.
pub const COMPOSER_HEIGHT: u16 = 5;

/// Height of the board add-task input, borders included.
pub const ADD_TASK_HEIGHT: u16 = 3;

/// Width of the channel sidebar in the chat view.
pub const SIDEBAR_WIDTH: u16 = 24;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message.
/// The chat view needs the most vertical space:
/// - Message list: at least 4 rows
/// - Composer: 5 rows
/// - Status bar: 1 row
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has 3 columns; each needs about 20 characters for borders and
/// truncated task text to be readable.
pub const MIN_WIDTH: u16 = 60;

/// Returns the area below the header, or the whole area when it is hidden.
#[must_use]
pub fn content_area(area: Rect, header_visible: bool) -> Rect {
    let offset = if header_visible {
        HEADER_HEIGHT.min(area.height)
    } else {
        0
    };
    Rect {
        x: area.x,
        y: area.y + offset,
        width: area.width,
        height: area.height - offset,
    }
}

/// Splits the content area into the main view and the status bar.
#[must_use]
pub fn split_status_bar(content: Rect) -> (Rect, Rect) {
    let [main, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
            .areas(content);
    (main, status)
}

/// Splits the board area into its three column rectangles.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use huddle_tui::layout::board_columns;
///
/// let [todo, in_progress, done] = board_columns(Rect::new(0, 0, 90, 20));
/// assert_eq!(todo.width + in_progress.width + done.width, 90);
/// assert_eq!(in_progress.x, todo.x + todo.width);
/// ```
#[must_use]
pub fn board_columns(area: Rect) -> [Rect; 3] {
    Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(area)
}

/// A board position under the mouse pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardHit {
    /// The column under the pointer.
    pub column: Column,
    /// The visible card slot under the pointer, counted from the top of the
    /// column's inner area. Not adjusted for scrolling.
    pub slot: usize,
}

/// Finds the board column and card slot at terminal position (`x`, `y`).
///
/// Returns `None` if the position is outside `board_area`.
#[must_use]
pub fn board_hit(board_area: Rect, x: u16, y: u16) -> Option<BoardHit> {
    if !board_area.contains((x, y).into()) {
        return None;
    }

    let (column, rect) = Column::all()
        .into_iter()
        .zip(board_columns(board_area))
        .find(|(_, rect)| rect.contains((x, y).into()))?;

    // One row of border above the first card
    let relative_y = y.saturating_sub(rect.y + 1);
    let slot = usize::from(relative_y / TASK_CARD_HEIGHT);
    Some(BoardHit { column, slot })
}

/// Number of task cards that fit in a column of the given outer height.
#[must_use]
pub fn visible_cards(column_height: u16) -> usize {
    usize::from((column_height.saturating_sub(2) / TASK_CARD_HEIGHT).max(1))
}
