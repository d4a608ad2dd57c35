//! Lane rendering widget.
//!
//! This module provides functions for rendering one board column with its
//! header, its task cards and, when open, the add-task input.

use huddle_protocol::{Composer, Lane};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::input::{render_input, render_suggestions};
use super::task_card::{CardHighlight, render_task_card};
use crate::layout::{ADD_TASK_HEIGHT, TASK_CARD_HEIGHT};
use crate::palette::UiColors;

/// Position of a lane in the horizontal layout.
///
/// Used to determine which borders to render for each lane, enabling
/// collapsed borders between adjacent lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePosition {
    /// First (leftmost) lane - has left border with rounded corners.
    First,
    /// Middle lanes - has left border with T-connectors (no rounded corners on left).
    Middle,
    /// Last (rightmost) lane - has both borders, rounded on right, T-connectors on left.
    Last,
}

/// Border set for the first (leftmost) lane: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle lanes: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) lane: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// What to draw for one lane.
#[derive(Debug, Clone, Copy)]
pub struct LaneView<'a> {
    /// The lane to draw.
    pub lane: &'a Lane,
    /// Whether this lane has focus.
    pub focused: bool,
    /// The highlighted task index, if this lane has focus.
    pub selected: Option<usize>,
    /// Whether the highlighted task is being dragged.
    pub grabbed: bool,
    /// Whether the lane to the left has focus, for the shared border.
    pub prev_focused: bool,
    /// The open add-task input, if it belongs to this lane.
    pub add_input: Option<&'a Composer>,
    /// Suggestions for the add-task input.
    pub suggestions: &'a [&'a str],
}

impl<'a> LaneView<'a> {
    /// Creates an unfocused view of `lane`.
    #[must_use]
    pub const fn new(lane: &'a Lane) -> Self {
        Self {
            lane,
            focused: false,
            selected: None,
            grabbed: false,
            prev_focused: false,
            add_input: None,
            suggestions: &[],
        }
    }
}

/// Renders a single lane to the buffer.
///
/// A lane displays its header (name and task count) followed by a vertical
/// list of task cards. Empty lanes show a "No tasks" placeholder message.
///
/// # Layout
///
/// ```text
/// ╭─To Do (2)──────┬
/// │╭──────────────╮│
/// ││ Task 1       ││
/// │╰──────────────╯│
/// │╭─ Add task ───╮│
/// ││              ││  <- Only while the input is open
/// │╰──────────────╯│
/// ╰────────────────┴
/// ```
///
/// # Examples
///
/// ```
/// use huddle_protocol::dummy::dummy_board;
/// use huddle_protocol::Column;
/// use huddle_tui::palette::UiColors;
/// use huddle_tui::widgets::{render_lane, LanePosition, LaneView};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let board = dummy_board();
/// let view = LaneView {
///     focused: true,
///     selected: Some(0),
///     ..LaneView::new(board.lane(Column::Todo))
/// };
///
/// let area = Rect::new(0, 0, 24, 15);
/// let mut buf = Buffer::empty(area);
/// render_lane(&view, &UiColors::default(), LanePosition::First, area, &mut buf);
/// ```
pub fn render_lane(
    view: &LaneView<'_>,
    colors: &UiColors,
    position: LanePosition,
    area: Rect,
    buf: &mut Buffer,
) {
    let lane = view.lane;
    let border_style = if view.focused {
        colors.accent()
    } else {
        Style::default().fg(colors.border)
    };

    let title = format!("{} ({})", lane.column.display_name(), lane.len());
    let title_style = if view.focused {
        colors.accent().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.foreground)
    };

    // Collapse borders between adjacent lanes: only the last lane draws a
    // right border.
    let (borders, border_set) = match position {
        LanePosition::First => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, BORDER_SET_FIRST),
        LanePosition::Middle => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, BORDER_SET_MIDDLE),
        LanePosition::Last => (Borders::ALL, BORDER_SET_LAST),
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style)
        .style(colors.base());

    let inner_area = block.inner(area);
    block.render(area, buf);

    // The shared left border follows the focus of either neighbor
    if view.prev_focused && !view.focused && area.width > 0 {
        let x = area.x;
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(colors.accent());
            }
        }
    }

    let (cards_area, input_area) = match view.add_input {
        Some(_) => {
            let [cards, input] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(ADD_TASK_HEIGHT)])
                    .areas(inner_area);
            (cards, Some(input))
        }
        None => (inner_area, None),
    };

    if lane.is_empty() {
        render_empty_placeholder(colors, cards_area, buf);
    } else {
        render_cards(view, colors, cards_area, buf);
    }

    if let (Some(input), Some(input_area)) = (view.add_input, input_area) {
        render_input(input, "Add task", "", true, colors, input_area, buf);
        render_suggestions(view.suggestions, colors, input_area, cards_area, buf);
    }
}

fn render_cards(view: &LaneView<'_>, colors: &UiColors, area: Rect, buf: &mut Buffer) {
    let lane = view.lane;
    let visible_tasks = (area.height / TASK_CARD_HEIGHT).max(1) as usize;
    let scroll_offset = calculate_scroll_offset(view.selected, lane.len(), visible_tasks);

    let task_count = lane.len().min(visible_tasks);
    let mut constraints: Vec<Constraint> = (0..task_count)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let task_areas = Layout::vertical(constraints).split(area);

    for (i, task_area) in task_areas.iter().take(task_count).enumerate() {
        let task_idx = scroll_offset + i;
        let Some(task) = lane.tasks.get(task_idx) else {
            break;
        };

        let highlight = match view.selected {
            Some(selected) if view.focused && selected == task_idx => {
                if view.grabbed {
                    CardHighlight::Grabbed
                } else {
                    CardHighlight::Selected
                }
            }
            _ => CardHighlight::None,
        };

        render_task_card(task, highlight, colors, *task_area, buf);
    }
}

/// Renders a placeholder message for empty lanes.
fn render_empty_placeholder(colors: &UiColors, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled("No tasks", colors.hint()))).render(area, buf);
}

/// Calculates the scroll offset to keep the selected task visible.
///
/// Mouse hit-testing uses the same offset to map a visible slot back to a
/// task index.
#[must_use]
pub fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_tasks: usize,
    visible_tasks: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_tasks <= visible_tasks {
        return 0;
    }

    let max_offset = total_tasks.saturating_sub(visible_tasks);

    if selected < visible_tasks / 2 {
        0
    } else {
        (selected.saturating_sub(visible_tasks / 2)).min(max_offset)
    }
}
