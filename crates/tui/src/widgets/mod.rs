//! Widget components for the huddle TUI.
//!
//! This module provides reusable rendering functions for the chat and board
//! views and their overlays, organized into focused submodules for each
//! visual component.
//!
//! # Overview
//!
//! The widget system follows a functional rendering approach where each widget
//! is a pure function that renders state to a buffer. This enables easy testing
//! and composition. Every widget takes its colors from a
//! [`UiColors`](crate::palette::UiColors), so a theme change restyles the
//! whole interface on the next frame.
//!
//! # Modules
//!
//! - [`chat`]: Renders the channel sidebar, message list and composer
//! - [`board`]: Renders the task board with three columns
//! - [`lane`]: Renders one column with its task cards
//! - [`task_card`]: Renders a task card, selected or grabbed
//! - [`input`]: Renders text inputs and suggestion lists
//! - [`help`], [`theme_menu`], [`customizer`]: Overlays
//! - [`status_bar`]: Renders the footer with keybinding hints
//!
//! # Example
//!
//! ```
//! use huddle_protocol::dummy::dummy_board;
//! use huddle_tui::palette::UiColors;
//! use huddle_tui::widgets::{self, BoardView};
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let board = dummy_board();
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&BoardView::new(&board), &UiColors::default(), area, &mut buf);
//! ```

pub mod board;
pub mod chat;
pub mod customizer;
pub mod help;
pub mod input;
pub mod lane;
pub mod status_bar;
pub mod task_card;
pub mod theme_menu;

// Re-export primary rendering functions for convenience
pub use board::{BoardView, render_board};
pub use chat::{ChatView, render_chat};
pub use customizer::render_customizer;
pub use help::render_help_overlay;
pub use input::{render_input, render_suggestions};
pub use lane::{LanePosition, LaneView, calculate_scroll_offset, render_lane};
pub use status_bar::{key_hints, render_status_bar};
pub use task_card::{CardHighlight, render_task_card};
pub use theme_menu::render_theme_menu;
