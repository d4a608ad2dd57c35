//! Shared protocol types for the huddle application.
//!
//! This crate holds everything that does not touch the terminal: the chat
//! message formatter, the board reordering engine, theme palettes and their
//! application to a style sink, and the seed data of a demo session.
//!
//! # Overview
//!
//! - [`format`]: the ordered regex pipeline that turns raw chat text into markup
//! - [`board`]: columns, drag results and the `Board` reordering engine
//! - [`task`]: task identifiers and the `Task` struct
//! - [`chat`]: chat messages and the append-only `ChatLog`
//! - [`theme`]: theme catalog, `StyleSink` and custom color application
//! - [`color`]: hex/HSL/RGB conversions
//! - [`compose`]: text input buffer and suggestion filtering
//! - [`view`]: the two top-level views
//! - [`message`]: TUI event messages
//! - [`dummy`]: seed data
//! - [`error`]: error types for protocol operations
//!
//! # Examples
//!
//! Moving a task and rendering a message:
//!
//! ```
//! use huddle_protocol::{Column, DragLocation, DragResult, dummy, format_message};
//!
//! let mut board = dummy::dummy_board();
//! board.apply_drag(&DragResult::dropped(
//!     DragLocation::new(Column::Todo, 0),
//!     DragLocation::new(Column::Done, 0),
//! ));
//! assert_eq!(board.column(Column::Done)[0].content, "Design new landing page");
//!
//! assert_eq!(format_message("*done*"), "<strong>done</strong>");
//! ```

pub mod board;
pub mod chat;
pub mod color;
pub mod compose;
pub mod dummy;
pub mod error;
pub mod format;
pub mod message;
pub mod task;
pub mod theme;
pub mod view;

// Re-export primary types at crate root for convenience
pub use board::{Board, Column, DragLocation, DragResult, Lane};
pub use chat::{ChatLog, ChatMessage};
pub use color::{Hsl, Rgb, hex_to_hsl};
pub use compose::{Composer, Wrap, filter_suggestions};
pub use error::{ProtocolError, Result};
pub use format::format_message;
pub use message::Message;
pub use task::{Task, TaskId};
pub use theme::{
    ColorRole, CustomRole, StyleSheet, StyleSink, ThemeCustomizer, ThemeKey, apply_custom_color,
    apply_theme,
};
pub use view::View;
