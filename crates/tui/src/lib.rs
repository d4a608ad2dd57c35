//! Terminal UI for the huddle application.
//!
//! This crate provides a Ratatui-based terminal interface with a team chat
//! view and a kanban task board, styled by switchable color themes.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`customizer_state`]: Theme customizer panel state
//! - [`gesture`]: Drag and drop of board tasks
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`palette`] and [`markup`]: Theme colors and formatted message text
//!
//! # Example
//!
//! ```no_run
//! use huddle_protocol::dummy::{dummy_board, dummy_chat};
//! use huddle_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(dummy_chat(), dummy_board());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod customizer_state;
pub mod event;
pub mod gesture;
pub mod layout;
pub mod markup;
pub mod palette;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, Overlay};
