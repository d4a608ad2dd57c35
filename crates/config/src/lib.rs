//! Configuration management for the huddle application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults).
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`customizer`]: Initial colors of the theme customizer
//! - [`logging`]: Log level and log file
//! - [`env`]: `HUDDLE_*` environment overrides
//! - [`persistence`]: Config file lookup, reading and writing, and where themes are saved
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`HUDDLE_*`)
//! 2. Local config (`./huddle.json5` or `./huddle.json`)
//! 3. User config (`~/.config/huddle/config.json5` or `~/.config/huddle/config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   theme: "lagoon",          // jade, indigo, barbra, lagoon, sunflower
//!   view: "board",            // chat or board
//!   user_name: "Dana",
//!   customizer: { primary: "#0ea5e9" },
//!   log: { level: "debug", file: "/tmp/huddle.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use huddle_config::Config;
//!
//! # async fn example() -> huddle_config::Result<()> {
//! let config = Config::load().await?;
//! println!("Theme: {}", config.theme.name());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod customizer;
pub mod env;
pub mod error;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use customizer::CustomizerConfig;
pub use error::{ConfigError, Result};
pub use logging::LogConfig;
