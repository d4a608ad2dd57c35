//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the huddle application.

use std::path::{Path, PathBuf};

use huddle_protocol::{ThemeKey, View};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::customizer::CustomizerConfig;
use crate::env::apply_overrides;
use crate::error::{ConfigError, Result};
use crate::logging::LogConfig;
use crate::persistence::{find_config_file, read_config, theme_save_path, write_config};

/// Author name used when none is configured.
pub const DEFAULT_USER_NAME: &str = "You";

fn default_user_name() -> String {
    DEFAULT_USER_NAME.to_string()
}

/// The main configuration struct for the huddle application.
///
/// # Examples
///
/// ```
/// use huddle_config::Config;
/// use huddle_protocol::{ThemeKey, View};
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.theme, ThemeKey::Sunflower);
/// assert_eq!(config.user_name, "You");
///
/// // Create a custom config
/// let config = Config {
///     theme: ThemeKey::Jade,
///     view: View::Board,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Theme applied at startup.
    #[serde(default)]
    pub theme: ThemeKey,

    /// View mounted at startup.
    #[serde(default)]
    pub view: View,

    /// Author name for messages sent from this terminal.
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Initial colors of the theme customizer.
    #[serde(default)]
    pub customizer: CustomizerConfig,

    /// Log output.
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeKey::default(),
            view: View::default(),
            user_name: default_user_name(),
            customizer: CustomizerConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations and environment.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./huddle.json5` or `./huddle.json`
    /// 2. User: `~/.config/huddle/config.json5` or `~/.config/huddle/config.json`
    ///
    /// If no configuration file is found, starts from the defaults. `HUDDLE_*`
    /// environment variables are applied on top.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, if an environment override is malformed, or if the
    /// result fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle_config::Config;
    ///
    /// # async fn example() -> huddle_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Starting with the {} theme", config.theme.name());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => {
                info!(path = %path.display(), "loading config file");
                read_config(&path)?
            }
            None => {
                debug!("no config file found, using defaults");
                Self::default()
            }
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment variables are not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle_config::Config;
    ///
    /// # fn example() -> huddle_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = read_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config(path, self)
    }

    /// Records `theme` in the config file at `path`, keeping its other fields.
    ///
    /// A missing file is created from the defaults. Environment overrides
    /// are not written back.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed, or the
    /// result cannot be written.
    pub fn save_theme(theme: ThemeKey, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            read_config(path)?
        } else {
            Self::default()
        };
        config.theme = theme;
        info!(theme = %theme, path = %path.display(), "saving theme");
        config.save_to(path)
    }

    /// Records `theme` where the next start will read it back.
    ///
    /// That is the config file [`Config::load`] found, or
    /// `~/.config/huddle/config.json5` when there is none. Returns the path
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error if no target path can be determined, or if
    /// [`Config::save_theme`] fails on it.
    pub fn remember_theme(theme: ThemeKey) -> Result<PathBuf> {
        let path = theme_save_path()?;
        Self::save_theme(theme, &path)?;
        Ok(path)
    }

    /// Applies `HUDDLE_*` environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if `HUDDLE_THEME` or `HUDDLE_VIEW` holds an unknown
    /// value.
    pub fn apply_env(&mut self) -> Result<()> {
        apply_overrides(self, |var| std::env::var(var).ok())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the user name is blank, the log level is unknown,
    /// or a customizer color is not a `#RRGGBB` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.user_name = "   ".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.user_name.trim().is_empty() {
            return Err(ConfigError::EmptyUserName);
        }
        self.log.validate()?;
        self.customizer.validate()?;
        Ok(())
    }
}
