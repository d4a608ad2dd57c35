//! Environment variable overrides.
//!
//! Every variable is optional; an unset or empty variable leaves the file
//! value in place.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `HUDDLE_THEME` | `theme` |
//! | `HUDDLE_VIEW` | `view` |
//! | `HUDDLE_USER` | `user_name` |
//! | `HUDDLE_LOG` | `log.level` |
//! | `HUDDLE_LOG_FILE` | `log.file` |

use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Overrides the startup theme.
pub const ENV_THEME: &str = "HUDDLE_THEME";
/// Overrides the startup view.
pub const ENV_VIEW: &str = "HUDDLE_VIEW";
/// Overrides the author name of sent messages.
pub const ENV_USER: &str = "HUDDLE_USER";
/// Overrides the log level.
pub const ENV_LOG: &str = "HUDDLE_LOG";
/// Overrides the log file.
pub const ENV_LOG_FILE: &str = "HUDDLE_LOG_FILE";

/// Applies overrides from a variable lookup.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnv`] if the theme or view does not parse.
pub(crate) fn apply_overrides(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

    if let Some(value) = get(ENV_THEME) {
        config.theme = value.parse().map_err(|source| ConfigError::InvalidEnv {
            var: ENV_THEME,
            source,
        })?;
        debug!(theme = %config.theme, "theme overridden from environment");
    }
    if let Some(value) = get(ENV_VIEW) {
        config.view = value.parse().map_err(|source| ConfigError::InvalidEnv {
            var: ENV_VIEW,
            source,
        })?;
    }
    if let Some(value) = get(ENV_USER) {
        config.user_name = value.trim().to_string();
    }
    if let Some(value) = get(ENV_LOG) {
        config.log.level = value.trim().to_string();
    }
    if let Some(value) = get(ENV_LOG_FILE) {
        config.log.file = Some(PathBuf::from(value));
    }
    Ok(())
}
