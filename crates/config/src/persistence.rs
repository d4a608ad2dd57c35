//! Where the huddle config file lives, and reading and writing it.
//!
//! Files are looked up in this order, first match wins:
//!
//! 1. `./huddle.json5`, then `./huddle.json`
//! 2. `~/.config/huddle/config.json5`, then `~/.config/huddle/config.json`
//!
//! Both extensions are parsed as JSON5. Writes are pretty-printed JSON, which
//! JSON5 still reads.
//!
//! The theme picked in the UI is saved to the file that was found at
//! startup. With no file found it goes to `~/.config/huddle/config.json5`,
//! created on demand; see [`theme_save_path`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// File names looked up in the working directory.
const LOCAL_FILE_NAMES: &[&str] = &["huddle.json5", "huddle.json"];

/// Directory under the platform config dir.
const USER_DIR: &str = "huddle";

/// File names looked up in the user config directory.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Lists every place a config file may live, in lookup order.
///
/// `user_dir` is the platform config directory (`~/.config` on Linux).
fn candidates(user_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(PathBuf::from);
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(USER_DIR).join(name)));
    local.chain(user).collect()
}

/// Returns the config file huddle reads at startup, if there is one.
///
/// # Examples
///
/// ```no_run
/// use huddle_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("reading {}", path.display()),
///     None => println!("using defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let found = candidates(dirs::config_dir().as_deref())
        .into_iter()
        .find(|path| path.is_file());
    debug!(path = ?found, "config file lookup");
    found
}

/// Returns `~/.config/huddle/config.json5`, whether or not it exists.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform has no config
/// directory.
pub fn user_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(USER_DIR).join(USER_FILE_NAMES[0]))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Picks the save target: the file found at startup, else the user file.
fn save_target(found: Option<PathBuf>, user: impl FnOnce() -> Result<PathBuf>) -> Result<PathBuf> {
    found.map_or_else(user, Ok)
}

/// Returns the file a theme chosen in the UI should be written to.
///
/// This is the file [`find_config_file`] reads, so a saved theme is picked up
/// on the next start. Without one, the user config file is used.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if no file was found and the
/// platform has no config directory.
pub fn theme_save_path() -> Result<PathBuf> {
    save_target(find_config_file(), user_config_path)
}

/// Reads and parses a config file, JSON5 or JSON.
///
/// The result is not validated; see [`Config::load_from`].
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if it does not parse.
pub fn read_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Writes `config` to `path` as pretty JSON, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::WriteFile`] if the directory or file cannot be
/// written.
pub fn write_config(path: impl AsRef<Path>, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_err)
}
