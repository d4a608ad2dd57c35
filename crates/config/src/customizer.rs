//! Initial colors of the theme customizer.

use huddle_protocol::color::parse_hex;
use huddle_protocol::{CustomRole, ThemeCustomizer};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// The customizer colors, each a `#RRGGBB` string.
///
/// Missing fields fall back to the customizer defaults.
///
/// # Examples
///
/// ```
/// use huddle_config::CustomizerConfig;
///
/// let config: CustomizerConfig = serde_json::from_str(r##"{"primary": "#FFD700"}"##).unwrap();
/// assert_eq!(config.primary, "#FFD700");
/// assert_eq!(config.background, "#ffffff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizerConfig {
    /// Primary color.
    pub primary: String,
    /// Background color.
    pub background: String,
    /// Foreground color.
    pub foreground: String,
}

impl Default for CustomizerConfig {
    fn default() -> Self {
        Self::from(&ThemeCustomizer::default())
    }
}

impl CustomizerConfig {
    /// Returns the color configured for `role`.
    #[must_use]
    pub fn get(&self, role: CustomRole) -> &str {
        match role {
            CustomRole::Primary => &self.primary,
            CustomRole::Background => &self.background,
            CustomRole::Foreground => &self.foreground,
        }
    }

    /// Checks that every color is a `#RRGGBB` hex string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] for the first malformed color.
    pub fn validate(&self) -> Result<()> {
        for role in CustomRole::all() {
            parse_hex(self.get(role)).map_err(|source| ConfigError::InvalidColor {
                role: role.display_name(),
                source,
            })?;
        }
        Ok(())
    }

    /// Builds the customizer state from these colors.
    #[must_use]
    pub fn to_customizer(&self) -> ThemeCustomizer {
        ThemeCustomizer {
            primary: self.primary.clone(),
            background: self.background.clone(),
            foreground: self.foreground.clone(),
        }
    }
}

impl From<&ThemeCustomizer> for CustomizerConfig {
    fn from(customizer: &ThemeCustomizer) -> Self {
        Self {
            primary: customizer.primary.clone(),
            background: customizer.background.clone(),
            foreground: customizer.foreground.clone(),
        }
    }
}
