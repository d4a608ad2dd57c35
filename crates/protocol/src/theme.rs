//! Color themes and their application to a style sheet.
//!
//! A theme is a fixed palette of six named colors. Applying a theme writes one
//! `--{role}` property per color into a [`StyleSink`]; the primary color is
//! also written to `--ring`. Rendering code only ever reads the sink, so the
//! same palette drives every view.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Rgb, hex_to_hsl, resolve_color};
use crate::error::ProtocolError;

/// Receives named style properties.
///
/// Theme application never owns the destination; callers inject whatever
/// holds the properties (an in-memory [`StyleSheet`], a recorder in tests).
pub trait StyleSink {
    /// Sets property `name` (e.g. `--primary`) to `value`.
    fn set_property(&mut self, name: &str, value: &str);
}

/// An in-memory style sheet holding the root property map.
///
/// # Examples
///
/// ```
/// use huddle_protocol::theme::{apply_theme, StyleSheet, ThemeKey};
///
/// let mut sheet = StyleSheet::new();
/// apply_theme(ThemeKey::Jade, &mut sheet);
/// assert_eq!(sheet.get("--primary"), Some("#00A86B"));
/// assert_eq!(sheet.get("--ring"), Some("#00A86B"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheet {
    properties: BTreeMap<String, String>,
}

impl StyleSheet {
    /// Creates an empty style sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style sheet with `key` already applied.
    #[must_use]
    pub fn themed(key: ThemeKey) -> Self {
        let mut sheet = Self::new();
        apply_theme(key, &mut sheet);
        sheet
    }

    /// Returns the value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Resolves a property to an RGB color.
    ///
    /// Returns `None` if the property is unset or does not hold a color.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<Rgb> {
        self.get(name).and_then(resolve_color)
    }

    /// Returns the number of properties set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl StyleSink for StyleSheet {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }
}

/// The named roles of a palette, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    /// Accent color for buttons, focus and highlights.
    Primary,
    /// Secondary accent.
    Secondary,
    /// Page background.
    Background,
    /// Body text.
    Foreground,
    /// Subdued surfaces.
    Muted,
    /// Borders and separators.
    Border,
}

impl ColorRole {
    /// Returns all roles in palette order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Primary,
            Self::Secondary,
            Self::Background,
            Self::Foreground,
            Self::Muted,
            Self::Border,
        ]
    }

    /// Returns the role name as used in property names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Muted => "muted",
            Self::Border => "border",
        }
    }

    /// Returns the style property this role is written to, e.g. `--muted`.
    #[must_use]
    pub fn property(self) -> String {
        format!("--{}", self.name())
    }
}

/// The six colors of a theme, as `#RRGGBB` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// `--primary`.
    pub primary: &'static str,
    /// `--secondary`.
    pub secondary: &'static str,
    /// `--background`.
    pub background: &'static str,
    /// `--foreground`.
    pub foreground: &'static str,
    /// `--muted`.
    pub muted: &'static str,
    /// `--border`.
    pub border: &'static str,
}

impl Palette {
    /// Returns the color for `role`.
    #[must_use]
    pub const fn get(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Background => self.background,
            ColorRole::Foreground => self.foreground,
            ColorRole::Muted => self.muted,
            ColorRole::Border => self.border,
        }
    }

    /// Iterates over `(role, color)` pairs in palette order.
    pub fn colors(&self) -> impl Iterator<Item = (ColorRole, &'static str)> + '_ {
        ColorRole::all()
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }
}

/// Identifies one of the built-in themes.
///
/// # Examples
///
/// ```
/// use huddle_protocol::ThemeKey;
///
/// let key: ThemeKey = "lagoon".parse().unwrap();
/// assert_eq!(key.name(), "Lagoon");
/// assert_eq!(ThemeKey::default(), ThemeKey::Sunflower);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKey {
    /// Deep greens.
    Jade,
    /// Blue-violet.
    Indigo,
    /// Pinks.
    Barbra,
    /// Cyan and teal.
    Lagoon,
    /// Gold on slate.
    #[default]
    Sunflower,
}

impl ThemeKey {
    /// Returns all themes in menu order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Jade,
            Self::Indigo,
            Self::Barbra,
            Self::Lagoon,
            Self::Sunflower,
        ]
    }

    /// Returns the key as written in configuration.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Jade => "jade",
            Self::Indigo => "indigo",
            Self::Barbra => "barbra",
            Self::Lagoon => "lagoon",
            Self::Sunflower => "sunflower",
        }
    }

    /// Returns the display name shown in the theme menu.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jade => "Jade",
            Self::Indigo => "Indigo",
            Self::Barbra => "Barbra",
            Self::Lagoon => "Lagoon",
            Self::Sunflower => "Sun Flower",
        }
    }

    /// Returns the position in [`ThemeKey::all`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Jade => 0,
            Self::Indigo => 1,
            Self::Barbra => 2,
            Self::Lagoon => 3,
            Self::Sunflower => 4,
        }
    }

    /// Returns the theme at `index` in menu order.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Jade),
            1 => Some(Self::Indigo),
            2 => Some(Self::Barbra),
            3 => Some(Self::Lagoon),
            4 => Some(Self::Sunflower),
            _ => None,
        }
    }

    /// Returns the palette of this theme.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Jade => Palette {
                primary: "#00A86B",
                secondary: "#004B40",
                background: "#F0FFF4",
                foreground: "#1A2E29",
                muted: "#E0F2E9",
                border: "#004B40",
            },
            Self::Indigo => Palette {
                primary: "#4F46E5",
                secondary: "#312E81",
                background: "#F5F3FF",
                foreground: "#1E1B4B",
                muted: "#E0E7FF",
                border: "#312E81",
            },
            Self::Barbra => Palette {
                primary: "#EC4899",
                secondary: "#831843",
                background: "#FDF2F8",
                foreground: "#500724",
                muted: "#FCE7F3",
                border: "#831843",
            },
            Self::Lagoon => Palette {
                primary: "#06B6D4",
                secondary: "#164E63",
                background: "#ECFEFF",
                foreground: "#083344",
                muted: "#CFFAFE",
                border: "#164E63",
            },
            Self::Sunflower => Palette {
                primary: "#FFD700",
                secondary: "#2F4F4F",
                background: "#FFFAF0",
                foreground: "#1A472A",
                muted: "#FFF8DC",
                border: "#2F4F4F",
            },
        }
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeKey {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|key| key.id() == lowered || key.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProtocolError::UnknownTheme(s.to_string()))
    }
}

/// Writes every palette color of `key` into `sink`.
///
/// Each role goes to `--{role}`; the primary color is additionally written
/// to `--ring`. Applying the same theme twice leaves the sink unchanged.
pub fn apply_theme(key: ThemeKey, sink: &mut impl StyleSink) {
    debug!(theme = key.id(), "applying theme");
    let palette = key.palette();
    for (role, value) in palette.colors() {
        sink.set_property(&role.property(), value);
        if role == ColorRole::Primary {
            sink.set_property("--ring", value);
        }
    }
}

/// The roles a user can override with a custom color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomRole {
    /// Accent color.
    Primary,
    /// Background of the page and its surfaces.
    Background,
    /// Text color of the page and its surfaces.
    Foreground,
}

impl CustomRole {
    /// Returns all customizable roles in panel order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Primary, Self::Background, Self::Foreground]
    }

    /// Returns the label shown in the customizer.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Background => "Background",
            Self::Foreground => "Foreground",
        }
    }

    /// Returns the properties that receive the converted color.
    #[must_use]
    pub const fn properties(self) -> &'static [&'static str] {
        match self {
            Self::Primary => &["--primary", "--ring"],
            Self::Background => &["--background", "--card", "--popover"],
            Self::Foreground => &["--foreground", "--card-foreground", "--popover-foreground"],
        }
    }
}

/// Lightness used for `--muted` when the background is customized.
pub const MUTED_LIGHTNESS: f64 = 96.1;

/// Converts `hex` to HSL and writes it to the properties of `role`.
///
/// Values are written as `H S% L%`. Customizing the background also sets
/// `--muted` to the background hue and saturation at [`MUTED_LIGHTNESS`].
/// The hex string is not validated; garbage yields `NaN` saturation and
/// lightness.
///
/// # Examples
///
/// ```
/// use huddle_protocol::theme::{apply_custom_color, CustomRole, StyleSheet};
///
/// let mut sheet = StyleSheet::new();
/// apply_custom_color(CustomRole::Primary, "#0ea5e9", &mut sheet);
/// assert_eq!(sheet.get("--primary"), Some("199 89% 48%"));
/// assert_eq!(sheet.get("--ring"), Some("199 89% 48%"));
/// ```
pub fn apply_custom_color(role: CustomRole, hex: &str, sink: &mut impl StyleSink) {
    let hsl = hex_to_hsl(hex);
    let value = hsl.css_value();
    debug!(role = role.display_name(), hex, %value, "applying custom color");

    for property in role.properties() {
        sink.set_property(property, &value);
    }
    if role == CustomRole::Background {
        sink.set_property("--muted", &hsl.css_value_with_lightness(MUTED_LIGHTNESS));
    }
}

/// The colors held by the theme customizer panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCustomizer {
    /// Primary color as `#RRGGBB`.
    pub primary: String,
    /// Background color as `#RRGGBB`.
    pub background: String,
    /// Foreground color as `#RRGGBB`.
    pub foreground: String,
}

impl Default for ThemeCustomizer {
    fn default() -> Self {
        Self {
            primary: "#0ea5e9".to_string(),
            background: "#ffffff".to_string(),
            foreground: "#020817".to_string(),
        }
    }
}

impl ThemeCustomizer {
    /// Returns the color currently held for `role`.
    #[must_use]
    pub fn get(&self, role: CustomRole) -> &str {
        match role {
            CustomRole::Primary => &self.primary,
            CustomRole::Background => &self.background,
            CustomRole::Foreground => &self.foreground,
        }
    }

    /// Replaces the color held for `role`.
    pub fn set(&mut self, role: CustomRole, hex: impl Into<String>) {
        let slot = match role {
            CustomRole::Primary => &mut self.primary,
            CustomRole::Background => &mut self.background,
            CustomRole::Foreground => &mut self.foreground,
        };
        *slot = hex.into();
    }

    /// Applies all three colors to `sink`.
    pub fn apply_all(&self, sink: &mut impl StyleSink) {
        for role in CustomRole::all() {
            apply_custom_color(role, self.get(role), sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every write, including repeats.
    #[derive(Default)]
    struct Recorder(Vec<(String, String)>);

    impl StyleSink for Recorder {
        fn set_property(&mut self, name: &str, value: &str) {
            self.0.push((name.to_string(), value.to_string()));
        }
    }

    #[test]
    fn apply_theme_writes_roles_in_order_with_ring() {
        let mut recorder = Recorder::default();
        apply_theme(ThemeKey::Indigo, &mut recorder);

        let names: Vec<_> = recorder.0.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            [
                "--primary",
                "--ring",
                "--secondary",
                "--background",
                "--foreground",
                "--muted",
                "--border",
            ]
        );
        assert_eq!(recorder.0[1].1, "#4F46E5");
    }

    #[test]
    fn apply_theme_is_idempotent() {
        for key in ThemeKey::all() {
            let once = StyleSheet::themed(key);
            let mut twice = StyleSheet::themed(key);
            apply_theme(key, &mut twice);
            assert_eq!(once, twice, "{key}");
        }
    }

    #[test]
    fn apply_theme_replaces_previous_theme() {
        let mut sheet = StyleSheet::themed(ThemeKey::Barbra);
        apply_theme(ThemeKey::Jade, &mut sheet);
        assert_eq!(sheet, StyleSheet::themed(ThemeKey::Jade));
        assert_eq!(sheet.len(), 7);
    }

    #[test]
    fn sunflower_palette() {
        let sheet = StyleSheet::themed(ThemeKey::Sunflower);
        assert_eq!(sheet.get("--primary"), Some("#FFD700"));
        assert_eq!(sheet.get("--background"), Some("#FFFAF0"));
        assert_eq!(sheet.get("--border"), Some("#2F4F4F"));
        assert_eq!(sheet.color("--primary"), Some(Rgb::new(255, 215, 0)));
    }

    #[test]
    fn theme_key_parsing() {
        assert_eq!("jade".parse::<ThemeKey>(), Ok(ThemeKey::Jade));
        assert_eq!("INDIGO".parse::<ThemeKey>(), Ok(ThemeKey::Indigo));
        assert_eq!("Sun Flower".parse::<ThemeKey>(), Ok(ThemeKey::Sunflower));
        assert_eq!(
            "neon".parse::<ThemeKey>(),
            Err(ProtocolError::UnknownTheme("neon".to_string()))
        );
    }

    #[test]
    fn theme_key_serde_uses_ids() {
        let json = serde_json::to_string(&ThemeKey::Sunflower).expect("serialize");
        assert_eq!(json, r#""sunflower""#);
        let key: ThemeKey = serde_json::from_str(r#""barbra""#).expect("deserialize");
        assert_eq!(key, ThemeKey::Barbra);
    }

    #[test]
    fn theme_key_index_roundtrip() {
        for key in ThemeKey::all() {
            assert_eq!(ThemeKey::from_index(key.index()), Some(key));
        }
        assert_eq!(ThemeKey::from_index(5), None);
    }

    #[test]
    fn custom_background_sets_surfaces_and_muted() {
        let mut sheet = StyleSheet::new();
        apply_custom_color(CustomRole::Background, "#ffffff", &mut sheet);

        for property in ["--background", "--card", "--popover"] {
            assert_eq!(sheet.get(property), Some("0 0% 100%"), "{property}");
        }
        assert_eq!(sheet.get("--muted"), Some("0 0% 96.1%"));
    }

    #[test]
    fn custom_foreground_sets_text_properties() {
        let mut sheet = StyleSheet::new();
        apply_custom_color(CustomRole::Foreground, "#020817", &mut sheet);

        for property in ["--foreground", "--card-foreground", "--popover-foreground"] {
            assert_eq!(sheet.get(property), Some("223 84% 5%"), "{property}");
        }
        assert_eq!(sheet.len(), 3);
    }

    #[test]
    fn custom_color_with_garbage_writes_nan() {
        let mut sheet = StyleSheet::new();
        apply_custom_color(CustomRole::Primary, "oops", &mut sheet);
        assert_eq!(sheet.get("--primary"), Some("0 NaN% NaN%"));
        assert_eq!(sheet.color("--primary"), None);
    }

    #[test]
    fn customizer_defaults_and_apply_all() {
        let customizer = ThemeCustomizer::default();
        assert_eq!(customizer.get(CustomRole::Primary), "#0ea5e9");

        let mut sheet = StyleSheet::themed(ThemeKey::Sunflower);
        customizer.apply_all(&mut sheet);

        assert_eq!(sheet.get("--primary"), Some("199 89% 48%"));
        assert_eq!(sheet.get("--background"), Some("0 0% 100%"));
        assert_eq!(sheet.get("--foreground"), Some("223 84% 5%"));
        // Untouched roles keep the theme value.
        assert_eq!(sheet.get("--secondary"), Some("#2F4F4F"));
    }

    #[test]
    fn customizer_set_replaces_one_role() {
        let mut customizer = ThemeCustomizer::default();
        customizer.set(CustomRole::Foreground, "#000000");
        assert_eq!(customizer.foreground, "#000000");
        assert_eq!(customizer.background, "#ffffff");
    }
}
