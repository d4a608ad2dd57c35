//! Terminal colors resolved from the active style sheet.
//!
//! Every widget styles itself from a [`UiColors`] value, so switching the
//! theme or confirming a custom color only has to rewrite the style sheet.

use huddle_protocol::color::parse_hex;
use huddle_protocol::{ColorRole, Rgb, StyleSheet, ThemeKey};
use ratatui::style::{Color, Modifier, Style};

/// Converts an RGB value to a terminal color.
#[must_use]
pub const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Returns the color used for `role` when the style sheet has none.
#[must_use]
pub const fn fallback_color(role: ColorRole) -> Color {
    match role {
        ColorRole::Primary => Color::Cyan,
        ColorRole::Secondary => Color::Blue,
        ColorRole::Background | ColorRole::Foreground => Color::Reset,
        ColorRole::Muted => Color::DarkGray,
        ColorRole::Border => Color::Gray,
    }
}

/// Returns the primary color of a theme, for menu swatches.
#[must_use]
pub fn swatch_color(key: ThemeKey) -> Color {
    parse_hex(key.palette().primary).map_or(fallback_color(ColorRole::Primary), to_color)
}

/// The six theme colors as terminal colors.
///
/// # Examples
///
/// ```
/// use huddle_protocol::{StyleSheet, ThemeKey};
/// use huddle_tui::palette::UiColors;
/// use ratatui::style::Color;
///
/// let colors = UiColors::from_styles(&StyleSheet::themed(ThemeKey::Jade));
/// assert_eq!(colors.primary, Color::Rgb(0x00, 0xA8, 0x6B));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiColors {
    /// Accent color.
    pub primary: Color,
    /// Secondary accent.
    pub secondary: Color,
    /// Page background.
    pub background: Color,
    /// Body text.
    pub foreground: Color,
    /// Subdued surfaces.
    pub muted: Color,
    /// Borders.
    pub border: Color,
}

impl Default for UiColors {
    fn default() -> Self {
        Self::from_styles(&StyleSheet::new())
    }
}

impl UiColors {
    /// Resolves every role from `styles`, falling back per role.
    #[must_use]
    pub fn from_styles(styles: &StyleSheet) -> Self {
        let resolve = |role: ColorRole| {
            styles
                .color(&role.property())
                .map_or(fallback_color(role), to_color)
        };
        Self {
            primary: resolve(ColorRole::Primary),
            secondary: resolve(ColorRole::Secondary),
            background: resolve(ColorRole::Background),
            foreground: resolve(ColorRole::Foreground),
            muted: resolve(ColorRole::Muted),
            border: resolve(ColorRole::Border),
        }
    }

    /// Base style of the page: foreground on background.
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Style for focused borders and highlights.
    #[must_use]
    pub fn accent(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Style for bold headings.
    #[must_use]
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for hints and placeholders.
    #[must_use]
    pub fn hint(&self) -> Style {
        Style::default()
            .fg(self.border)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for code spans: foreground on the muted surface.
    #[must_use]
    pub fn code(&self) -> Style {
        Style::default().fg(self.secondary).bg(self.muted)
    }
}
