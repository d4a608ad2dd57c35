//! Color conversions for theme customization.
//!
//! Custom colors arrive as `#RRGGBB` hex strings and are written to the style
//! sheet as `H S% L%` triples. The terminal needs RGB again, so the reverse
//! conversion lives here too.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A hue/saturation/lightness triple.
///
/// Hue is in degrees, saturation and lightness in percent. Values produced by
/// [`hex_to_hsl`] are rounded to whole numbers, with NaN saturation and
/// lightness for unparseable input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, 0-360.
    pub h: f64,
    /// Saturation in percent, 0-100.
    pub s: f64,
    /// Lightness in percent, 0-100.
    pub l: f64,
}

impl Hsl {
    /// Creates a triple from its components.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Formats the triple as a style property value, e.g. `199 89% 48%`.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::color::Hsl;
    ///
    /// assert_eq!(Hsl::new(199.0, 89.0, 48.0).css_value(), "199 89% 48%");
    /// ```
    #[must_use]
    pub fn css_value(&self) -> String {
        format!("{} {}% {}%", self.h, self.s, self.l)
    }

    /// Formats the triple with the lightness replaced by `lightness`.
    #[must_use]
    pub fn css_value_with_lightness(&self, lightness: f64) -> String {
        format!("{} {}% {}%", self.h, self.s, lightness)
    }

    /// Converts back to RGB.
    ///
    /// Returns `None` if any component is not finite.
    #[must_use]
    pub fn to_rgb(&self) -> Option<Rgb> {
        if !(self.h.is_finite() && self.s.is_finite() && self.l.is_finite()) {
            return None;
        }

        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);
        let h = self.h.rem_euclid(360.0) / 360.0;

        if s == 0.0 {
            let v = to_byte(l);
            return Some(Rgb::new(v, v, v));
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Some(Rgb::new(
            to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_byte(hue_to_channel(p, q, h)),
            to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
        ))
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Reads one two-character channel the lenient way, normalized to 0..1.
///
/// Leading whitespace, a sign and a `0x` prefix are skipped, then the longest
/// run of hex digits is parsed, so `"1g"` reads as `1`. NaN when no digit is
/// left.
fn channel(hex: &str, start: usize) -> f64 {
    let pair: String = hex.chars().skip(start).take(2).collect();
    let rest = pair.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let rest = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);

    let digits_end = rest
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(rest.len());
    match u8::from_str_radix(&rest[..digits_end], 16) {
        Ok(byte) if negative => -f64::from(byte) / 255.0,
        Ok(byte) => f64::from(byte) / 255.0,
        Err(_) => f64::NAN,
    }
}

/// Converts a `#RRGGBB` (or `RRGGBB`) string to rounded HSL.
///
/// Input is not validated. Each channel keeps whatever hex prefix it starts
/// with (`#1g2h3i` reads as `#010203`). If a channel has no digits at all,
/// saturation and lightness come out NaN and the hue stays 0.
///
/// # Examples
///
/// ```
/// use huddle_protocol::color::hex_to_hsl;
///
/// let hsl = hex_to_hsl("#0ea5e9");
/// assert_eq!((hsl.h, hsl.s, hsl.l), (199.0, 89.0, 48.0));
///
/// let hsl = hex_to_hsl("#zz0000");
/// assert_eq!(hsl.h, 0.0);
/// assert!(hsl.s.is_nan() && hsl.l.is_nan());
/// ```
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let hex = hex.replacen('#', "", 1);

    let r = channel(&hex, 0);
    let g = channel(&hex, 2);
    let b = channel(&hex, 4);

    if r.is_nan() || g.is_nan() || b.is_nan() {
        return Hsl::new(0.0, f64::NAN, f64::NAN);
    }

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let mut h = 0.0;
    let mut s = 0.0;

    if max != min {
        let d = max - min;
        s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    Hsl::new((h * 360.0).round(), (s * 100.0).round(), (l * 100.0).round())
}

/// Parses a strict `#RRGGBB` hex color.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidHexColor`] if the input is not a `#`
/// followed by exactly six hex digits.
///
/// # Examples
///
/// ```
/// use huddle_protocol::color::{parse_hex, Rgb};
///
/// assert_eq!(parse_hex("#FFD700").unwrap(), Rgb::new(255, 215, 0));
/// assert!(parse_hex("FFD700").is_err());
/// ```
pub fn parse_hex(input: &str) -> Result<Rgb> {
    let invalid = || ProtocolError::InvalidHexColor(input.to_string());
    let digits = input.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };
    Ok(Rgb::new(byte(0..2)?, byte(2..4)?, byte(4..6)?))
}

/// Parses an `H S% L%` style property value.
fn parse_hsl_value(value: &str) -> Option<Hsl> {
    let mut parts = value.split_whitespace();
    let h = parts.next()?.parse().ok()?;
    let s = parts.next()?.strip_suffix('%')?.parse().ok()?;
    let l = parts.next()?.strip_suffix('%')?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Hsl::new(h, s, l))
}

/// Resolves a style property value to RGB.
///
/// Accepts the two forms the style sheet holds: `#RRGGBB` palette colors and
/// `H S% L%` customizer values.
///
/// # Examples
///
/// ```
/// use huddle_protocol::color::{resolve_color, Rgb};
///
/// assert_eq!(resolve_color("#00A86B"), Some(Rgb::new(0, 168, 107)));
/// assert_eq!(resolve_color("0 0% 100%"), Some(Rgb::new(255, 255, 255)));
/// assert_eq!(resolve_color("NaN NaN% 50%"), None);
/// ```
#[must_use]
pub fn resolve_color(value: &str) -> Option<Rgb> {
    let value = value.trim();
    if value.starts_with('#') {
        parse_hex(value).ok()
    } else {
        parse_hsl_value(value)?.to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_hsl_sky_blue() {
        assert_eq!(hex_to_hsl("#0ea5e9"), Hsl::new(199.0, 89.0, 48.0));
    }

    #[test]
    fn hex_to_hsl_accepts_missing_hash() {
        assert_eq!(hex_to_hsl("0ea5e9"), hex_to_hsl("#0ea5e9"));
    }

    #[test]
    fn hex_to_hsl_greys_have_no_hue() {
        assert_eq!(hex_to_hsl("#ffffff"), Hsl::new(0.0, 0.0, 100.0));
        assert_eq!(hex_to_hsl("#000000"), Hsl::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn hex_to_hsl_red_sector_wraps() {
        // Blue above green in the red sector exercises the +6 wraparound.
        assert_eq!(hex_to_hsl("#ff0080"), Hsl::new(330.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("#ff0000"), Hsl::new(0.0, 100.0, 50.0));
    }

    #[test]
    fn hex_to_hsl_green_and_blue_sectors() {
        assert_eq!(hex_to_hsl("#00ff00"), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("#0000ff"), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn hex_to_hsl_dark_foreground() {
        assert_eq!(hex_to_hsl("#020817"), Hsl::new(223.0, 84.0, 5.0));
    }

    #[test]
    fn hex_to_hsl_propagates_garbage() {
        let hsl = hex_to_hsl("#12");
        assert_eq!(hsl.h, 0.0);
        assert!(hsl.s.is_nan());
        assert!(hsl.l.is_nan());
        assert_eq!(hsl.css_value(), "0 NaN% NaN%");
        assert_eq!(hsl.to_rgb(), None);
    }

    #[test]
    fn hex_to_hsl_reads_hex_prefix_of_each_channel() {
        assert_eq!(hex_to_hsl("#1g2h3i"), Hsl::new(210.0, 50.0, 1.0));
        assert_eq!(hex_to_hsl("#1g2h3i"), hex_to_hsl("#010203"));
    }

    #[test]
    fn hex_to_hsl_without_digits_keeps_zero_hue() {
        let hsl = hex_to_hsl("#zz0000");
        assert_eq!(hsl.h, 0.0);
        assert!(hsl.s.is_nan());
        assert!(hsl.l.is_nan());
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        for bad in ["", "#", "#12345", "#1234567", "#12345g", "123456"] {
            assert_eq!(
                parse_hex(bad),
                Err(ProtocolError::InvalidHexColor(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rgb_display_is_uppercase_hex() {
        assert_eq!(Rgb::new(255, 215, 0).to_string(), "#FFD700");
    }

    #[test]
    fn hsl_to_rgb_roundtrips_primaries() {
        for hex in ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000"] {
            let rgb = parse_hex(hex).expect("valid");
            let back = hex_to_hsl(hex).to_rgb().expect("finite");
            assert_eq!(back, rgb, "{hex}");
        }
    }

    #[test]
    fn hsl_to_rgb_is_close_for_rounded_values() {
        let rgb = Hsl::new(199.0, 89.0, 48.0).to_rgb().expect("finite");
        // #0ea5e9 is (14, 165, 233); rounding to whole HSL loses a little.
        assert!(rgb.r.abs_diff(14) <= 4);
        assert!(rgb.g.abs_diff(165) <= 4);
        assert!(rgb.b.abs_diff(233) <= 4);
    }

    #[test]
    fn resolve_color_handles_muted_lightness() {
        let rgb = resolve_color("0 0% 96.1%").expect("valid");
        assert_eq!(rgb, Rgb::new(245, 245, 245));
    }

    #[test]
    fn resolve_color_rejects_unknown_forms() {
        assert_eq!(resolve_color("blue"), None);
        assert_eq!(resolve_color("1 2 3"), None);
        assert_eq!(resolve_color("1 2% 3% 4"), None);
    }
}
