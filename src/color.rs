//! Colour conversion.
//!
//! A token is tried, in order, as:
//!
//! 1. a colour name such as `white` or `LightGray` (case-insensitive),
//! 2. a web colour: `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`,
//! 3. a literal hexadecimal integer, `0x0000FF` or `0000FF`, whose low 24 bits are RGB.
//!
//! Bare digits are always hexadecimal, never decimal: `255` is `0x255`, giving
//! `rgb(0, 2, 85)`, not blue. Write `0xFF` or `#0000FF` for blue.
//!
//! Web colours are decoded digit by digit and never as one integer: `#FFF` is
//! shorthand for `#FFFFFF`, not for the number `0xFFF`. The literal path is
//! range-checked as a signed 32-bit integer, so `0xFFFFFFFF` overflows even
//! though `#FFFFFFFF` is a valid web colour.

use crate::{Convert, Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Prefix of a web colour.
const WEB_PREFIX: char = '#';

/// An RGBA colour with 8-bit channels.
///
/// The canonical text form is `#RRGGBBAA`, which converts back to an equal
/// colour.
///
/// # Examples
///
/// ```rust
/// use config_converters::Color;
///
/// let teal: Color = "#008080".parse().unwrap();
/// assert_eq!(teal, Color::rgb(0, 128, 128));
/// assert_eq!(teal.to_string(), "#008080FF");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const PINK: Color = Color::rgb(255, 175, 175);
    pub const ORANGE: Color = Color::rgb(255, 200, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color::rgba(red, green, blue, u8::MAX)
    }

    /// Creates a colour with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Color {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Looks up a colour by name, ignoring case.
    #[must_use]
    pub fn named(name: &str) -> Option<Color> {
        let color = match name.to_lowercase().as_str() {
            "white" => Color::WHITE,
            "lightgray" | "light-gray" => Color::LIGHT_GRAY,
            "gray" => Color::GRAY,
            "darkgray" | "dark-gray" => Color::DARK_GRAY,
            "black" => Color::BLACK,
            "red" => Color::RED,
            "pink" => Color::PINK,
            "orange" => Color::ORANGE,
            "yellow" => Color::YELLOW,
            "green" => Color::GREEN,
            "magenta" => Color::MAGENTA,
            "cyan" => Color::CYAN,
            "blue" => Color::BLUE,
            _ => return None,
        };
        Some(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColorConverter.convert(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        crate::de::color(deserializer)
    }
}

/// Converts colour names, web colours and literal hexadecimal integers to [`Color`].
///
/// A token without `#` or `0x` is still read as hexadecimal, so `"255"` is
/// `rgb(0, 2, 85)`.
///
/// # Examples
///
/// ```rust
/// use config_converters::{Color, ColorConverter, Convert};
///
/// assert_eq!(ColorConverter.convert("#FFF").unwrap(), Color::WHITE);
/// assert_eq!(ColorConverter.convert("#FF0F").unwrap(), Color::YELLOW);
/// assert_eq!(ColorConverter.convert("0x0000FF").unwrap(), Color::BLUE);
/// assert_eq!(ColorConverter.convert("LIGHTGRAY").unwrap(), Color::LIGHT_GRAY);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Decodes a `#` prefixed web colour of 3, 4, 6 or 8 hexadecimal digits.
    ///
    /// Single-digit channels are doubled (`F` becomes `FF`); a missing alpha
    /// channel means opaque.
    pub fn parse_web_color(&self, value: &str) -> Result<Color> {
        let digits: Vec<char> = match value.strip_prefix(WEB_PREFIX) {
            Some(rest) => rest.chars().collect(),
            None => return Err(Error::format_mismatch("a web colour starting with '#'")),
        };

        let nibble = |c: char| -> Result<u8> {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| Error::numeric_overflow(value, &format!("'{}' is not a hexadecimal digit", c)))
        };
        let short = |c: char| -> Result<u8> { Ok(nibble(c)? * 17) };
        let byte = |hi: char, lo: char| -> Result<u8> { Ok((nibble(hi)? << 4) | nibble(lo)?) };

        match digits.as_slice() {
            [r, g, b] => Ok(Color::rgb(short(*r)?, short(*g)?, short(*b)?)),
            [r, g, b, a] => Ok(Color::rgba(short(*r)?, short(*g)?, short(*b)?, short(*a)?)),
            [r1, r2, g1, g2, b1, b2] => Ok(Color::rgb(
                byte(*r1, *r2)?,
                byte(*g1, *g2)?,
                byte(*b1, *b2)?,
            )),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Color::rgba(
                byte(*r1, *r2)?,
                byte(*g1, *g2)?,
                byte(*b1, *b2)?,
                byte(*a1, *a2)?,
            )),
            _ => Err(Error::format_mismatch_with(
                "#RGB, #RGBA, #RRGGBB or #RRGGBBAA",
                "for a literal hexadecimal value use the 0x prefix instead of #",
            )),
        }
    }

    /// Decodes a literal hexadecimal integer, taking RGB from its low 24 bits.
    fn parse_literal(&self, value: &str) -> Result<Color> {
        let digits = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .unwrap_or(value);

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::numeric_overflow(value, "not a hexadecimal integer"));
        }

        let rgb = i32::from_str_radix(digits, 16).map_err(|e| Error::from_int_error(value, &e))?;
        let [_, red, green, blue] = rgb.to_be_bytes();
        Ok(Color::rgb(red, green, blue))
    }
}

impl Convert for ColorConverter {
    type Output = Color;

    fn convert(&self, value: &str) -> Result<Color> {
        if value.is_empty() {
            return Err(Error::EmptyInput);
        }

        if let Some(color) = Color::named(value) {
            trace!(name = value, "matched colour name");
            return Ok(color);
        }

        if value.starts_with(WEB_PREFIX) {
            return self.parse_web_color(value);
        }

        self.parse_literal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_web_colors() {
        assert_eq!(ColorConverter.convert("#000000").unwrap(), Color::BLACK);
        assert_eq!(ColorConverter.convert("#C0C0C0FF").unwrap(), Color::LIGHT_GRAY);
        assert_eq!(ColorConverter.convert("#FFF").unwrap(), Color::rgba(255, 255, 255, 255));
        assert_eq!(ColorConverter.convert("#FF0F").unwrap(), Color::rgba(255, 255, 0, 255));
        assert_eq!(ColorConverter.convert("#12345678").unwrap(), Color::rgba(0x12, 0x34, 0x56, 0x78));
        assert_eq!(ColorConverter.convert("#abc8").unwrap(), Color::rgba(0xAA, 0xBB, 0xCC, 0x88));
    }

    #[test]
    fn test_literal_hex() {
        assert_eq!(ColorConverter.convert("0x0000FF").unwrap(), Color::BLUE);
        assert_eq!(ColorConverter.convert("FF0000").unwrap(), Color::RED);
        // Bare digits are hexadecimal, not decimal.
        assert_eq!(ColorConverter.convert("255").unwrap(), Color::rgb(0, 0x02, 0x55));
        // Only the low 24 bits carry colour.
        assert_eq!(ColorConverter.convert("0x7F00FF00").unwrap(), Color::GREEN);
    }

    #[test]
    fn test_literal_hex_keeps_integer_range() {
        assert_eq!(
            ColorConverter.convert("0xFFFFFFFF").unwrap_err().kind(),
            ErrorKind::NumericOverflow
        );
        assert_eq!(
            ColorConverter.convert("#FFFFFFFF").unwrap(),
            Color::rgba(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(ColorConverter.convert("white").unwrap(), Color::WHITE);
        assert_eq!(ColorConverter.convert("WHITE").unwrap(), Color::WHITE);
        assert_eq!(ColorConverter.convert("LIGHTGRAY").unwrap(), Color::LIGHT_GRAY);
        assert_eq!(ColorConverter.convert("Dark-Gray").unwrap(), Color::DARK_GRAY);

        for name in [
            "white", "lightgray", "gray", "darkgray", "black", "red", "pink", "orange", "yellow",
            "green", "magenta", "cyan", "blue",
        ] {
            assert!(ColorConverter.convert(name).is_ok(), "name {}", name);
        }
    }

    #[test]
    fn test_invalid_hex_digits() {
        for input in ["#FFZ", "#FFFY", "#FFFFFX", "#FFFFFFFW", "0xGG0000", "purple"] {
            assert_eq!(
                ColorConverter.convert(input).unwrap_err().kind(),
                ErrorKind::NumericOverflow,
                "input {}",
                input
            );
        }
    }

    #[test]
    fn test_invalid_web_lengths() {
        for input in ["#", "#F", "#FF", "#FFFFF", "#FFFFFFF", "#FFFFFFFFF"] {
            assert_eq!(
                ColorConverter.convert(input).unwrap_err().kind(),
                ErrorKind::FormatMismatch,
                "input {}",
                input
            );
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(ColorConverter.convert("").unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn test_display_round_trip() {
        let color = Color::rgba(1, 2, 3, 4);
        assert_eq!(color.to_string(), "#01020304");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }
}
