//! Dimension conversion: `{size}` for a square or `{width}x{height}`.

use crate::{Convert, Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static DIMENSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<width>[0-9]+)(?:x(?P<height>[0-9]+))?$").unwrap());

/// Largest accepted component, matching signed 32-bit geometry APIs.
pub const MAX_COMPONENT: u32 = i32::MAX as u32;

/// A width and height, both in `0..=MAX_COMPONENT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Dimension { width, height }
    }

    #[must_use]
    pub const fn square(size: u32) -> Self {
        Dimension::new(size, size)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DimensionConverter.convert(s)
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        crate::de::dimension(deserializer)
    }
}

/// Converts `512` or `1920x1080` to a [`Dimension`].
///
/// # Examples
///
/// ```rust
/// use config_converters::{Convert, Dimension, DimensionConverter};
///
/// assert_eq!(DimensionConverter.convert("512").unwrap(), Dimension::square(512));
/// assert_eq!(DimensionConverter.convert("1920x1080").unwrap(), Dimension::new(1920, 1080));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DimensionConverter;

fn component(digits: &str) -> Result<u32> {
    digits
        .parse::<i32>()
        .map(|n| n as u32)
        .map_err(|e| Error::from_int_error(digits, &e))
}

impl Convert for DimensionConverter {
    type Output = Dimension;

    fn convert(&self, value: &str) -> Result<Dimension> {
        if value.is_empty() {
            return Err(Error::EmptyInput);
        }

        let captures = DIMENSION_PATTERN
            .captures(value)
            .ok_or_else(|| Error::format_mismatch("{width/height} or {width}x{height}"))?;

        let width = component(&captures["width"])?;
        let height = match captures.name("height") {
            Some(height) => component(height.as_str())?,
            None => width,
        };

        Ok(Dimension::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_width_and_height() {
        assert_eq!(
            DimensionConverter.convert("1920x1080").unwrap(),
            Dimension::new(1920, 1080)
        );
    }

    #[test]
    fn test_square() {
        assert_eq!(DimensionConverter.convert("512").unwrap(), Dimension::square(512));
        assert_eq!(DimensionConverter.convert("0").unwrap(), Dimension::square(0));
    }

    #[test]
    fn test_invalid_shapes() {
        for input in ["Hello, world!", "<3", "512n512", "0xFF", "-512x512", "-512", "512X512", "512x", "x512", "٣"] {
            assert_eq!(
                DimensionConverter.convert(input).unwrap_err().kind(),
                ErrorKind::FormatMismatch,
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(DimensionConverter.convert("").unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn test_overflow() {
        for input in ["3000000000", "100x3000000000", "3000000000x100", "3000000000x3000000000"] {
            assert_eq!(
                DimensionConverter.convert(input).unwrap_err().kind(),
                ErrorKind::NumericOverflow,
                "input {}",
                input
            );
        }
        assert_eq!(
            DimensionConverter.convert("2147483647").unwrap(),
            Dimension::square(MAX_COMPONENT)
        );
    }
}
