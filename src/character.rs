//! Character conversion.
//!
//! A one-character token is taken literally. Longer tokens must be a `0x`
//! prefixed hexadecimal code point, so `"1"` is the digit one while `"0x31"`
//! is also the digit one.

use crate::{Convert, Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix marking a token as a hexadecimal code point.
const HEX_PREFIX: &str = "0x";

static HEX_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^0x[0-9a-f]+$").unwrap());

/// Converts a token to a single [`char`].
///
/// # Examples
///
/// ```rust
/// use config_converters::{CharConverter, Convert};
///
/// assert_eq!(CharConverter.convert("a").unwrap(), 'a');
/// assert_eq!(CharConverter.convert("0x41").unwrap(), 'A');
/// assert!(CharConverter.convert("AA").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CharConverter;

impl Convert for CharConverter {
    type Output = char;

    fn convert(&self, value: &str) -> Result<char> {
        let mut chars = value.chars();
        let first = chars.next().ok_or(Error::EmptyInput)?;

        if chars.next().is_none() {
            return Ok(first);
        }

        if !HEX_PATTERN.is_match(value) {
            return Err(Error::format_mismatch(
                "a single character or a 0x prefixed hexadecimal code point",
            ));
        }

        let digits = &value[HEX_PREFIX.len()..];
        let code = u32::from_str_radix(digits, 16).map_err(|e| Error::from_int_error(value, &e))?;

        if code > char::MAX as u32 {
            return Err(Error::numeric_overflow(value, "beyond the Unicode code point range"));
        }

        char::from_u32(code).ok_or_else(|| {
            Error::format_mismatch_with("a Unicode scalar value", "surrogate code points are not characters")
        })
    }
}
