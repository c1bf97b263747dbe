//! Regular expression conversion.

use crate::{Convert, Error, Result};
use regex::Regex;

/// Compiles a token into a [`Regex`].
///
/// The empty pattern is valid and matches everywhere.
///
/// # Examples
///
/// ```rust
/// use config_converters::{Convert, PatternConverter};
///
/// let pattern = PatternConverter.convert("(?i)Ow.+O").unwrap();
/// assert_eq!(pattern.as_str(), "(?i)Ow.+O");
/// assert!(pattern.is_match("owo owo"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PatternConverter;

impl Convert for PatternConverter {
    type Output = Regex;

    fn convert(&self, value: &str) -> Result<Regex> {
        Regex::new(value).map_err(|e| Error::format_mismatch_with("a regular expression", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_pattern_source_is_kept() {
        assert_eq!(PatternConverter.convert("(?i)Ow.+O").unwrap().as_str(), "(?i)Ow.+O");
        assert!(PatternConverter.convert("").unwrap().is_match("anything"));
    }

    #[test]
    fn test_malformed_pattern() {
        for input in ["(unclosed", "[z-a]", "a{2,1}"] {
            assert_eq!(
                PatternConverter.convert(input).unwrap_err().kind(),
                ErrorKind::FormatMismatch,
                "input {}",
                input
            );
        }
    }
}
