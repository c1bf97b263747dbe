//! Error types for configuration value conversion.
//!
//! Every converter classifies every failure into exactly one [`Error`] variant,
//! so callers can tell "wrong shape" from "right shape, bad number" from
//! "unknown symbol" without inspecting message text.
//!
//! ## Error Categories
//!
//! - **Missing input**: [`Error::NullInput`] and [`Error::EmptyInput`]
//! - **Structural errors**: [`Error::FormatMismatch`], the token does not have the expected shape
//! - **Numeric errors**: [`Error::NumericOverflow`], a numeric component is out of range
//!   or not a number in the expected radix
//! - **Symbol errors**: [`Error::TypeMismatch`] and [`Error::UnresolvableSymbol`],
//!   raised by the enum resolver and by host name lookups
//!
//! ## Examples
//!
//! ```rust
//! use config_converters::{Convert, DimensionConverter, ErrorKind};
//!
//! let err = DimensionConverter.convert("-512").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::FormatMismatch);
//!
//! let err = DimensionConverter.convert("3000000000").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NumericOverflow);
//! ```

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use thiserror::Error;

/// Represents every way a conversion can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No value was supplied at all.
    #[error("Value can't be null")]
    NullInput,

    /// The value was supplied but is the empty string.
    #[error("Value can't be empty")]
    EmptyInput,

    /// The value does not have the expected textual shape.
    #[error("Format mismatch: expected {expected}{detail}")]
    FormatMismatch { expected: String, detail: String },

    /// A numeric component is out of range, or is not a number in the expected radix.
    #[error("Numeric value '{value}' can't be represented{detail}")]
    NumericOverflow { value: String, detail: String },

    /// A symbol resolved to a type other than the one required.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A symbol (type, member or host name) could not be resolved.
    #[error("Unable to resolve '{symbol}': {reason}")]
    UnresolvableSymbol { symbol: String, reason: String },
}

/// Discriminant of an [`Error`], handy for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullInput,
    EmptyInput,
    FormatMismatch,
    NumericOverflow,
    TypeMismatch,
    UnresolvableSymbol,
}

impl Error {
    /// Creates a format mismatch describing the expected shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_converters::Error;
    ///
    /// let err = Error::format_mismatch("{width}x{height}");
    /// assert!(err.to_string().contains("{width}x{height}"));
    /// ```
    pub fn format_mismatch(expected: &str) -> Self {
        Error::FormatMismatch {
            expected: expected.to_string(),
            detail: String::new(),
        }
    }

    /// Creates a format mismatch carrying the underlying cause.
    pub fn format_mismatch_with<D: fmt::Display>(expected: &str, cause: D) -> Self {
        Error::FormatMismatch {
            expected: expected.to_string(),
            detail: format!(" ({})", cause),
        }
    }

    /// Creates a numeric error for a value that can't be represented.
    pub fn numeric_overflow(value: &str, reason: &str) -> Self {
        Error::NumericOverflow {
            value: value.to_string(),
            detail: if reason.is_empty() {
                String::new()
            } else {
                format!(": {}", reason)
            },
        }
    }

    /// Creates a type mismatch between a required and a resolved type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_converters::Error;
    ///
    /// let err = Error::type_mismatch("java.util.concurrent.TimeUnit", "java.time.DayOfWeek");
    /// assert!(err.to_string().contains("expected java.util.concurrent.TimeUnit"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an error for a symbol that could not be resolved.
    pub fn unresolvable<D: fmt::Display>(symbol: &str, reason: D) -> Self {
        Error::UnresolvableSymbol {
            symbol: symbol.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Maps an integer parse failure to the matching error class.
    ///
    /// Overflow and malformed digits both belong to the numeric class; an empty
    /// digit string is a structural problem.
    pub(crate) fn from_int_error(value: &str, err: &ParseIntError) -> Self {
        match err.kind() {
            IntErrorKind::Empty => Error::format_mismatch_with("digits", err),
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Error::numeric_overflow(value, "out of range")
            }
            _ => Error::numeric_overflow(value, &err.to_string()),
        }
    }

    /// Returns the variant of this error without its payload.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NullInput => ErrorKind::NullInput,
            Error::EmptyInput => ErrorKind::EmptyInput,
            Error::FormatMismatch { .. } => ErrorKind::FormatMismatch,
            Error::NumericOverflow { .. } => ErrorKind::NumericOverflow,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::UnresolvableSymbol { .. } => ErrorKind::UnresolvableSymbol,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_error_classification() {
        let overflow = "99999999999".parse::<i32>().unwrap_err();
        assert_eq!(
            Error::from_int_error("99999999999", &overflow).kind(),
            ErrorKind::NumericOverflow
        );

        let invalid = "12a".parse::<i32>().unwrap_err();
        assert_eq!(
            Error::from_int_error("12a", &invalid).kind(),
            ErrorKind::NumericOverflow
        );

        let empty = "".parse::<i32>().unwrap_err();
        assert_eq!(
            Error::from_int_error("", &empty).kind(),
            ErrorKind::FormatMismatch
        );
    }

    #[test]
    fn test_display_messages() {
        let err = Error::format_mismatch_with("a duration", "bad designator");
        assert_eq!(
            err.to_string(),
            "Format mismatch: expected a duration (bad designator)"
        );

        let err = Error::numeric_overflow("3000000000", "out of range");
        assert_eq!(
            err.to_string(),
            "Numeric value '3000000000' can't be represented: out of range"
        );
    }
}
