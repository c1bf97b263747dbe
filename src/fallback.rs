//! Structured-grammar-then-integer fallback shared by the temporal converters.
//!
//! Duration, period and instant tokens are first read with their rich ISO
//! grammar. If that fails the whole token is read again as a plain integer with
//! an implied unit. The two interpretations are never mixed: a token is either
//! entirely structured or entirely numeric.
//!
//! ```rust
//! use config_converters::fallback::structured;
//! use config_converters::Error;
//!
//! let seconds: Result<i64, Error> = structured("42", "a count", |_| {
//!     Err(Error::format_mismatch("never structured"))
//! })
//! .or_numeric(|n: i64| Ok(n * 60));
//! assert_eq!(seconds.unwrap(), 2520);
//! ```

use crate::{Error, Result};
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Outcome of the structured stage, waiting for its numeric fallback.
#[must_use = "a structured attempt does nothing until `or_numeric` is called"]
pub struct Structured<'a, T> {
    token: &'a str,
    expected: &'static str,
    outcome: Result<T>,
}

/// Runs the structured stage of a fallback chain.
///
/// `expected` names the accepted shapes and is used in the error reported when
/// both stages fail.
pub fn structured<'a, T, F>(token: &'a str, expected: &'static str, parse: F) -> Structured<'a, T>
where
    F: FnOnce(&'a str) -> Result<T>,
{
    let outcome = parse(token);
    Structured {
        token,
        expected,
        outcome,
    }
}

impl<'a, T> Structured<'a, T> {
    /// Falls back to reading the whole token as an integer of type `N`.
    ///
    /// `build` turns the integer into the final value and may itself fail, for
    /// example when the amount is out of range for the unit.
    pub fn or_numeric<N, F>(self, build: F) -> Result<T>
    where
        N: FromStr,
        N::Err: Display,
        F: FnOnce(N) -> Result<T>,
    {
        let structured_err = match self.outcome {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        debug!(
            token = self.token,
            error = %structured_err,
            "structured form rejected, reading token as an integer"
        );

        let numeric = self
            .token
            .parse::<N>()
            .map_err(|e| e.to_string())
            .and_then(|n| build(n).map_err(|e| e.to_string()));

        numeric.map_err(|numeric_err| {
            Error::format_mismatch_with(
                self.expected,
                format!(
                    "not a structured value: {}; not an integer: {}",
                    structured_err, numeric_err
                ),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_structured_success_skips_fallback() {
        let result: Result<i32> = structured("7", "a number", |_| Ok(1)).or_numeric(|n: i32| Ok(n));
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_both_stages_fail() {
        let err = structured("1,000", "a number", |_| -> Result<i32> {
            Err(Error::format_mismatch("structure"))
        })
        .or_numeric(|n: i32| Ok(n))
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FormatMismatch);
        let message = err.to_string();
        assert!(message.contains("not a structured value"));
        assert!(message.contains("not an integer"));
    }

    #[test]
    fn test_build_failure_is_reported() {
        let err = structured("5", "a number", |_| -> Result<i32> {
            Err(Error::format_mismatch("structure"))
        })
        .or_numeric(|_: i32| Err(Error::numeric_overflow("5", "too large for unit")))
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FormatMismatch);
        assert!(err.to_string().contains("too large for unit"));
    }
}
