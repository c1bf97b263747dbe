//! Instant conversion: an extended ISO-8601 timestamp (`2007-12-03T10:15:30Z`),
//! or milliseconds since the Unix epoch.

use crate::fallback::structured;
use crate::{Convert, Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static INSTANT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]{1,9})?(?:Z|[+-][0-9]{2}:[0-9]{2})$")
        .unwrap()
});

const EXPECTED: &str = "an ISO-8601 instant such as 2007-12-03T10:15:30Z, or epoch milliseconds";

/// Parses an extended ISO-8601 timestamp and normalises it to UTC.
///
/// The date and time are separated by an upper-case `T` and the offset is
/// either `Z` or `+hh:mm`/`-hh:mm`.
pub fn parse_iso(value: &str) -> Result<DateTime<Utc>> {
    if !INSTANT_PATTERN.is_match(value) {
        return Err(Error::format_mismatch("an ISO-8601 instant YYYY-MM-DDTHH:MM:SS[.fff]Z"));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| Error::format_mismatch_with("an ISO-8601 instant", e))
}

/// Formats an instant as `YYYY-MM-DDTHH:MM:SS[.fff]Z`.
#[must_use]
pub fn to_iso_string(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Converts timestamps or epoch milliseconds to a UTC [`DateTime`].
///
/// # Examples
///
/// ```rust
/// use config_converters::{Convert, InstantConverter};
///
/// let from_text = InstantConverter.convert("2007-12-03T10:15:30.00Z").unwrap();
/// let from_millis = InstantConverter.convert("1196676930000").unwrap();
/// assert_eq!(from_text, from_millis);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantConverter;

impl Convert for InstantConverter {
    type Output = DateTime<Utc>;

    fn convert(&self, value: &str) -> Result<DateTime<Utc>> {
        structured(value, EXPECTED, parse_iso).or_numeric(|millis: i64| {
            DateTime::<Utc>::from_timestamp_millis(millis)
                .ok_or_else(|| Error::numeric_overflow(value, "outside the supported date range"))
        })
    }
}
