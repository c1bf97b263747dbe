//! Duration conversion.
//!
//! Tokens are read as ISO-8601 durations (`PnDTnHnMn.nS`) first. A token that
//! is not a duration string is read as a signed integer amount of the
//! converter's [`TimeUnit`], milliseconds unless configured otherwise.

use crate::fallback::structured;
use crate::options::TimeUnit;
use crate::{Convert, Error, Result};
use chrono::Duration;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<sign>[-+]?)P(?:(?P<days>[-+]?[0-9]+)D)?(?P<time>T(?:(?P<hours>[-+]?[0-9]+)H)?(?:(?P<minutes>[-+]?[0-9]+)M)?(?:(?P<seconds>[-+]?[0-9]+)(?:[.,](?P<fraction>[0-9]{0,9}))?S)?)?$",
    )
    .unwrap()
});

const EXPECTED: &str = "an ISO-8601 duration such as PT15M, or an integer amount";

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Parses an ISO-8601 duration string.
///
/// Each component may carry its own sign and a leading sign negates the whole
/// duration. Seconds may have up to nine fractional digits after `.` or `,`.
///
/// # Examples
///
/// ```rust
/// use chrono::Duration;
/// use config_converters::duration::parse_iso;
///
/// assert_eq!(parse_iso("PT1.5S").unwrap(), Duration::milliseconds(1500));
/// assert_eq!(parse_iso("-PT1H-5M").unwrap(), Duration::minutes(-55));
/// ```
pub fn parse_iso(value: &str) -> Result<Duration> {
    let mismatch = || Error::format_mismatch("an ISO-8601 duration PnDTnHnMn.nS");
    let captures = DURATION_PATTERN.captures(value).ok_or_else(mismatch)?;

    let has_component = ["days", "hours", "minutes", "seconds"]
        .iter()
        .any(|name| captures.name(name).is_some());
    let bare_time = captures.name("time").map_or(false, |t| t.as_str().len() == 1);
    if !has_component || bare_time {
        return Err(mismatch());
    }

    let overflow = || Error::format_mismatch_with("an ISO-8601 duration", "value out of range");

    let mut seconds: i64 = 0;
    for (name, scale) in [
        ("days", SECONDS_PER_DAY),
        ("hours", SECONDS_PER_HOUR),
        ("minutes", SECONDS_PER_MINUTE),
        ("seconds", 1),
    ] {
        let amount = component(&captures, name)?;
        seconds = amount
            .checked_mul(scale)
            .and_then(|s| seconds.checked_add(s))
            .ok_or_else(overflow)?;
    }

    let nanos = fraction_nanos(&captures);
    let duration = Duration::try_seconds(seconds)
        .and_then(|d| d.checked_add(&Duration::nanoseconds(nanos)))
        .ok_or_else(overflow)?;

    if &captures["sign"] == "-" {
        Ok(-duration)
    } else {
        Ok(duration)
    }
}

fn component(captures: &Captures<'_>, name: &str) -> Result<i64> {
    match captures.name(name) {
        Some(m) => m
            .as_str()
            .parse::<i64>()
            .map_err(|e| Error::format_mismatch_with("an ISO-8601 duration", e)),
        None => Ok(0),
    }
}

/// Fractional seconds in nanoseconds, carrying the sign of the seconds field.
fn fraction_nanos(captures: &Captures<'_>) -> i64 {
    let digits = match captures.name("fraction") {
        Some(m) if !m.as_str().is_empty() => m.as_str(),
        _ => return 0,
    };
    let padded = format!("{:0<9}", digits);
    let nanos = padded.parse::<i64>().unwrap_or(0);
    let negative = captures
        .name("seconds")
        .map_or(false, |s| s.as_str().starts_with('-'));
    if negative {
        -nanos
    } else {
        nanos
    }
}

/// Formats a duration as `PTnHnMn.nS`, the form [`parse_iso`] reads back.
///
/// Days are expressed as hours; negative durations get a leading `-`.
///
/// # Examples
///
/// ```rust
/// use chrono::Duration;
/// use config_converters::duration::to_iso_string;
///
/// assert_eq!(to_iso_string(&Duration::zero()), "PT0S");
/// assert_eq!(to_iso_string(&(Duration::days(2) + Duration::minutes(4))), "PT48H4M");
/// assert_eq!(to_iso_string(&Duration::milliseconds(-1500)), "-PT1.5S");
/// ```
#[must_use]
pub fn to_iso_string(duration: &Duration) -> String {
    if *duration == Duration::zero() {
        return "PT0S".to_string();
    }

    let negative = *duration < Duration::zero();
    let magnitude = if negative { -*duration } else { *duration };
    let total = magnitude.num_seconds();
    let nanos = magnitude.subsec_nanos();

    let mut out = String::from(if negative { "-PT" } else { "PT" });
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;

    if hours != 0 {
        out.push_str(&format!("{}H", hours));
    }
    if minutes != 0 {
        out.push_str(&format!("{}M", minutes));
    }
    if seconds != 0 || nanos != 0 {
        out.push_str(&seconds.to_string());
        if nanos != 0 {
            let fraction = format!("{:09}", nanos);
            out.push('.');
            out.push_str(fraction.trim_end_matches('0'));
        }
        out.push('S');
    }
    out
}

/// Converts ISO-8601 durations or integer amounts to [`Duration`].
///
/// # Examples
///
/// ```rust
/// use chrono::Duration;
/// use config_converters::{Convert, DurationConverter, TimeUnit};
///
/// let converter = DurationConverter::new();
/// assert_eq!(converter.convert("1000").unwrap(), Duration::seconds(1));
/// assert_eq!(
///     converter.convert("P2DT3H4M").unwrap(),
///     Duration::days(2) + Duration::hours(3) + Duration::minutes(4)
/// );
///
/// let minutes = DurationConverter::new().with_unit(TimeUnit::Minutes);
/// assert_eq!(minutes.convert("90").unwrap(), Duration::minutes(90));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DurationConverter {
    unit: TimeUnit,
}

impl DurationConverter {
    /// Creates a converter reading bare integers as milliseconds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit bare integers are read in.
    #[must_use]
    pub fn with_unit(mut self, unit: TimeUnit) -> Self {
        self.unit = unit;
        self
    }

    /// The unit bare integers are read in.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}

impl Convert for DurationConverter {
    type Output = Duration;

    fn convert(&self, value: &str) -> Result<Duration> {
        structured(value, EXPECTED, parse_iso).or_numeric(|amount: i64| {
            self.unit.duration_of(amount).ok_or_else(|| {
                Error::numeric_overflow(
                    value,
                    &format!("out of range as a number of {}", self.unit.as_str()),
                )
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default_unit_is_millis() {
        assert_eq!(DurationConverter::new().convert("1000").unwrap(), Duration::seconds(1));
        assert_eq!(DurationConverter::new().convert("-250").unwrap(), Duration::milliseconds(-250));
        assert_eq!(DurationConverter::new().convert("+5").unwrap(), Duration::milliseconds(5));
    }

    #[test]
    fn test_iso_string() {
        assert_eq!(
            DurationConverter::new().convert("P2DT3H4M").unwrap(),
            Duration::days(2) + Duration::hours(3) + Duration::minutes(4)
        );
        assert_eq!(DurationConverter::new().convert("pt15m").unwrap(), Duration::minutes(15));
        assert_eq!(DurationConverter::new().convert("PT0,25S").unwrap(), Duration::milliseconds(250));
        assert_eq!(DurationConverter::new().convert("PT-1.5S").unwrap(), Duration::milliseconds(-1500));
        assert_eq!(DurationConverter::new().convert("-P1D").unwrap(), Duration::days(-1));
    }

    #[test]
    fn test_custom_unit() {
        let converter = DurationConverter::new().with_unit(TimeUnit::Seconds);
        assert_eq!(converter.unit(), TimeUnit::Seconds);
        assert_eq!(converter.convert("4").unwrap(), Duration::seconds(4));
    }

    #[test]
    fn test_invalid_numbers() {
        for input in ["1,000", "Hello, world!", "100.000.000", "Z", "", "P", "PT", "P1DT", "1e3"] {
            assert_eq!(
                DurationConverter::new().convert(input).unwrap_err().kind(),
                ErrorKind::FormatMismatch,
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_out_of_range_amount() {
        let converter = DurationConverter::new().with_unit(TimeUnit::Days);
        assert_eq!(
            converter.convert("9223372036854775807").unwrap_err().kind(),
            ErrorKind::FormatMismatch
        );
    }

    #[test]
    fn test_round_trip_canonical_form() {
        for text in ["P2DT3H4M", "PT0S", "PT1.000000001S", "-PT30M", "PT-1.5S"] {
            let duration = parse_iso(text).unwrap();
            assert_eq!(parse_iso(&to_iso_string(&duration)).unwrap(), duration, "text {}", text);
        }
    }
}
