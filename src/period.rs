//! Calendar period conversion.
//!
//! A period counts years, months and days without fixing their length, unlike
//! a [`chrono::Duration`]. Tokens are read as ISO-8601 periods (`PnYnMnWnD`)
//! first, then as a signed integer number of days.

use crate::fallback::structured;
use crate::{Convert, Error, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static PERIOD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<sign>[-+]?)P(?:(?P<years>[-+]?[0-9]+)Y)?(?:(?P<months>[-+]?[0-9]+)M)?(?:(?P<weeks>[-+]?[0-9]+)W)?(?:(?P<days>[-+]?[0-9]+)D)?$",
    )
    .unwrap()
});

const EXPECTED: &str = "an ISO-8601 period such as P1Y2M3D, or an integer number of days";

const DAYS_PER_WEEK: i32 = 7;

/// An amount of calendar time in years, months and days.
///
/// Components are kept as given and are not normalised, so `P14M` stays
/// fourteen months.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Period {
    pub const ZERO: Period = Period::new(0, 0, 0);

    #[must_use]
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Period {
            years,
            months,
            days,
        }
    }

    #[must_use]
    pub const fn of_days(days: i32) -> Self {
        Period::new(0, 0, days)
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Parses an ISO-8601 period string, folding weeks into days.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_converters::Period;
    ///
    /// assert_eq!(Period::parse_iso("P1Y2M3D").unwrap(), Period::new(1, 2, 3));
    /// assert_eq!(Period::parse_iso("P2W").unwrap(), Period::of_days(14));
    /// assert_eq!(Period::parse_iso("-P1Y-2M").unwrap(), Period::new(-1, 2, 0));
    /// ```
    pub fn parse_iso(value: &str) -> Result<Period> {
        let captures = PERIOD_PATTERN
            .captures(value)
            .ok_or_else(|| Error::format_mismatch("an ISO-8601 period PnYnMnWnD"))?;

        let has_component = ["years", "months", "weeks", "days"]
            .iter()
            .any(|name| captures.name(name).is_some());
        if !has_component {
            return Err(Error::format_mismatch("an ISO-8601 period PnYnMnWnD"));
        }

        let overflow = || Error::format_mismatch_with("an ISO-8601 period", "value out of range");
        let negate = &captures["sign"] == "-";
        let signed = |n: i32| if negate { n.checked_neg() } else { Some(n) };

        let years = signed(component(&captures, "years")?).ok_or_else(overflow)?;
        let months = signed(component(&captures, "months")?).ok_or_else(overflow)?;
        let weeks = component(&captures, "weeks")?;
        let days = component(&captures, "days")?;
        let days = weeks
            .checked_mul(DAYS_PER_WEEK)
            .and_then(|w| w.checked_add(days))
            .and_then(signed)
            .ok_or_else(overflow)?;

        Ok(Period::new(years, months, days))
    }
}

fn component(captures: &Captures<'_>, name: &str) -> Result<i32> {
    match captures.name(name) {
        Some(m) => m
            .as_str()
            .parse::<i32>()
            .map_err(|e| Error::format_mismatch_with("an ISO-8601 period", e)),
        None => Ok(0),
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PeriodConverter.convert(s)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        crate::de::period(deserializer)
    }
}

/// Converts ISO-8601 periods or a number of days to [`Period`].
///
/// # Examples
///
/// ```rust
/// use config_converters::{Convert, Period, PeriodConverter};
///
/// assert_eq!(PeriodConverter.convert("2").unwrap(), Period::of_days(2));
/// assert_eq!(PeriodConverter.convert("P1Y2M3D").unwrap(), Period::new(1, 2, 3));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PeriodConverter;

impl Convert for PeriodConverter {
    type Output = Period;

    fn convert(&self, value: &str) -> Result<Period> {
        structured(value, EXPECTED, Period::parse_iso).or_numeric(|days: i32| Ok(Period::of_days(days)))
    }
}
