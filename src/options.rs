//! Construction-time options shared by converters.
//!
//! Converters carry no mutable state; everything that changes their behaviour is
//! fixed when they are built, using consuming `with_*` methods:
//!
//! - [`TimeUnit`]: the unit a bare integer is read in by [`DurationConverter`](crate::DurationConverter)
//!
//! ## Examples
//!
//! ```rust
//! use config_converters::{Convert, DurationConverter, TimeUnit};
//!
//! let converter = DurationConverter::new().with_unit(TimeUnit::Seconds);
//! assert_eq!(converter.convert("4").unwrap(), chrono::Duration::seconds(4));
//! ```

use chrono::Duration;

/// Unit applied to a plain integer when it is used as a duration.
///
/// Only units of exact length are offered; months and years vary in length and
/// belong to [`Period`](crate::Period) instead.
///
/// # Examples
///
/// ```rust
/// use config_converters::TimeUnit;
///
/// assert_eq!(TimeUnit::default(), TimeUnit::Millis);
/// assert_eq!(TimeUnit::Seconds.as_str(), "seconds");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    Nanos,
    Micros,
    #[default]
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
}

impl TimeUnit {
    /// Returns the lower-case plural name of this unit.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Nanos => "nanos",
            TimeUnit::Micros => "micros",
            TimeUnit::Millis => "millis",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::HalfDays => "half-days",
            TimeUnit::Days => "days",
        }
    }

    /// Builds a duration of `amount` of this unit, or `None` if it is out of range.
    #[must_use]
    pub fn duration_of(&self, amount: i64) -> Option<Duration> {
        match self {
            TimeUnit::Nanos => Some(Duration::nanoseconds(amount)),
            TimeUnit::Micros => Some(Duration::microseconds(amount)),
            TimeUnit::Millis => Duration::try_milliseconds(amount),
            TimeUnit::Seconds => Duration::try_seconds(amount),
            TimeUnit::Minutes => Duration::try_minutes(amount),
            TimeUnit::Hours => Duration::try_hours(amount),
            TimeUnit::HalfDays => amount.checked_mul(12).and_then(Duration::try_hours),
            TimeUnit::Days => Duration::try_days(amount),
        }
    }
}
