//! # config_converters
//!
//! Strongly-typed converters for configuration values.
//!
//! Configuration sources hand out text. Each converter in this crate takes one
//! token of that text and either produces a typed value or reports exactly why
//! it can't, using one flat [`Error`] taxonomy.
//!
//! ## Converters
//!
//! | Converter               | Output                        | Accepts |
//! |-------------------------|-------------------------------|---------|
//! | [`CharConverter`]       | `char`                        | `a`, `0x41` |
//! | [`ColorConverter`]      | [`Color`]                     | `white`, `#FFF`, `#FF0F`, `#C0C0C0FF`, `0x0000FF` |
//! | [`DimensionConverter`]  | [`Dimension`]                 | `512`, `1920x1080` |
//! | [`DurationConverter`]   | [`chrono::Duration`]          | `P2DT3H4M`, `1000` (milliseconds by default) |
//! | [`PeriodConverter`]     | [`Period`]                    | `P1Y2M3D`, `2` (days) |
//! | [`InstantConverter`]    | `chrono::DateTime<Utc>`       | `2007-12-03T10:15:30Z`, `1196676930000` |
//! | [`EnumConverter`]       | [`EnumMember`]                | `MONDAY`, `java.time.DayOfWeek#MONDAY` |
//! | [`TypedEnumConverter`]  | any [`SymbolicEnum`]          | same as above |
//! | [`FileConverter`]       | `PathBuf`                     | any non-empty path |
//! | [`PatternConverter`]    | `regex::Regex`                | `(?i)Ow.+O` |
//! | [`UriConverter`]        | `iri_string` URI reference    | `urn:isbn:096139210x`, `../up` |
//! | [`UrlConverter`]        | `url::Url`                    | `https://elypia.org/` |
//! | [`UuidConverter`]       | `uuid::Uuid`                  | `cebfb280-a7b0-4561-bc75-f71a1a08f66b` |
//! | [`LocaleConverter`]     | [`Locale`]                    | `en`, `zh-Hant-TW` |
//! | [`InetAddrConverter`]   | `std::net::IpAddr`            | `192.168.0.1`, `::1`, `localhost` |
//!
//! ## Quick Start
//!
//! ```rust
//! use config_converters::{Color, ColorConverter, Convert, DurationConverter, TimeUnit};
//!
//! assert_eq!(ColorConverter.convert("#FFF").unwrap(), Color::WHITE);
//!
//! let timeout = DurationConverter::new().with_unit(TimeUnit::Seconds);
//! assert_eq!(timeout.convert("30").unwrap(), chrono::Duration::seconds(30));
//! assert_eq!(timeout.convert("PT1M").unwrap(), chrono::Duration::minutes(1));
//! ```
//!
//! ## Guarantees
//!
//! - Converters hold only configuration fixed at construction and are `Send + Sync`
//! - The same token always gives the same result, except for host name
//!   lookups in [`InetAddrConverter`]
//! - Missing and empty input are checked before structure, and structure
//!   before any numeric fallback
//! - Invalid input is never replaced by a default
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `debug` level when a fallback path is
//! taken. It never installs a subscriber.

#[macro_use]
mod macros;

pub mod character;
pub mod color;
pub mod de;
pub mod dimension;
pub mod duration;
pub mod enums;
pub mod error;
pub mod fallback;
pub mod file;
pub mod id;
pub mod instant;
pub mod locale;
pub mod net;
pub mod options;
pub mod pattern;
pub mod period;

pub use character::CharConverter;
pub use color::{Color, ColorConverter};
pub use dimension::{Dimension, DimensionConverter};
pub use duration::DurationConverter;
pub use enums::{
    EnumConverter, EnumDescriptor, EnumMember, EnumRegistry, SymbolicEnum, TypedEnumConverter,
};
pub use error::{Error, ErrorKind, Result};
pub use file::FileConverter;
pub use id::UuidConverter;
pub use instant::InstantConverter;
pub use locale::{Locale, LocaleConverter};
pub use net::{HostResolver, InetAddrConverter, SystemResolver, UriConverter, UrlConverter};
pub use options::TimeUnit;
pub use pattern::PatternConverter;
pub use period::{Period, PeriodConverter};

/// Converts one configuration token to a typed value.
///
/// Implementations are stateless apart from options fixed at construction.
///
/// # Examples
///
/// ```rust
/// use config_converters::{Convert, Dimension, DimensionConverter, Error};
///
/// fn lookup<C: Convert>(converter: &C, raw: Option<&str>) -> Result<C::Output, Error> {
///     converter.convert_opt(raw)
/// }
///
/// assert_eq!(lookup(&DimensionConverter, Some("64")).unwrap(), Dimension::square(64));
/// assert_eq!(lookup(&DimensionConverter, None).unwrap_err(), Error::NullInput);
/// ```
pub trait Convert {
    type Output;

    /// Converts `value`.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] variant describing the first problem found.
    fn convert(&self, value: &str) -> Result<Self::Output>;

    /// Converts a value that may be missing, reporting [`Error::NullInput`] for `None`.
    fn convert_opt(&self, value: Option<&str>) -> Result<Self::Output> {
        match value {
            Some(value) => self.convert(value),
            None => Err(Error::NullInput),
        }
    }
}

impl<C: Convert + ?Sized> Convert for &C {
    type Output = C::Output;

    fn convert(&self, value: &str) -> Result<Self::Output> {
        (**self).convert(value)
    }
}
