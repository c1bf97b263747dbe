//! Serde adapters for configuration hosts.
//!
//! Each function here reads a string with serde and runs it through the
//! matching converter, so a configuration struct can declare typed fields:
//!
//! ```rust
//! use serde::Deserialize;
//! use config_converters::{de, Color, Dimension};
//!
//! #[derive(Deserialize)]
//! struct Window {
//!     size: Dimension,
//!     #[serde(deserialize_with = "de::duration")]
//!     timeout: chrono::Duration,
//!     background: Color,
//! }
//!
//! let window: Window = serde_json::from_str(
//!     r##"{ "size": "1920x1080", "timeout": "PT30S", "background": "#336699" }"##,
//! )
//! .unwrap();
//! assert_eq!(window.size, Dimension::new(1920, 1080));
//! assert_eq!(window.timeout, chrono::Duration::seconds(30));
//! ```
//!
//! Converter errors are reported through [`serde::de::Error::custom`].

use crate::{
    CharConverter, Color, ColorConverter, Convert, Dimension, DimensionConverter, DurationConverter,
    FileConverter, InetAddrConverter, InstantConverter, Locale, LocaleConverter, PatternConverter,
    Period, PeriodConverter, UriConverter, UrlConverter, UuidConverter,
};
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;

struct ConvertVisitor<C> {
    converter: C,
}

impl<'de, C: Convert> Visitor<'de> for ConvertVisitor<C> {
    type Value = C::Output;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        self.converter.convert(value).map_err(E::custom)
    }
}

/// Deserializes a string with any converter.
pub fn with_converter<'de, D, C>(deserializer: D, converter: C) -> Result<C::Output, D::Error>
where
    D: Deserializer<'de>,
    C: Convert,
{
    deserializer.deserialize_str(ConvertVisitor { converter })
}

macro_rules! deserialize_fns {
    ($($(#[$doc:meta])* $name:ident => $converter:expr, $output:ty;)+) => {
        $(
            $(#[$doc])*
            pub fn $name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$output, D::Error> {
                with_converter(deserializer, $converter)
            }
        )+
    };
}

deserialize_fns! {
    /// Deserializes a [`char`] with [`CharConverter`].
    character => CharConverter, char;
    /// Deserializes a [`Color`] with [`ColorConverter`].
    color => ColorConverter, Color;
    /// Deserializes a [`Dimension`] with [`DimensionConverter`].
    dimension => DimensionConverter, Dimension;
    /// Deserializes a [`chrono::Duration`], reading bare integers as milliseconds.
    duration => DurationConverter::new(), chrono::Duration;
    /// Deserializes a [`PathBuf`] with [`FileConverter`].
    file => FileConverter, PathBuf;
    /// Deserializes an [`IpAddr`], resolving host names with the system resolver.
    inet_addr => InetAddrConverter::new(), IpAddr;
    /// Deserializes a UTC instant with [`InstantConverter`].
    instant => InstantConverter, DateTime<Utc>;
    /// Deserializes a [`Locale`] with [`LocaleConverter`].
    locale => LocaleConverter, Locale;
    /// Deserializes a [`regex::Regex`] with [`PatternConverter`].
    pattern => PatternConverter, regex::Regex;
    /// Deserializes a [`Period`] with [`PeriodConverter`].
    period => PeriodConverter, Period;
    /// Deserializes a URI reference with [`UriConverter`].
    uri => UriConverter, iri_string::types::UriReferenceString;
    /// Deserializes a URL with the default protocols of [`UrlConverter`].
    url => UrlConverter::new(), url::Url;
    /// Deserializes a [`uuid::Uuid`] with [`UuidConverter`].
    uuid => UuidConverter, uuid::Uuid;
}
