//! Locale conversion from BCP 47 language tags.
//!
//! Conversion is lenient and never fails on content: subtags are read in order
//! (language, extended language, script, region, variants, extensions) and the
//! first subtag that does not fit is dropped together with everything after
//! it. An unusable tag gives [`Locale::ROOT`].

use crate::{Convert, Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const SEPARATOR: char = '-';
const UNDETERMINED: &str = "und";
const PRIVATE_USE: &str = "x";

/// A locale identified by its language tag components.
///
/// Components are case-normalised: language and variants lower case, script
/// title case, region upper case.
///
/// # Examples
///
/// ```rust
/// use config_converters::Locale;
///
/// let locale: Locale = "zh-hant-tw".parse().unwrap();
/// assert_eq!(locale.language(), "zh");
/// assert_eq!(locale.script(), "Hant");
/// assert_eq!(locale.region(), "TW");
/// assert_eq!(locale.to_string(), "zh-Hant-TW");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    language: String,
    script: String,
    region: String,
    variants: Vec<String>,
    extensions: Vec<String>,
}

impl Locale {
    /// The locale with no language, written `und`.
    pub const ROOT: Locale = Locale {
        language: String::new(),
        script: String::new(),
        region: String::new(),
        variants: Vec::new(),
        extensions: Vec::new(),
    };

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Extension and private-use sequences, each starting with its singleton.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Reads a language tag, keeping every well-formed leading subtag.
    #[must_use]
    pub fn from_language_tag(tag: &str) -> Locale {
        let subtags: Vec<&str> = tag.split(SEPARATOR).collect();
        let mut locale = Locale::default();
        let mut i = 0;

        let at = |i: usize| subtags.get(i).copied().unwrap_or("");

        if is_alpha(at(0), 2, 8) {
            locale.language = at(0).to_ascii_lowercase();
            i = 1;
            if at(0).len() <= 3 {
                let mut extlangs = 0;
                while extlangs < 3 && is_alpha(at(i), 3, 3) {
                    // The first extended language subtag stands in for the language.
                    if extlangs == 0 {
                        locale.language = at(i).to_ascii_lowercase();
                    }
                    extlangs += 1;
                    i += 1;
                }
            }
        } else if !at(0).eq_ignore_ascii_case(PRIVATE_USE) {
            return Locale::ROOT;
        }

        if locale.language == UNDETERMINED {
            locale.language.clear();
        }

        if is_alpha(at(i), 4, 4) {
            locale.script = title_case(at(i));
            i += 1;
        }

        if is_alpha(at(i), 2, 2) || (at(i).len() == 3 && at(i).bytes().all(|b| b.is_ascii_digit())) {
            locale.region = at(i).to_ascii_uppercase();
            i += 1;
        }

        while is_variant(at(i)) {
            locale.variants.push(at(i).to_ascii_lowercase());
            i += 1;
        }

        while i < subtags.len() {
            let singleton = at(i);
            if singleton.len() != 1 || !singleton.bytes().all(|b| b.is_ascii_alphanumeric()) {
                break;
            }
            let private = singleton.eq_ignore_ascii_case(PRIVATE_USE);
            let min = if private { 1 } else { 2 };
            let mut end = i + 1;
            while end < subtags.len() && is_alphanumeric(at(end), min, 8) {
                end += 1;
            }
            if end == i + 1 {
                break;
            }
            locale
                .extensions
                .push(subtags[i..end].join("-").to_ascii_lowercase());
            i = end;
            if private {
                break;
            }
        }

        locale
    }
}

fn is_alpha(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_alphanumeric(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_variant(s: &str) -> bool {
    is_alphanumeric(s, 5, 8)
        || (s.len() == 4 && s.as_bytes()[0].is_ascii_digit() && is_alphanumeric(s, 4, 4))
}

fn title_case(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = if self.language.is_empty() {
            UNDETERMINED
        } else {
            &self.language
        };
        f.write_str(language)?;
        for part in [&self.script, &self.region] {
            if !part.is_empty() {
                write!(f, "-{}", part)?;
            }
        }
        for part in self.variants.iter().chain(&self.extensions) {
            write!(f, "-{}", part)?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LocaleConverter.convert(s)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        crate::de::locale(deserializer)
    }
}

/// Converts a language tag to a [`Locale`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocaleConverter;

impl Convert for LocaleConverter {
    type Output = Locale;

    fn convert(&self, value: &str) -> Result<Locale> {
        Ok(Locale::from_language_tag(value))
    }
}
