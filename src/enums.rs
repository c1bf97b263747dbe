//! Enum constant resolution.
//!
//! Rust has no runtime reflection, so enumerated types are described up front
//! in an [`EnumRegistry`]: a table from qualified type name to an
//! [`EnumDescriptor`] listing its members in declaration order. The host fills
//! the registry at startup and shares it (behind an [`Arc`]) with every
//! [`EnumConverter`].
//!
//! A converter bound to a required type accepts bare member names such as
//! `MONDAY`. Any converter accepts qualified references such as
//! `java.time.DayOfWeek.MONDAY` or `java.time.DayOfWeek#MONDAY`, where the
//! namespace is lower-case and dotted, the type name is capitalised and the
//! member is upper snake case.
//!
//! ## Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use config_converters::{Convert, EnumConverter, EnumDescriptor, EnumRegistry, ErrorKind};
//!
//! let mut registry = EnumRegistry::new();
//! registry.register(EnumDescriptor::new(
//!     "java.time.DayOfWeek",
//!     ["MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY", "SATURDAY", "SUNDAY"],
//! ));
//! registry.register(EnumDescriptor::new(
//!     "java.util.concurrent.TimeUnit",
//!     ["NANOSECONDS", "MICROSECONDS", "MILLISECONDS", "SECONDS"],
//! ));
//! let registry = Arc::new(registry);
//!
//! let any = EnumConverter::new(Arc::clone(&registry));
//! let monday = any.convert("java.time.DayOfWeek#MONDAY").unwrap();
//! assert_eq!(monday.name(), "MONDAY");
//! assert_eq!(monday.ordinal(), 0);
//!
//! let days = EnumConverter::new(registry).with_required("java.time.DayOfWeek").unwrap();
//! assert_eq!(days.convert("FRIDAY").unwrap().ordinal(), 4);
//! assert_eq!(
//!     days.convert("java.util.concurrent.TimeUnit.SECONDS").unwrap_err().kind(),
//!     ErrorKind::TypeMismatch
//! );
//! ```

use crate::{Convert, Error, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

static QUALIFIED_MEMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<namespace>[a-z0-9]+(?:\.[a-z0-9]+)*)\.(?P<type>[A-Z][A-Za-z0-9]*)[#.](?P<member>[A-Z0-9_]+)$")
        .unwrap()
});

/// Describes one enumerated type: its qualified name and ordered members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: String,
    members: Vec<String>,
    supertypes: Vec<String>,
}

impl EnumDescriptor {
    /// Creates a descriptor; member order defines ordinals.
    pub fn new<I, S>(name: &str, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnumDescriptor {
            name: name.to_string(),
            members: members.into_iter().map(Into::into).collect(),
            supertypes: Vec::new(),
        }
    }

    /// Declares that values of this type are also acceptable where `supertype`
    /// is required.
    #[must_use]
    pub fn with_supertype(mut self, supertype: &str) -> Self {
        self.supertypes.push(supertype.to_string());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Looks up a member by exact name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<EnumMember> {
        self.members
            .iter()
            .position(|m| m == name)
            .map(|ordinal| EnumMember {
                type_name: self.name.clone(),
                name: self.members[ordinal].clone(),
                ordinal,
            })
    }

    /// Whether a value of this type may be used where `required` is expected.
    #[must_use]
    pub fn is_assignable_to(&self, required: &str) -> bool {
        self.name == required || self.supertypes.iter().any(|s| s == required)
    }
}

/// A resolved enum constant.
///
/// Displays as its qualified reference, `{type}.{member}`, which resolves back
/// to an equal member.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumMember {
    type_name: String,
    name: String,
    ordinal: usize,
}

impl EnumMember {
    /// Qualified name of the type the member belongs to.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the member in its type's declaration order.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl fmt::Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.name)
    }
}

#[derive(Clone, Debug)]
enum TypeEntry {
    Enumerated(EnumDescriptor),
    Alias(String),
    Other,
}

/// Table of known types, keyed by qualified name.
///
/// Besides enumerated types the registry can record names of known types that
/// are not enumerations, so a reference to them is reported as "not an
/// enumerated type" rather than "not found".
#[derive(Clone, Debug, Default)]
pub struct EnumRegistry {
    types: IndexMap<String, TypeEntry>,
}

impl EnumRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an enumerated type, replacing any entry of the same name.
    pub fn register(&mut self, descriptor: EnumDescriptor) -> &mut Self {
        self.types
            .insert(descriptor.name.clone(), TypeEntry::Enumerated(descriptor));
        self
    }

    /// Registers a Rust enum declared with [`symbolic_enum!`](crate::symbolic_enum)
    /// or otherwise implementing [`SymbolicEnum`].
    pub fn register_enum<E: SymbolicEnum>(&mut self) -> &mut Self {
        self.register(E::descriptor())
    }

    /// Registers a second name for an already known type.
    pub fn register_alias(&mut self, alias: &str, target: &str) -> &mut Self {
        self.types
            .insert(alias.to_string(), TypeEntry::Alias(target.to_string()));
        self
    }

    /// Records a known type that is not enumerated.
    pub fn register_type(&mut self, name: &str) -> &mut Self {
        self.types.insert(name.to_string(), TypeEntry::Other);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the enumerated type known by `name`, following aliases.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EnumDescriptor> {
        self.lookup(name).ok()
    }

    /// Resolves `name` to an enumerated type.
    ///
    /// Fails with [`Error::UnresolvableSymbol`] when the name is unknown or
    /// names a type that is not enumerated.
    pub fn lookup(&self, name: &str) -> Result<&EnumDescriptor> {
        let mut current = name;
        // Bounded walk so an alias cycle cannot loop forever.
        for _ in 0..=self.types.len() {
            match self.types.get(current) {
                Some(TypeEntry::Enumerated(descriptor)) => return Ok(descriptor),
                Some(TypeEntry::Alias(target)) => current = target,
                Some(TypeEntry::Other) => {
                    return Err(Error::unresolvable(name, "not an enumerated type"))
                }
                None => return Err(Error::unresolvable(name, "type doesn't exist")),
            }
        }
        Err(Error::unresolvable(name, "alias cycle"))
    }
}

/// Resolves tokens to constants of registered enumerated types.
#[derive(Clone, Debug)]
pub struct EnumConverter {
    registry: Arc<EnumRegistry>,
    required: Option<EnumDescriptor>,
}

impl EnumConverter {
    /// Creates a converter accepting a qualified constant of any registered type.
    #[must_use]
    pub fn new(registry: Arc<EnumRegistry>) -> Self {
        EnumConverter {
            registry,
            required: None,
        }
    }

    /// Binds the converter to one required type, looked up in the registry.
    pub fn with_required(mut self, type_name: &str) -> Result<Self> {
        self.required = Some(self.registry.lookup(type_name)?.clone());
        Ok(self)
    }

    /// Binds the converter to the type described by `E`.
    #[must_use]
    pub fn with_required_enum<E: SymbolicEnum>(mut self) -> Self {
        self.required = Some(E::descriptor());
        self
    }

    /// The type this converter is bound to, if any.
    #[must_use]
    pub fn required(&self) -> Option<&EnumDescriptor> {
        self.required.as_ref()
    }

    fn resolve_qualified(&self, value: &str) -> Result<EnumMember> {
        let captures = QUALIFIED_MEMBER_PATTERN.captures(value).ok_or_else(|| {
            Error::format_mismatch_with(
                "a qualified enum constant",
                "expecting input like java.time.DayOfWeek.MONDAY",
            )
        })?;

        let type_name = format!("{}.{}", &captures["namespace"], &captures["type"]);
        let descriptor = match &self.required {
            Some(required) if required.name() == type_name => required,
            _ => self.registry.lookup(&type_name)?,
        };

        if let Some(required) = &self.required {
            if !descriptor.is_assignable_to(required.name()) {
                return Err(Error::type_mismatch(required.name(), descriptor.name()));
            }
        }

        let member = &captures["member"];
        descriptor
            .member(member)
            .ok_or_else(|| Error::unresolvable(value, format!("no constant {} in {}", member, descriptor.name())))
    }
}

impl Convert for EnumConverter {
    type Output = EnumMember;

    fn convert(&self, value: &str) -> Result<EnumMember> {
        if let Some(required) = &self.required {
            if let Some(member) = required.member(value) {
                return Ok(member);
            }
            debug!(
                value,
                required = required.name(),
                "no constant with this name in the required type, trying a qualified reference"
            );
        }

        self.resolve_qualified(value)
    }
}

/// A Rust enum that can be resolved by name.
///
/// Usually implemented through [`symbolic_enum!`](crate::symbolic_enum).
pub trait SymbolicEnum: Sized + Copy + 'static {
    /// Qualified name, such as `java.time.DayOfWeek`.
    const TYPE_NAME: &'static str;

    /// Member names in declaration order.
    const MEMBERS: &'static [&'static str];

    fn from_ordinal(ordinal: usize) -> Option<Self>;

    fn ordinal(&self) -> usize;

    fn name(&self) -> &'static str {
        Self::MEMBERS[self.ordinal()]
    }

    fn descriptor() -> EnumDescriptor {
        EnumDescriptor::new(Self::TYPE_NAME, Self::MEMBERS.iter().copied())
    }
}

/// An [`EnumConverter`] bound to `E` that returns `E` itself.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use config_converters::{symbolic_enum, Convert, EnumRegistry, TypedEnumConverter};
///
/// symbolic_enum! {
///     pub enum Level = "app.log.Level" { TRACE, DEBUG, INFO, WARN, ERROR }
/// }
///
/// let converter = TypedEnumConverter::<Level>::new(Arc::new(EnumRegistry::new()));
/// assert_eq!(converter.convert("WARN").unwrap(), Level::WARN);
/// assert_eq!(converter.convert("app.log.Level#INFO").unwrap(), Level::INFO);
/// ```
pub struct TypedEnumConverter<E> {
    inner: EnumConverter,
    _marker: PhantomData<fn() -> E>,
}

impl<E: SymbolicEnum> TypedEnumConverter<E> {
    #[must_use]
    pub fn new(registry: Arc<EnumRegistry>) -> Self {
        TypedEnumConverter {
            inner: EnumConverter::new(registry).with_required_enum::<E>(),
            _marker: PhantomData,
        }
    }
}

impl<E> Clone for TypedEnumConverter<E> {
    fn clone(&self) -> Self {
        TypedEnumConverter {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E> fmt::Debug for TypedEnumConverter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedEnumConverter")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<E: SymbolicEnum> Convert for TypedEnumConverter<E> {
    type Output = E;

    fn convert(&self, value: &str) -> Result<E> {
        let member = self.inner.convert(value)?;
        // Members of a subtype are matched to `E` by name.
        E::MEMBERS
            .iter()
            .position(|m| *m == member.name())
            .and_then(E::from_ordinal)
            .ok_or_else(|| Error::unresolvable(value, format!("no constant {} in {}", member.name(), E::TYPE_NAME)))
    }
}

const WEEKDAYS: [chrono::Weekday; 7] = [
    chrono::Weekday::Mon,
    chrono::Weekday::Tue,
    chrono::Weekday::Wed,
    chrono::Weekday::Thu,
    chrono::Weekday::Fri,
    chrono::Weekday::Sat,
    chrono::Weekday::Sun,
];

impl SymbolicEnum for chrono::Weekday {
    const TYPE_NAME: &'static str = "chrono.Weekday";
    const MEMBERS: &'static [&'static str] = &[
        "MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY", "SATURDAY", "SUNDAY",
    ];

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        WEEKDAYS.get(ordinal).copied()
    }

    fn ordinal(&self) -> usize {
        self.num_days_from_monday() as usize
    }
}

const MONTHS: [chrono::Month; 12] = [
    chrono::Month::January,
    chrono::Month::February,
    chrono::Month::March,
    chrono::Month::April,
    chrono::Month::May,
    chrono::Month::June,
    chrono::Month::July,
    chrono::Month::August,
    chrono::Month::September,
    chrono::Month::October,
    chrono::Month::November,
    chrono::Month::December,
];

impl SymbolicEnum for chrono::Month {
    const TYPE_NAME: &'static str = "chrono.Month";
    const MEMBERS: &'static [&'static str] = &[
        "JANUARY", "FEBRUARY", "MARCH", "APRIL", "MAY", "JUNE", "JULY", "AUGUST", "SEPTEMBER",
        "OCTOBER", "NOVEMBER", "DECEMBER",
    ];

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        MONTHS.get(ordinal).copied()
    }

    fn ordinal(&self) -> usize {
        self.number_from_month() as usize - 1
    }
}
