/// Declares a fieldless enum that can be resolved by name.
///
/// The macro emits the enum (deriving `Clone`, `Copy`, `Debug`, `PartialEq`,
/// `Eq` and `Hash`) and implements [`SymbolicEnum`](crate::SymbolicEnum) with
/// the given qualified type name. Variant names are used verbatim as member
/// names, so they are normally written in upper snake case.
///
/// # Examples
///
/// ```rust
/// use config_converters::{symbolic_enum, SymbolicEnum};
///
/// symbolic_enum! {
///     /// Units of `java.util.concurrent`.
///     pub enum TimeUnit = "java.util.concurrent.TimeUnit" {
///         NANOSECONDS, MICROSECONDS, MILLISECONDS, SECONDS, MINUTES, HOURS, DAYS,
///     }
/// }
///
/// assert_eq!(TimeUnit::TYPE_NAME, "java.util.concurrent.TimeUnit");
/// assert_eq!(TimeUnit::SECONDS.ordinal(), 3);
/// assert_eq!(TimeUnit::from_ordinal(0), Some(TimeUnit::NANOSECONDS));
/// ```
#[macro_export]
macro_rules! symbolic_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident = $qualified:literal {
            $($variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::SymbolicEnum for $name {
            const TYPE_NAME: &'static str = $qualified;
            const MEMBERS: &'static [&'static str] = &[$(stringify!($variant)),+];

            fn from_ordinal(ordinal: usize) -> ::core::option::Option<Self> {
                const ALL: &[$name] = &[$($name::$variant),+];
                ALL.get(ordinal).copied()
            }

            fn ordinal(&self) -> usize {
                *self as usize
            }
        }
    };
}
