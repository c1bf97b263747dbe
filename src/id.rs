//! UUID conversion.

use crate::{Convert, Error, Result};
use uuid::Uuid;

/// Converts a UUID in hyphenated, simple, braced or URN form to a [`Uuid`].
///
/// # Examples
///
/// ```rust
/// use config_converters::{Convert, UuidConverter};
///
/// let id = UuidConverter.convert("cebfb280-a7b0-4561-bc75-f71a1a08f66b").unwrap();
/// assert_eq!(id.to_string(), "cebfb280-a7b0-4561-bc75-f71a1a08f66b");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidConverter;

impl Convert for UuidConverter {
    type Output = Uuid;

    fn convert(&self, value: &str) -> Result<Uuid> {
        if value.is_empty() {
            return Err(Error::EmptyInput);
        }
        Uuid::parse_str(value).map_err(|e| Error::format_mismatch_with("a UUID", e))
    }
}
