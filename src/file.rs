//! File path conversion.

use crate::{Convert, Error, Result};
use std::path::PathBuf;

/// Converts a non-empty token to a [`PathBuf`].
///
/// The path is not checked against the file system.
///
/// # Examples
///
/// ```rust
/// use std::path::PathBuf;
/// use config_converters::{Convert, FileConverter};
///
/// assert_eq!(FileConverter.convert("/").unwrap(), PathBuf::from("/"));
/// assert!(FileConverter.convert("").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FileConverter;

impl Convert for FileConverter {
    type Output = PathBuf;

    fn convert(&self, value: &str) -> Result<PathBuf> {
        if value.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(PathBuf::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(FileConverter.convert("/").unwrap(), PathBuf::from("/"));
        assert_eq!(
            FileConverter.convert("config/app.toml").unwrap(),
            PathBuf::from("config").join("app.toml")
        );
    }

    #[test]
    fn test_null_and_empty() {
        assert_eq!(FileConverter.convert_opt(None).unwrap_err(), Error::NullInput);
        assert_eq!(FileConverter.convert("").unwrap_err(), Error::EmptyInput);
    }
}
