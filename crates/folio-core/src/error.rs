//! Error types and handling for folio-core operations.
//!
//! Every failure in this crate is caller misconfiguration: a zero page size, a
//! zero chunk size, an output path template without its `{n}` placeholder, or
//! configuration text that cannot be parsed. These are raised when a
//! paginator, builder or chunker is constructed, before any output is
//! produced, so a failing call never yields a partial page stream.
//!
//! ## Error Categories
//!
//! - **Invalid arguments**: page sizes, chunk sizes, output path templates
//! - **Configuration**: unreadable or invalid `PagingConfig` text
//! - **Serialization**: TOML/JSON conversion failures
//!
//! ```rust
//! use folio_core::{Error, chunk};
//!
//! match chunk(vec![1, 2, 3], 0) {
//!     Err(Error::InvalidArgument(msg)) => assert!(msg.contains("chunk size")),
//!     _ => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// The main error type for folio-core operations.
///
/// All fallible public functions in folio-core return `Result<T, Error>`.
#[derive(Error, Debug)]
pub enum Error {
    /// An argument is outside its valid range.
    ///
    /// ## Common Causes
    ///
    /// - `per_page` of zero
    /// - Chunk size of zero
    /// - Output path template missing the `{n}` substitution point
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration is invalid.
    ///
    /// Raised when configuration text contains unknown keys, values of the
    /// wrong type, or values that fail validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// Always `false`: every folio error describes a misconfigured call, and
    /// repeating the same call produces the same error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }

    /// Get the error category as a string identifier.
    ///
    /// - `"invalid_argument"` - page/chunk sizes and path templates
    /// - `"config"` - configuration loading and validation
    /// - `"serialization"` - data format conversion
    ///
    /// ```rust
    /// use folio_core::Error;
    ///
    /// let err = Error::InvalidArgument("per_page must be at least 1".into());
    /// assert_eq!(err.category(), "invalid_argument");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
        }
    }

    /// Whether this error was caused by the caller's arguments or configuration.
    ///
    /// Front ends use this to pick a usage exit code instead of an internal one.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::Config(_))
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_error_display_formatting() {
        // Given: Different error variants
        let cases = vec![
            (
                Error::InvalidArgument("per_page must be at least 1".to_string()),
                "Invalid argument: per_page must be at least 1",
            ),
            (
                Error::Config("unknown field `pages`".to_string()),
                "Configuration error: unknown field `pages`",
            ),
            (
                Error::Serialization("expected a table".to_string()),
                "Serialization error: expected a table",
            ),
        ];

        // Then: Each renders with its prefix
        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            Error::InvalidArgument(String::new()).category(),
            "invalid_argument"
        );
        assert_eq!(Error::Config(String::new()).category(), "config");
        assert_eq!(
            Error::Serialization(String::new()).category(),
            "serialization"
        );
    }

    #[test]
    fn test_usage_classification() {
        assert!(Error::InvalidArgument("x".into()).is_usage());
        assert!(Error::Config("x".into()).is_usage());
        assert!(!Error::Serialization("x".into()).is_usage());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid").unwrap_err();
        let error: Error = json_error.into();

        match error {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            other => panic!("Expected Serialization error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_toml_error() {
        let toml_error = toml::from_str::<toml::Value>("per_page = ").unwrap_err();
        let error: Error = toml_error.into();
        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_error_size() {
        let error_size = std::mem::size_of::<Error>();
        assert!(error_size <= 32, "Error type too large: {error_size} bytes");
    }

    proptest! {
        #[test]
        fn test_invalid_argument_with_arbitrary_messages(msg in r".{0,200}") {
            let error = Error::InvalidArgument(msg.clone());
            let error_string = error.to_string();

            prop_assert!(error_string.starts_with("Invalid argument"));
            prop_assert!(error_string.contains(&msg));
            prop_assert!(!error.is_recoverable());
        }
    }
}
