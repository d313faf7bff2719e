//! CLI error handling with semantic exit codes.
//!
//! | Code | Category   | Description                                   |
//! |------|------------|-----------------------------------------------|
//! | 0    | Success    | Command completed successfully                |
//! | 1    | `Internal` | Unexpected/internal error (e.g. broken pipe)  |
//! | 2    | `Usage`    | Invalid arguments, configuration or input     |
//! | 3    | `NotFound` | Input or config file does not exist           |

use std::fmt;
use std::process::ExitCode;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments, configuration or input (exit code 2).
    Usage = 2,

    /// A named file doesn't exist (exit code 3).
    NotFound = 3,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Create an `ExitCode` from this category.
    #[must_use]
    pub fn as_exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_code())
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }

    /// Create an internal error.
    pub fn internal(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Internal, source)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.source)
    }
}

impl From<folio_core::Error> for CliError {
    fn from(err: folio_core::Error) -> Self {
        let category = if err.is_usage() {
            ErrorCategory::Usage
        } else {
            ErrorCategory::Internal
        };
        Self::new(category, err)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        // Core errors wrapped in context keep their classification
        let category = match err.downcast_ref::<folio_core::Error>() {
            Some(core) if core.is_usage() => ErrorCategory::Usage,
            _ => ErrorCategory::Internal,
        };
        Self::new(category, err)
    }
}

/// Result alias for command handlers.
pub type CliResult<T> = std::result::Result<T, CliError>;
