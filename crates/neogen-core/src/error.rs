//! Error types for neogen.
//!
//! Every failure in the generators is fatal for the current run: the tool is
//! re-run after fixing the environment. Errors therefore carry enough context
//! (template name, offending path) for the operator to act on them.
//!
//! # Examples
//!
//! ```
//! use neogen_core::{Error, Result};
//!
//! fn require_suffix(suffix: &str) -> Result<()> {
//!     if suffix.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "suffix cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_suffix("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for neogen.
///
/// All library crates of the workspace return this type; the CLI wraps it
/// with `anyhow` context.
#[derive(Error, Debug)]
pub enum Error {
    /// Template registration or rendering failed.
    ///
    /// In strict mode this includes a placeholder referenced by a template
    /// without a value in the rendering context.
    #[error("Template error in '{template}': {message}")]
    TemplateError {
        /// Name of the template that failed
        template: String,
        /// Description of the failure
        message: String,
    },

    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    IoError {
        /// Path that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Source tree traversal failed during wiki discovery.
    #[error("Discovery failed at {}: {message}", path.display())]
    DiscoveryError {
        /// Path where traversal failed
        path: PathBuf,
        /// Description of the failure
        message: String,
    },

    /// Configuration error.
    ///
    /// Raised when `neogen.toml` cannot be parsed or contains invalid values.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error for domain types such as [`crate::PackageName`].
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },
}

impl Error {
    /// Wraps an I/O error with the path it occurred at.
    ///
    /// # Examples
    ///
    /// ```
    /// use neogen_core::Error;
    /// use std::io;
    ///
    /// let err = Error::io("/tmp/out", io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_io_error());
    /// assert!(err.to_string().contains("/tmp/out"));
    /// ```
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }

    /// Returns `true` if this is a discovery error.
    #[must_use]
    pub const fn is_discovery_error(&self) -> bool {
        matches!(self, Self::DiscoveryError { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }
}

/// Result type alias for neogen operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_template_error_detection() {
        let err = Error::TemplateError {
            template: "primitives/iterator".to_string(),
            message: "Variable \"Type\" not found in strict mode".to_string(),
        };
        assert!(err.is_template_error());
        assert!(!err.is_io_error());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = Error::io("out/ByteIterator.java", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(err.is_io_error());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_discovery_error_display() {
        let err = Error::DiscoveryError {
            path: PathBuf::from("src/main/java"),
            message: "permission denied".to_string(),
        };
        let display = err.to_string();
        assert!(err.is_discovery_error());
        assert!(display.contains("src/main/java"));
        assert!(display.contains("permission denied"));
    }

    #[test]
    fn test_config_error_detection() {
        let err = Error::ConfigError {
            message: "bad toml".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!err.is_validation_error());
    }

    #[test]
    fn test_validation_error_display() {
        let err = Error::ValidationError {
            field: "base_package".to_string(),
            reason: "empty segment".to_string(),
        };
        assert!(err.is_validation_error());
        assert_eq!(
            err.to_string(),
            "Validation error in base_package: empty segment"
        );
    }
}
