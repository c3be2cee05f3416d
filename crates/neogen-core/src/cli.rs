//! CLI-specific value types.
//!
//! # Examples
//!
//! ```
//! use neogen_core::cli::{ExitCode, OutputFormat};
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format.as_str(), "json");
//!
//! assert!(ExitCode::SUCCESS.is_success());
//! assert_eq!(ExitCode::IO_ERROR.as_i32(), 3);
//! ```

use std::fmt;
use std::str::FromStr;

/// CLI output format for run summaries.
///
/// Generated snippets are always printed verbatim; the format only applies
/// to the summary describing what was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// JSON output for machine parsing
    Json,
    /// Plain text output for scripts
    Text,
    /// Pretty-printed output with colors for human reading
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(crate::Error::InvalidArgument(format!(
                "invalid output format: '{s}' (expected: json, text, or pretty)"
            ))),
        }
    }
}

/// CLI exit code with semantic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful execution (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// General error (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Invalid input, arguments, or configuration (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Filesystem read, write, or traversal failure (exit code 3).
    pub const IO_ERROR: Self = Self(3);

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }

    /// Maps a library error to the exit code reported for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use neogen_core::Error;
    /// use neogen_core::cli::ExitCode;
    ///
    /// let err = Error::ConfigError { message: "bad".to_string() };
    /// assert_eq!(ExitCode::for_error(&err), ExitCode::INVALID_INPUT);
    /// ```
    #[must_use]
    pub const fn for_error(error: &crate::Error) -> Self {
        match error {
            crate::Error::IoError { .. } | crate::Error::DiscoveryError { .. } => Self::IO_ERROR,
            crate::Error::ConfigError { .. }
            | crate::Error::InvalidArgument(_)
            | crate::Error::ValidationError { .. } => Self::INVALID_INPUT,
            crate::Error::TemplateError { .. } => Self::ERROR,
        }
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("pretty".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Pretty);
    }

    #[test]
    fn test_exit_codes() {
        assert!(ExitCode::SUCCESS.is_success());
        assert!(!ExitCode::ERROR.is_success());
        assert_eq!(i32::from(ExitCode::INVALID_INPUT), 2);
        assert_eq!(ExitCode::IO_ERROR.as_i32(), 3);
        assert_eq!(ExitCode::default(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_exit_code_for_errors() {
        let io = crate::Error::io("x", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(ExitCode::for_error(&io), ExitCode::IO_ERROR);

        let template = crate::Error::TemplateError {
            template: "t".to_string(),
            message: "m".to_string(),
        };
        assert_eq!(ExitCode::for_error(&template), ExitCode::ERROR);
    }
}
