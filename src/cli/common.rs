//! Shared types for CLI command handlers.

use std::fmt;

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Error raised by a CLI command, carrying the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

/// Category of CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Bad invocation: conflicting or missing arguments
    Usage,
    /// File could not be read, written, or parsed
    Io,
    /// Input was readable but failed a check
    Validation,
}

impl CliError {
    /// Creates a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Usage,
            message: message.into(),
        }
    }

    /// Creates an IO error (exit code 1).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Exit code to report for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Usage => 2,
            CliErrorKind::Io | CliErrorKind::Validation => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::usage("x").exit_code(), 2);
        assert_eq!(CliError::io("x").exit_code(), 1);
        assert_eq!(CliError::validation("x").exit_code(), 1);
    }

    #[test]
    fn test_display_is_message_only() {
        assert_eq!(CliError::io("could not read").to_string(), "could not read");
    }
}
