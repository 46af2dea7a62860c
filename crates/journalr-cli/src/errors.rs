//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; everything else travels as
//! `anyhow::Error` and exits with `exit_codes::FAILURE`.

use std::fmt;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// A date phrase that could not be interpreted
    UnparseableDate(String),

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::UnparseableDate(phrase) => write!(f, "Could not parse {}", phrase),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an UnparseableDate error for `phrase`.
    pub fn unparseable_date(phrase: impl Into<String>) -> Self {
        CliError::UnparseableDate(phrase.into())
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::UnparseableDate(_) | CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}
