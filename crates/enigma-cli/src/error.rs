//! Front-end error types.

use enigma_core::{InputError, ValidationError};
use thiserror::Error;

/// Errors from the command line and the interactive dialogue.
#[derive(Debug, Error)]
pub enum CliError {
    /// A value handed to the engine was malformed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The assembled configuration was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading or writing a line failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before an answer was given.
    #[error("input closed")]
    Closed,

    /// A line expected to hold an integer did not.
    #[error("{line:?} is not a number")]
    NotANumber {
        /// The offending line, trimmed.
        line: String,
    },

    /// Command-line arguments do not fit together.
    #[error("invalid arguments: {reason}")]
    Argument {
        /// What is wrong with them.
        reason: String,
    },
}

impl CliError {
    /// True if re-asking the same question can fix the error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Input(_) | Self::NotANumber { .. })
    }
}
