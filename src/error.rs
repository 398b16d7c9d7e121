//! Error types for the broom CLI.
//!
//! Uses thiserror for derive macros. The taxonomy separates control signals
//! (cancellation) from genuine failures, and each failure class maps to its
//! own exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for broom operations.
#[derive(Error, Debug)]
pub enum BroomError {
    /// The user cancelled the operation (prompt escape, SIGINT). Not a
    /// failure: callers exit 0 with an informational message.
    #[error("Operation cancelled")]
    Cancelled,

    /// User provided invalid arguments, or the repository/remote is not
    /// usable for a cleanup run.
    #[error("{0}")]
    UserError(String),

    /// The persisted config document parsed but failed validation. The
    /// message is surfaced verbatim so the user can fix the file.
    #[error("Invalid config: {0}")]
    ConfigError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The checkout could not be moved off a branch scheduled for deletion.
    /// Raised before any deletion executes.
    #[error("Cannot vacate branch '{0}': {1}")]
    SafetyViolation(String, String),
}

impl BroomError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BroomError::Cancelled => exit_codes::SUCCESS,
            BroomError::UserError(_) => exit_codes::USER_ERROR,
            BroomError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            BroomError::GitError(_) => exit_codes::GIT_FAILURE,
            BroomError::SafetyViolation(_, _) => exit_codes::SAFETY_FAILURE,
        }
    }
}

/// Result type alias for broom operations.
pub type Result<T> = std::result::Result<T, BroomError>;
