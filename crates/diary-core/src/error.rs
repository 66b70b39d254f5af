//! Error types for Diary core operations.
//!
//! Every error here is a terminal outcome of the single action that
//! produced it; the CLI layer maps these to user-facing messages and
//! exit codes.

use thiserror::Error;

/// Result type alias for Diary operations.
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Core error type for Diary operations.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// Required input was empty or whitespace-only
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An account record already exists for the username
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    /// No account record exists for the username
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Stored password hash does not match the supplied password
    #[error("Incorrect password")]
    InvalidCredentials,

    /// Export capability is absent from this build
    #[error("PDF export is not available in this build")]
    ExportUnavailable,

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for DiaryError {
    fn from(err: std::io::Error) -> Self {
        DiaryError::Storage(err.to_string())
    }
}
