//! Error types for session storage

use thiserror::Error;

/// Session store errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// No logged-in session to operate on
    #[error("Not logged in")]
    NotLoggedIn,

    /// Stored record could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] hoax_core::CoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
