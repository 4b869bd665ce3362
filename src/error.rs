//! Error Types
//!
//! Failure taxonomy shared by the REST client and the sync controller.

use thiserror::Error;

/// Common result type for synchronization operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Failure classes for a single request attempt
///
/// There is no retry machinery anywhere: every failure is terminal for
/// that attempt, and the controller decides whether it is recovered
/// silently (reads) or surfaced to the user (writes).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// Transport-level failure: the request never produced an HTTP status
    #[error("Network failure: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// A required draft field is missing; caught before any request is sent
    #[error("Missing required field: {0}")]
    Validation(&'static str),
}

impl SyncError {
    /// Create a rejection from a status code and an extracted message
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest errors are not Clone, so only the rendered message is kept
        SyncError::Network(err.to_string())
    }
}
