//! Client error types.

use gunita_core::registration::ErrorKind;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server refused a registration with a typed reason.
    #[error("Registration rejected ({kind:?}): {message}")]
    Rejected {
        status: u16,
        kind: ErrorKind,
        message: String,
    },

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the server reported a duplicate name or email.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            ClientError::Rejected {
                kind: ErrorKind::DuplicateRegistration,
                ..
            }
        )
    }
}
