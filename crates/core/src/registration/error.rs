use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attendee::{DuplicateMatch, ValidationError};
use crate::storage::StoreError;

/// Everything that can go wrong while listing or registering attendees.
///
/// Store failures never escape as-is; they are always wrapped in one of the
/// `Store*` variants so callers can tell reads from writes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("{0}")]
    ValidationFailed(#[from] ValidationError),
    #[error("You're already on the list")]
    DuplicateRegistration(DuplicateMatch),
    #[error("Could not load attendees, please try again: {0}")]
    StoreReadFailed(StoreError),
    #[error("Could not save your RSVP, please try again: {0}")]
    StoreWriteFailed(StoreError),
}

/// Wire-level discriminant for [`RegistrationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    ValidationFailed,
    DuplicateRegistration,
    StoreReadFailed,
    StoreWriteFailed,
}

impl RegistrationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrationError::ValidationFailed(_) => ErrorKind::ValidationFailed,
            RegistrationError::DuplicateRegistration(_) => ErrorKind::DuplicateRegistration,
            RegistrationError::StoreReadFailed(_) => ErrorKind::StoreReadFailed,
            RegistrationError::StoreWriteFailed(_) => ErrorKind::StoreWriteFailed,
        }
    }

    /// Whether retrying the same request later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RegistrationError::StoreReadFailed(_) | RegistrationError::StoreWriteFailed(_)
        )
    }
}
