//! Pure functions for mapping registration errors to HTTP status codes.

use super::RegistrationError;

/// Maps a [`RegistrationError`] to an HTTP status code.
///
/// - `ValidationFailed` -> 400 (Bad Request)
/// - `DuplicateRegistration` -> 409 (Conflict)
/// - `StoreReadFailed` -> 503 (Service Unavailable)
/// - `StoreWriteFailed` -> 503 (Service Unavailable)
pub fn registration_error_to_status_code(error: &RegistrationError) -> u16 {
    match error {
        RegistrationError::ValidationFailed(_) => 400,
        RegistrationError::DuplicateRegistration(_) => 409,
        RegistrationError::StoreReadFailed(_) => 503,
        RegistrationError::StoreWriteFailed(_) => 503,
    }
}
