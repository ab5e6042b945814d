use thiserror::Error;

/// Reasons a registration is rejected before the store is consulted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide your name")]
    MissingName,
    #[error("Please provide your email")]
    MissingEmail,
    #[error("Please provide both your name and email")]
    MissingNameAndEmail,
}

/// Checks that both fields are non-empty after trimming.
///
/// Email shape is deliberately not checked.
///
/// # Examples
///
/// ```
/// use gunita_core::attendee::{validate_registration, ValidationError};
///
/// assert_eq!(validate_registration("Ana", "ana@x.com"), Ok(()));
/// assert_eq!(validate_registration("  ", "ana@x.com"), Err(ValidationError::MissingName));
/// assert_eq!(validate_registration("Ana", "not-an-email"), Ok(()));
/// ```
pub fn validate_registration(name: &str, email: &str) -> Result<(), ValidationError> {
    match (name.trim().is_empty(), email.trim().is_empty()) {
        (false, false) => Ok(()),
        (true, false) => Err(ValidationError::MissingName),
        (false, true) => Err(ValidationError::MissingEmail),
        (true, true) => Err(ValidationError::MissingNameAndEmail),
    }
}
