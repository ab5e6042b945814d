use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use gunita_core::registration::{
    registration_error_to_status_code, ErrorKind, RegistrationError,
};

/// Message shown to registrants when the RSVP could not be stored.
pub const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

/// User-facing text for a registration failure.
///
/// Store failures are replaced with a generic retry hint; the underlying
/// error is logged by the service and never shown to the registrant.
pub fn public_message(error: &RegistrationError) -> String {
    match error {
        RegistrationError::StoreReadFailed(_) | RegistrationError::StoreWriteFailed(_) => {
            RETRY_MESSAGE.to_string()
        }
        other => other.to_string(),
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    ok: bool,
    kind: ErrorKind,
    message: String,
}

/// JSON rejection for the registration API.
#[derive(Debug)]
pub struct ApiError(pub RegistrationError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = registration_error_to_status_code(&self.0);
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ErrorBody {
            ok: false,
            kind: self.0.kind(),
            message: public_message(&self.0),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        Self(err)
    }
}
