//! PostgREST error mapping.
//!
//! Maps transport failures and non-success HTTP responses to `StoreError`.

use reqwest::StatusCode;
use serde::Deserialize;

use gunita_core::storage::{StoreError, EMAIL_COLUMN, NAME_COLUMN};

/// Postgres error code for unique violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Error body returned by PostgREST.
#[derive(Debug, Default, Deserialize)]
struct PostgrestErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Maps a reqwest transport error to a StoreError.
pub fn map_reqwest_error(err: reqwest::Error) -> StoreError {
    if err.is_connect() || err.is_timeout() {
        StoreError::ConnectionFailed(err.to_string())
    } else if err.is_decode() {
        StoreError::Serialization(err.to_string())
    } else {
        StoreError::QueryFailed(err.to_string())
    }
}

/// Maps a non-success response to a StoreError.
///
/// # Error Mapping
///
/// - 401/403 → `StoreError::Unauthorized`
/// - 409 or Postgres code `23505` → `StoreError::Conflict`
/// - 502/503/504 → `StoreError::ConnectionFailed`
/// - Anything else → `StoreError::QueryFailed`
pub fn map_error_response(status: StatusCode, body: &str) -> StoreError {
    let parsed: PostgrestErrorBody = serde_json::from_str(body).unwrap_or_default();
    let summary = parsed
        .message
        .clone()
        .unwrap_or_else(|| body.trim().to_string());

    if status == StatusCode::CONFLICT || parsed.code.as_deref() == Some(UNIQUE_VIOLATION) {
        return StoreError::Conflict {
            column: conflicting_column(&parsed),
        };
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::Unauthorized(summary),
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            StoreError::ConnectionFailed(format!("{status}: {summary}"))
        }
        _ => StoreError::QueryFailed(format!("{status}: {summary}")),
    }
}

/// Works out which column a unique violation was about.
fn conflicting_column(body: &PostgrestErrorBody) -> &'static str {
    let mentions_email = [&body.details, &body.message]
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains("email"));
    if mentions_email {
        EMAIL_COLUMN
    } else {
        NAME_COLUMN
    }
}
