//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (reads from the attendee store)

use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::AppState;

/// Reported when the store probe fails; the cause is only logged.
pub const STORE_UNAVAILABLE: &str = "attendee store unavailable";

#[derive(Debug, Serialize)]
struct ReadyStatus {
    healthy: bool,
    latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Issues a cheap read against the store, bypassing the name cache.
/// Returns 200 if it succeeds, 503 otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let result = state.registrations.store().ping().await;
    let latency_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyStatus {
                healthy: true,
                latency_ms,
                error: None,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyStatus {
                    healthy: false,
                    latency_ms,
                    error: Some(STORE_UNAVAILABLE.to_string()),
                }),
            )
                .into_response()
        }
    }
}
