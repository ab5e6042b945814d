//! JSON API handlers.

use axum::{
    extract::{FromRequest, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use chrono::Utc;
use serde::Serialize;

use gunita_core::attendee::{Attendee, DashboardStats, RegisterRequest};
use gunita_core::event::{Countdown, EventDetails};

use super::error::{public_message, ApiError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AttendeesResponse {
    pub names: Vec<String>,
    pub count: usize,
    /// Set when the store could not be read; `names` is then empty.
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisteredResponse {
    pub ok: bool,
    pub attendee: Attendee,
}

#[derive(Debug, Serialize)]
pub struct EventResponse<'a> {
    #[serde(flatten)]
    pub event: &'a EventDetails,
    pub countdown: Countdown,
}

/// Registration payload accepted as either JSON or a urlencoded form.
pub struct RegisterPayload(pub RegisterRequest);

impl<S> FromRequest<S> for RegisterPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(request) = Json::<RegisterRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(request))
        } else {
            let Form(request) = Form::<RegisterRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(request))
        }
    }
}

/// List attendee names (GET /api/attendees).
pub async fn list_attendees(State(state): State<AppState>) -> Json<AttendeesResponse> {
    let listing = state.registrations.list_attendee_names().await;

    Json(AttendeesResponse {
        count: listing.count(),
        error: listing.error.as_ref().map(public_message),
        names: listing.names,
    })
}

/// Register an attendee (POST /api/attendees).
pub async fn register_attendee(
    State(state): State<AppState>,
    RegisterPayload(request): RegisterPayload,
) -> Result<impl IntoResponse, ApiError> {
    let attendee = state.registrations.register_request(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredResponse { ok: true, attendee }),
    ))
}

/// Fill-rate figures for the dashboard (GET /api/dashboard).
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardStats> {
    let listing = state.registrations.list_attendee_names().await;
    Json(DashboardStats::compute(listing.count(), state.capacity))
}

/// Event details with a live countdown (GET /api/event).
pub async fn event_details(State(state): State<AppState>) -> Response {
    let countdown = Countdown::until(&state.event.starts_at, &Utc::now());
    Json(EventResponse {
        event: &state.event,
        countdown,
    })
    .into_response()
}
