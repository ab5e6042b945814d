//! Form-based registration for the HTML page.

use axum::{extract::State, response::Response, Form};
use axum_extra::extract::cookie::CookieJar;

use gunita_core::attendee::RegisterRequest;

use super::error::public_message;
use super::flash::{redirect_with_flash, FlashMessage};
use crate::state::AppState;

/// Shown after a successful RSVP.
pub const CONFIRMED_MESSAGE: &str = "Attendance confirmed! We'll see you there.";

/// Handler for the RSVP form (POST /rsvp).
///
/// Always redirects back to the page; the outcome travels in a flash cookie.
pub async fn submit_rsvp(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(request): Form<RegisterRequest>,
) -> Response {
    let flash = match state.registrations.register_request(&request).await {
        Ok(_) => FlashMessage::success(CONFIRMED_MESSAGE),
        Err(err) => FlashMessage::error(public_message(&err)),
    };

    redirect_with_flash(jar, "/", flash)
}
