use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use gunita_core::attendee::DashboardStats;
use gunita_core::event::{Countdown, EventDetails};

use super::flash::FlashMessage;
use crate::state::AppState;

/// Icon repeated once per previewed attendee on the dashboard.
const AVATAR: &str = "🧑‍🤝‍🧑";

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// The single page: event info, RSVP form, dashboard, itinerary and
/// attendee list.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    event: &'a EventDetails,
    countdown: Countdown,
    stats: DashboardStats,
    /// Progress bar width in whole percent, capped at 100.
    fill_width: u32,
    avatars: String,
    names: Vec<String>,
    listing_failed: bool,
    flash: Option<FlashMessage>,
}

/// Handler for the index page (GET /).
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = FlashMessage::take(jar);

    let listing = state.registrations.list_attendee_names().await;
    let stats = DashboardStats::compute(listing.count(), state.capacity);

    let template = IndexTemplate {
        event: &state.event,
        countdown: Countdown::until(&state.event.starts_at, &Utc::now()),
        stats,
        fill_width: (stats.fill_ratio * 100.0).round() as u32,
        avatars: AVATAR.repeat(stats.preview),
        listing_failed: listing.is_degraded(),
        names: listing.names,
        flash,
    };

    (jar, HtmlTemplate(template).into_response())
}
