use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        api::{dashboard, event_details, list_attendees, register_attendee},
        health::{livez, readyz},
        pages::index,
        rsvp::submit_rsvp,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/attendees", get(list_attendees).post(register_attendee))
        .route("/dashboard", get(dashboard))
        .route("/event", get(event_details))
        .layer(cors);

    Router::new()
        .route("/", get(index))
        .route("/rsvp", post(submit_rsvp))
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use gunita_core::storage::{
        AttendeeRow, AttendeeStore, NewAttendee, Projection, Result as StoreResult, StoreError,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::handlers::flash::FLASH_COOKIE;
    use crate::handlers::health::STORE_UNAVAILABLE;
    use crate::storage::InMemoryStore;

    /// Store whose every call fails as if the backend were down.
    struct DownStore;

    #[async_trait]
    impl AttendeeStore for DownStore {
        async fn select(&self, _projection: Projection) -> StoreResult<Vec<AttendeeRow>> {
            Err(StoreError::ConnectionFailed("connection refused".into()))
        }

        async fn insert(&self, _attendee: &NewAttendee) -> StoreResult<()> {
            Err(StoreError::ConnectionFailed("connection refused".into()))
        }
    }

    fn state_with(store: impl AttendeeStore + 'static) -> AppState {
        AppState::from_store(Arc::new(store), &Config::default())
    }

    async fn send(state: &AppState, request: Request<Body>) -> Response {
        create_app(state.clone()).oneshot(request).await.unwrap()
    }

    async fn body_string(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_form(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_index_page() {
        let state = AppState::default();

        let response = send(&state, get("/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("GunitaTawanan 2025"));
        assert!(html.contains("Confirm Your Attendance"));
        assert!(html.contains("No one has confirmed yet. Be the first!"));
        assert!(html.contains("Day 1: August 30, 2025 (Saturday)"));
    }

    #[tokio::test]
    async fn test_index_lists_attendees_and_dashboard() {
        let store = InMemoryStore::with_rows(vec![
            AttendeeRow::new("Ana", "ana@x.com"),
            AttendeeRow::new("Bea", "bea@z.com"),
        ]);
        let state = state_with(store);

        let html = body_string(send(&state, get("/")).await).await;

        assert!(html.contains("<b>Ana</b>"));
        assert!(html.contains("<b>Bea</b>"));
        assert!(html.contains("2/30 slots filled"));
    }

    #[tokio::test]
    async fn test_index_escapes_names() {
        let state = state_with(InMemoryStore::with_rows(vec![AttendeeRow::new(
            "<script>x</script>",
            "x@y.com",
        )]));

        let html = body_string(send(&state, get("/")).await).await;

        assert!(!html.contains("<script>x</script>"));
    }

    #[tokio::test]
    async fn test_index_degrades_when_store_down() {
        let state = state_with(DownStore);

        let response = send(&state, get("/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Failed to fetch attendee list"));
        assert!(html.contains("No one has confirmed yet."));
    }

    #[tokio::test]
    async fn test_rsvp_form_redirects_with_success_flash() {
        let state = AppState::default();

        let response = send(&state, post_form("/rsvp", "name=Ana&email=ana%40x.com")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/");
        let cookie = response.headers()["set-cookie"].to_str().unwrap().to_string();
        assert!(cookie.starts_with(&format!("{FLASH_COOKIE}=")));
        assert!(cookie.contains("success"));

        let listing = state.registrations.list_attendee_names().await;
        assert_eq!(listing.names, vec!["Ana".to_string()]);
    }

    #[tokio::test]
    async fn test_flash_is_shown_once() {
        let state = AppState::default();
        let response = send(&state, post_form("/rsvp", "name=&email=")).await;
        let set_cookie = response.headers()["set-cookie"].to_str().unwrap();
        let cookie = set_cookie.split(';').next().unwrap().to_string();

        let request = Request::builder()
            .uri("/")
            .header("cookie", &cookie)
            .body(Body::empty())
            .unwrap();
        let response = send(&state, request).await;

        let cleared = response.headers()["set-cookie"].to_str().unwrap().to_string();
        assert!(cleared.starts_with(&format!("{FLASH_COOKIE}=;")));
        let html = body_string(response).await;
        assert!(html.contains("Please provide both your name and email"));
        assert!(html.contains("flash error"));
    }

    #[tokio::test]
    async fn test_list_attendees_empty() {
        let state = AppState::default();

        let response = send(&state, get("/api/attendees")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"names": [], "count": 0, "error": null})
        );
    }

    #[tokio::test]
    async fn test_list_attendees_reports_store_failure() {
        let state = state_with(DownStore);

        let json = body_json(send(&state, get("/api/attendees")).await).await;

        assert_eq!(json["count"], 0);
        assert_eq!(json["error"], "Something went wrong. Please try again.");
    }

    #[tokio::test]
    async fn test_register_via_json() {
        let state = AppState::default();

        let response = send(
            &state,
            post_json("/api/attendees", json!({"name": "Ana", "email": "ana@x.com"})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"ok": true, "attendee": {"name": "Ana", "email": "ana@x.com"}})
        );

        let json = body_json(send(&state, get("/api/attendees")).await).await;
        assert_eq!(json["names"], json!(["Ana"]));
    }

    #[tokio::test]
    async fn test_register_via_form_on_api() {
        let state = AppState::default();

        let response = send(&state, post_form("/api/attendees", "name=Bea&email=bea%40z.com")).await;

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_register_missing_email_is_400() {
        let state = AppState::default();

        let response = send(&state, post_json("/api/attendees", json!({"name": "Ana"}))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["ok"], false);
        assert_eq!(json["kind"], "ValidationFailed");
        assert_eq!(json["message"], "Please provide your email");
    }

    #[tokio::test]
    async fn test_register_duplicate_is_409() {
        let state = state_with(InMemoryStore::with_rows(vec![AttendeeRow::new(
            "Ana",
            "ana@x.com",
        )]));

        let response = send(
            &state,
            post_json(
                "/api/attendees",
                json!({"name": "Someone", "email": " ANA@X.COM "}),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json = body_json(response).await;
        assert_eq!(json["kind"], "DuplicateRegistration");
    }

    #[tokio::test]
    async fn test_register_store_down_is_503() {
        let state = state_with(DownStore);

        let response = send(
            &state,
            post_json("/api/attendees", json!({"name": "Ana", "email": "ana@x.com"})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["kind"], "StoreReadFailed");
        assert_eq!(json["message"], "Something went wrong. Please try again.");
    }

    #[tokio::test]
    async fn test_dashboard() {
        let rows = (0..12)
            .map(|i| AttendeeRow::new(format!("Guest {i}"), format!("g{i}@x.com")))
            .collect();
        let state = state_with(InMemoryStore::with_rows(rows));

        let json = body_json(send(&state, get("/api/dashboard")).await).await;

        assert_eq!(json["attending"], 12);
        assert_eq!(json["capacity"], 30);
        assert_eq!(json["percent"], 40);
        assert_eq!(json["preview"], 10);
        assert_eq!(json["overflow"], 2);
    }

    #[tokio::test]
    async fn test_event_details() {
        let state = AppState::default();

        let json = body_json(send(&state, get("/api/event")).await).await;

        assert_eq!(json["title"], "GunitaTawanan 2025");
        assert_eq!(json["starts_at"], "2025-08-30T14:00:00+08:00");
        assert!(json["countdown"]["status"].is_string());
    }

    #[tokio::test]
    async fn test_health_probes() {
        let state = AppState::default();
        assert_eq!(send(&state, get("/livez")).await.status(), StatusCode::OK);
        assert_eq!(send(&state, get("/readyz")).await.status(), StatusCode::OK);

        let down = state_with(DownStore);
        assert_eq!(send(&down, get("/livez")).await.status(), StatusCode::OK);
        let response = send(&down, get("/readyz")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["healthy"], false);
    }

    #[tokio::test]
    async fn test_readyz_hides_store_error_details() {
        struct LockedStore;

        #[async_trait]
        impl AttendeeStore for LockedStore {
            async fn select(&self, _projection: Projection) -> StoreResult<Vec<AttendeeRow>> {
                Err(StoreError::Unauthorized("Invalid API key".into()))
            }

            async fn insert(&self, _attendee: &NewAttendee) -> StoreResult<()> {
                Err(StoreError::Unauthorized("Invalid API key".into()))
            }
        }

        let response = send(&state_with(LockedStore), get("/readyz")).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"], STORE_UNAVAILABLE);
        assert!(!json.to_string().contains("API key"));
    }
}
