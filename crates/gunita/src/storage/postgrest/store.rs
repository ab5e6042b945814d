//! PostgREST store implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use gunita_core::storage::{
    AttendeeRow, AttendeeStore, NewAttendee, Projection, Result, StoreError,
};

use super::error::{map_error_response, map_reqwest_error};

/// Per-request timeout; slow store responses surface as connection failures.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Attendee table exposed through a PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct PostgrestStore {
    client: reqwest::Client,
    base_url: String,
    table: String,
}

impl PostgrestStore {
    /// Creates a store for `table` under `base_url` (the project URL, without
    /// the `/rest/v1` suffix).
    pub fn new(
        base_url: impl Into<String>,
        table: impl Into<String>,
        api_key: Option<&str>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            let invalid = |_| StoreError::Unauthorized("API key is not a valid header value".into());
            headers.insert("apikey", HeaderValue::from_str(key).map_err(invalid)?);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {key}")).map_err(invalid)?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            table: table.into(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(map_error_response(status, &body))
    }
}

#[async_trait]
impl AttendeeStore for PostgrestStore {
    async fn select(&self, projection: Projection) -> Result<Vec<AttendeeRow>> {
        let response = self
            .client
            .get(self.table_url())
            .query(&[("select", projection.select_clause())])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let rows: Vec<AttendeeRow> = Self::check(response)
            .await?
            .json()
            .await
            .map_err(map_reqwest_error)?;

        tracing::trace!(count = rows.len(), table = %self.table, "Fetched attendee rows");
        Ok(rows.into_iter().map(|row| row.project(projection)).collect())
    }

    async fn insert(&self, attendee: &NewAttendee) -> Result<()> {
        let response = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=minimal")
            .json(attendee)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Query, State},
        http::{HeaderMap as AxumHeaders, StatusCode},
        response::{IntoResponse, Response},
        routing::get,
        Json, Router,
    };
    use gunita_core::storage::EMAIL_COLUMN;
    use serde::Deserialize;

    const KEY: &str = "test-anon-key";

    #[derive(Clone, Default)]
    struct FakeTable {
        rows: Arc<Mutex<Vec<NewAttendee>>>,
    }

    #[derive(Deserialize)]
    struct SelectQuery {
        select: String,
    }

    fn authorized(headers: &AxumHeaders) -> bool {
        headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(KEY)
            && headers.get("authorization").and_then(|v| v.to_str().ok())
                == Some("Bearer test-anon-key")
    }

    async fn select_rows(
        State(table): State<FakeTable>,
        headers: AxumHeaders,
        Query(query): Query<SelectQuery>,
    ) -> Response {
        if !authorized(&headers) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({"message": "Invalid API key"})),
            )
                .into_response();
        }
        let with_email = query.select.contains("Email");
        let rows: Vec<serde_json::Value> = table
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|row| {
                if with_email {
                    serde_json::json!({"Name": row.name, "Email": row.email})
                } else {
                    serde_json::json!({"Name": row.name})
                }
            })
            .collect();
        Json(rows).into_response()
    }

    async fn insert_row(
        State(table): State<FakeTable>,
        headers: AxumHeaders,
        Json(row): Json<NewAttendee>,
    ) -> Response {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        let mut rows = table.rows.lock().unwrap();
        if rows.iter().any(|r| r.email == row.email) {
            return (
                StatusCode::CONFLICT,
                Json(serde_json::json!({
                    "code": "23505",
                    "message": "duplicate key value violates unique constraint \"attendees_email_key\"",
                    "details": format!("Key (\"Email\")=({}) already exists.", row.email),
                })),
            )
                .into_response();
        }
        rows.push(row);
        StatusCode::CREATED.into_response()
    }

    async fn spawn_fake_postgrest() -> (String, FakeTable) {
        let table = FakeTable::default();
        let app = Router::new()
            .route("/rest/v1/attendees", get(select_rows).post(insert_row))
            .with_state(table.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), table)
    }

    #[tokio::test]
    async fn test_insert_then_select() {
        let (url, _) = spawn_fake_postgrest().await;
        let store = PostgrestStore::new(&url, "attendees", Some(KEY)).unwrap();

        store.insert(&NewAttendee::new("Ana", "ana@x.com")).await.unwrap();
        store.insert(&NewAttendee::new("Bea", "bea@z.com")).await.unwrap();

        let names = store.select(Projection::Names).await.unwrap();
        assert_eq!(
            names,
            vec![
                AttendeeRow {
                    name: Some("Ana".to_string()),
                    email: None
                },
                AttendeeRow {
                    name: Some("Bea".to_string()),
                    email: None
                },
            ]
        );

        let full = store.select(Projection::NamesAndEmails).await.unwrap();
        assert_eq!(full[1], AttendeeRow::new("Bea", "bea@z.com"));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let (url, table) = spawn_fake_postgrest().await;
        table
            .rows
            .lock()
            .unwrap()
            .push(NewAttendee::new("Ana", "ana@x.com"));
        let store = PostgrestStore::new(&url, "attendees", Some(KEY)).unwrap();

        let result = store.insert(&NewAttendee::new("Other", "ana@x.com")).await;

        assert_eq!(
            result,
            Err(StoreError::Conflict {
                column: EMAIL_COLUMN
            })
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_unauthorized() {
        let (url, _) = spawn_fake_postgrest().await;
        let store = PostgrestStore::new(&url, "attendees", None).unwrap();

        let result = store.select(Projection::Names).await;

        assert_eq!(
            result,
            Err(StoreError::Unauthorized("Invalid API key".to_string()))
        );
    }

    #[tokio::test]
    async fn test_unreachable_store_is_connection_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let store = PostgrestStore::new(format!("http://{addr}"), "attendees", Some(KEY)).unwrap();

        let result = store.ping().await;

        assert!(matches!(result, Err(StoreError::ConnectionFailed(_))));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let store = PostgrestStore::new("http://localhost:54321/", "attendees", None).unwrap();
        assert_eq!(store.table_url(), "http://localhost:54321/rest/v1/attendees");
    }
}
