//! HTTP client for the gunita API.

pub mod attendees;
pub mod event;
pub mod health;

use serde::Deserialize;

use gunita_core::registration::ErrorKind;

use crate::error::{ClientError, Result};

/// Default server URL when neither a flag nor `GUNITA_URL` is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Error body returned by the registration API.
#[derive(Debug, Deserialize)]
struct Rejection {
    kind: ErrorKind,
    message: String,
}

/// HTTP client for the gunita API.
#[derive(Debug, Clone)]
pub struct GunitaClient {
    client: reqwest::Client,
    base_url: String,
}

impl GunitaClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (GUNITA_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("GUNITA_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a successful body, or turn the error body into a [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        match serde_json::from_str::<Rejection>(&body) {
            Ok(rejection) => Err(ClientError::Rejected {
                status: status.as_u16(),
                kind: rejection.kind,
                message: rejection.message,
            }),
            Err(_) => Err(ClientError::ServerError {
                status: status.as_u16(),
                message: body,
            }),
        }
    }
}
