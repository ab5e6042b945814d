//! Attendee API operations.

use serde::{Deserialize, Serialize};

use gunita_core::attendee::{Attendee, DashboardStats, RegisterRequest};

use super::GunitaClient;
use crate::error::Result;

/// Attendee names as listed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeList {
    pub names: Vec<String>,
    pub count: usize,
    /// Present when the server could not read its store.
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Registered {
    attendee: Attendee,
}

impl GunitaClient {
    /// List confirmed attendee names.
    pub async fn list_attendees(&self) -> Result<AttendeeList> {
        let response = self.client.get(self.url("/api/attendees")).send().await?;
        self.handle_response(response).await
    }

    /// Register a new attendee.
    pub async fn register(&self, name: &str, email: &str) -> Result<Attendee> {
        let response = self
            .client
            .post(self.url("/api/attendees"))
            .json(&RegisterRequest::new(name, email))
            .send()
            .await?;
        let registered: Registered = self.handle_response(response).await?;
        Ok(registered.attendee)
    }

    /// Fetch dashboard fill-rate figures.
    pub async fn dashboard(&self) -> Result<DashboardStats> {
        let response = self.client.get(self.url("/api/dashboard")).send().await?;
        self.handle_response(response).await
    }
}
