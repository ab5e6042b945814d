//! Event details.

use serde::{Deserialize, Serialize};

use gunita_core::event::{Countdown, EventDetails};

use super::GunitaClient;
use crate::error::Result;

/// Event details together with the server-computed countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    #[serde(flatten)]
    pub event: EventDetails,
    pub countdown: Countdown,
}

impl GunitaClient {
    /// Fetch the event details.
    pub async fn event(&self) -> Result<EventInfo> {
        let response = self.client.get(self.url("/api/event")).send().await?;
        self.handle_response(response).await
    }
}
