//! Health check operations.

use serde::{Deserialize, Serialize};

use super::GunitaClient;
use crate::error::Result;

/// Readiness probe result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readiness {
    pub healthy: bool,
    pub latency_ms: u64,
    #[serde(default)]
    pub error: Option<String>,
}

impl GunitaClient {
    /// Whether the server answers its liveness probe.
    pub async fn live(&self) -> Result<bool> {
        let response = self.client.get(self.url("/livez")).send().await?;
        Ok(response.status().is_success())
    }

    /// Query the readiness probe.
    ///
    /// An unready server answers 503 with the same body, so both are decoded.
    pub async fn ready(&self) -> Result<Readiness> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        Ok(response.json().await?)
    }
}
