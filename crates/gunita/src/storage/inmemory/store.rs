//! In-memory store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use gunita_core::storage::{AttendeeRow, AttendeeStore, NewAttendee, Projection, Result};

/// In-memory attendee table.
///
/// Like the remote store it stands in for, it does not enforce uniqueness.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    rows: Arc<RwLock<Vec<AttendeeRow>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `rows`.
    #[allow(dead_code)]
    pub fn with_rows(rows: Vec<AttendeeRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Number of stored rows.
    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl AttendeeStore for InMemoryStore {
    async fn select(&self, projection: Projection) -> Result<Vec<AttendeeRow>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().map(|row| row.project(projection)).collect())
    }

    async fn insert(&self, attendee: &NewAttendee) -> Result<()> {
        let mut rows = self.rows.write().await;
        rows.push(attendee.clone().into());
        Ok(())
    }
}
