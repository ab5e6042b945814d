use async_trait::async_trait;

use super::{AttendeeRow, NewAttendee, Projection, Result};

/// Tabular store holding attendee rows.
///
/// Implementations are thin adapters: they neither deduplicate nor cache.
#[async_trait]
pub trait AttendeeStore: Send + Sync {
    /// Returns every row, restricted to `projection`, in insertion order.
    async fn select(&self, projection: Projection) -> Result<Vec<AttendeeRow>>;

    /// Inserts one row.
    ///
    /// Backends that enforce uniqueness report a collision as
    /// [`StoreError::Conflict`](super::StoreError::Conflict).
    async fn insert(&self, attendee: &NewAttendee) -> Result<()>;

    /// Cheap reachability probe used by readiness checks.
    async fn ping(&self) -> Result<()> {
        self.select(Projection::Names).await.map(|_| ())
    }
}
