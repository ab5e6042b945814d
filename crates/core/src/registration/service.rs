//! The registration intake flow and the cached attendee listing.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::attendee::{
    validate_registration, Attendee, DuplicateMatch, ExistingAttendees, RegisterRequest,
};
use crate::cache::NameCache;
use crate::clock::{Clock, SystemClock};
use crate::storage::{AttendeeStore, NewAttendee, Projection, StoreError, EMAIL_COLUMN};

use super::RegistrationError;

/// Result of listing attendee names.
///
/// Listing never fails outright: when the store is unreachable `names` is
/// empty and `error` explains why.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendeeListing {
    pub names: Vec<String>,
    pub error: Option<RegistrationError>,
}

impl AttendeeListing {
    fn loaded(names: Vec<String>) -> Self {
        Self { names, error: None }
    }

    fn degraded(error: RegistrationError) -> Self {
        Self {
            names: Vec::new(),
            error: Some(error),
        }
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Validates, deduplicates and persists RSVPs.
///
/// Owns the attendee name cache. Duplicate checks always read the store
/// directly; only the display listing goes through the cache.
pub struct RegistrationService {
    store: Arc<dyn AttendeeStore>,
    names: Arc<NameCache>,
    /// Serializes check-then-insert so two registrants in this process
    /// cannot both pass the duplicate check for the same name or email.
    /// Held until the insert and the cache invalidation have both finished.
    intake: Arc<Mutex<()>>,
}

impl RegistrationService {
    /// Creates a service using the wall clock.
    pub fn new(store: Arc<dyn AttendeeStore>, ttl: Duration) -> Self {
        Self::with_clock(store, ttl, Arc::new(SystemClock))
    }

    /// Creates a service with an explicit clock for cache expiry.
    pub fn with_clock(store: Arc<dyn AttendeeStore>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            names: Arc::new(NameCache::new(ttl, clock)),
            intake: Arc::new(Mutex::new(())),
        }
    }

    pub fn store(&self) -> &Arc<dyn AttendeeStore> {
        &self.store
    }

    pub fn cache(&self) -> &NameCache {
        &self.names
    }

    /// Lists attendee names, served from the cache while it is fresh.
    pub async fn list_attendee_names(&self) -> AttendeeListing {
        match self.names.get_or_populate(|| self.fetch_names()).await {
            Ok(names) => AttendeeListing::loaded(names),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch attendee list");
                AttendeeListing::degraded(RegistrationError::StoreReadFailed(err))
            }
        }
    }

    async fn fetch_names(&self) -> Result<Vec<String>, StoreError> {
        let rows = self.store.select(Projection::Names).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| row.name)
            .filter(|name| !name.is_empty())
            .collect())
    }

    /// Registers `name` and `email`, persisting them exactly as submitted.
    ///
    /// On success the name cache is invalidated so the next listing
    /// includes the new attendee. On any failure the cache is left alone.
    pub async fn register(&self, name: &str, email: &str) -> Result<Attendee, RegistrationError> {
        validate_registration(name, email)?;

        let intake = Arc::clone(&self.intake).lock_owned().await;

        let rows = self
            .store
            .select(Projection::NamesAndEmails)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Failed to load attendees for duplicate check");
                RegistrationError::StoreReadFailed(err)
            })?;

        if let Some(matched) = ExistingAttendees::from_rows(&rows).find_duplicate(name, email) {
            tracing::debug!(name = %name, ?matched, "Rejected duplicate registration");
            return Err(RegistrationError::DuplicateRegistration(matched));
        }

        let attendee = Attendee::new(name, email);
        let row = NewAttendee::from(attendee.clone());
        let store = Arc::clone(&self.store);
        let names = Arc::clone(&self.names);

        // The insert and the invalidation run as one detached task, so a
        // committed row is always followed by an invalidation even when this
        // future is dropped mid-write.
        let write = tokio::spawn(async move {
            let _intake = intake;
            let result = store.insert(&row).await;
            if result.is_ok() {
                names.invalidate().await;
            }
            result
        });
        let inserted = write.await.unwrap_or_else(|err| {
            Err(StoreError::QueryFailed(format!("insert task failed: {err}")))
        });

        match inserted {
            Ok(()) => {}
            Err(StoreError::Conflict { column }) => {
                tracing::debug!(name = %name, column, "Store rejected duplicate registration");
                let matched = if column == EMAIL_COLUMN {
                    DuplicateMatch::Email
                } else {
                    DuplicateMatch::Name
                };
                return Err(RegistrationError::DuplicateRegistration(matched));
            }
            Err(err) => {
                tracing::error!(name = %name, error = %err, "Failed to add attendee");
                return Err(RegistrationError::StoreWriteFailed(err));
            }
        }

        tracing::info!(name = %name, "Attendance confirmed");

        Ok(attendee)
    }

    /// Convenience wrapper for a decoded form or JSON payload.
    pub async fn register_request(
        &self,
        request: &RegisterRequest,
    ) -> Result<Attendee, RegistrationError> {
        self.register(&request.name, &request.email).await
    }
}
