//! Shared application state.
//!
//! The store backend is chosen at compile time; each feature gets its own
//! `AppState::new` factory below.

use std::sync::Arc;

use gunita_core::event::EventDetails;
use gunita_core::registration::RegistrationService;
use gunita_core::storage::AttendeeStore;

use crate::config::Config;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Registration intake and the cached attendee listing.
    pub registrations: Arc<RegistrationService>,
    /// Static event content.
    pub event: Arc<EventDetails>,
    /// Slots available, used for the dashboard.
    pub capacity: usize,
}

impl AppState {
    /// Creates an AppState on top of an already constructed store.
    pub fn from_store(store: Arc<dyn AttendeeStore>, config: &Config) -> Self {
        Self {
            registrations: Arc::new(RegistrationService::new(store, config.cache_ttl())),
            event: Arc::new(EventDetails::gunita_tawanan_2025()),
            capacity: config.event_capacity,
        }
    }
}

// ============================================================================
// Factory functions for the different store backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with a process-local store.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory store, RSVPs are lost on restart");
            Ok(Self::from_store(Arc::new(InMemoryStore::new()), config))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteStore;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = SqliteStore::new(&config.sqlite_path).await?;
            tracing::info!(path = %config.sqlite_path, "Opened SQLite store");
            Ok(Self::from_store(Arc::new(store), config))
        }
    }
}

#[cfg(feature = "postgrest")]
mod postgrest {
    use super::*;
    use crate::storage::PostgrestStore;

    impl AppState {
        /// Creates AppState backed by a PostgREST endpoint.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = PostgrestStore::new(
                &config.postgrest_url,
                &config.attendees_table,
                config.postgrest_api_key.as_deref(),
            )?;
            if let Err(err) = store.ping().await {
                tracing::warn!(
                    url = %config.postgrest_url,
                    error = %err,
                    "PostgREST store is not reachable yet"
                );
            }
            Ok(Self::from_store(Arc::new(store), config))
        }
    }
}
