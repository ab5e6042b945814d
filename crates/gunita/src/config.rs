use std::{env, time::Duration};

use gunita_core::attendee::DEFAULT_CAPACITY;
use gunita_core::storage::ATTENDEES_TABLE;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Attendee list cache TTL in seconds (default: 600)
    pub cache_ttl_seconds: u64,
    /// Slots available for the event (default: 30)
    pub event_capacity: usize,
    /// Path to SQLite database file (default: "gunita.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// PostgREST project URL (default: "http://localhost:54321")
    /// Note: Only used when the `postgrest` feature is enabled.
    #[allow(dead_code)]
    pub postgrest_url: String,
    /// PostgREST API key, sent as `apikey` and bearer token.
    #[allow(dead_code)]
    pub postgrest_api_key: Option<String>,
    /// Table holding the attendees (default: "attendees")
    #[allow(dead_code)]
    pub attendees_table: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Attendee list cache TTL in seconds (default: 600)
    /// - `EVENT_CAPACITY` - Slots available for the event (default: 30)
    /// - `SQLITE_PATH` - SQLite database path (default: "gunita.db")
    /// - `POSTGREST_URL` - PostgREST project URL (default: "http://localhost:54321")
    /// - `POSTGREST_API_KEY` - PostgREST API key (optional)
    /// - `ATTENDEES_TABLE` - Attendee table name (default: "attendees")
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl_seconds),
            event_capacity: env::var("EVENT_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.event_capacity),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or(defaults.sqlite_path),
            postgrest_url: env::var("POSTGREST_URL").unwrap_or(defaults.postgrest_url),
            postgrest_api_key: env::var("POSTGREST_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            attendees_table: env::var("ATTENDEES_TABLE").unwrap_or(defaults.attendees_table),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: 600,
            event_capacity: DEFAULT_CAPACITY,
            sqlite_path: "gunita.db".to_string(),
            postgrest_url: "http://localhost:54321".to_string(),
            postgrest_api_key: None,
            attendees_table: ATTENDEES_TABLE.to_string(),
        }
    }
}
