//! Attendee store backends.
//!
//! Each backend implements [`gunita_core::storage::AttendeeStore`]. The one
//! wired into the server is picked at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): rows live in process memory and vanish on restart
//! - `sqlite`: SQLite file using `rusqlite` and `tokio-rusqlite`
//! - `postgrest`: a PostgREST endpoint (e.g. Supabase) over HTTP via `reqwest`
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p gunita --no-default-features --features sqlite
//! ```

#[cfg(all(feature = "sqlite", feature = "postgrest"))]
compile_error!(
    "Features 'sqlite' and 'postgrest' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(all(feature = "inmemory", any(feature = "sqlite", feature = "postgrest")))]
compile_error!(
    "Feature 'inmemory' is enabled by default. \
    Use --no-default-features when selecting 'sqlite' or 'postgrest'."
);

#[cfg(not(any(feature = "inmemory", feature = "sqlite", feature = "postgrest")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory', 'sqlite' or 'postgrest' feature. \
    Example: cargo build -p gunita --no-default-features --features sqlite"
);

// Always compiled: the router tests run against it whatever backend is selected.
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgrest")]
pub mod postgrest;

pub use inmemory::InMemoryStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

#[cfg(feature = "postgrest")]
pub use postgrest::PostgrestStore;
