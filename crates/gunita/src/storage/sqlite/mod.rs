//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` to run
//! them off the async executor.

mod error;
mod schema;
mod store;

pub use store::SqliteStore;
