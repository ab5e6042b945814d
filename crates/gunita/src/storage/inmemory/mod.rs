//! In-memory storage backend.
//!
//! Rows are kept in a `Vec` behind an `Arc<RwLock<_>>`, in insertion order.
//! Nothing is persisted, which makes it handy for development and tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use gunita::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! // Use store for testing...
//! ```

mod store;

pub use store::InMemoryStore;
