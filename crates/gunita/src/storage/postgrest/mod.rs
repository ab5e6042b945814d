//! PostgREST storage backend (works against Supabase's REST API).
//!
//! Rows are read with `GET /rest/v1/{table}?select=...` and written with
//! `POST /rest/v1/{table}`, authenticating with the project's API key.

mod error;
mod store;

pub use store::PostgrestStore;
