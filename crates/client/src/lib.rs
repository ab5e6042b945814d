//! gunita_client - CLI client for the gunita RSVP API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::GunitaClient;
pub use error::{ClientError, Result};
