pub mod api;
pub mod error;
pub mod flash;
pub mod health;
pub mod pages;
pub mod rsvp;

pub use error::ApiError;
