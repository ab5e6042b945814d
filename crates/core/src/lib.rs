//! Core types and logic for the gunita RSVP service.
//!
//! Everything in this crate is either pure or sits behind a trait seam
//! ([`storage::AttendeeStore`], [`clock::Clock`]) so the server can plug in
//! real backends and tests can plug in fakes.

pub mod attendee;
pub mod cache;
pub mod clock;
pub mod event;
pub mod registration;
pub mod serde;
pub mod storage;
