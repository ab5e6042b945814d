use serde::{Deserialize, Serialize};

use crate::serde::deserialize_nullable_string;
use crate::storage::NewAttendee;

/// One confirmed RSVP, exactly as the registrant typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub email: String,
}

impl Attendee {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<Attendee> for NewAttendee {
    fn from(attendee: Attendee) -> Self {
        NewAttendee::new(attendee.name, attendee.email)
    }
}

/// Payload submitted by the registration form or the JSON API.
///
/// Missing or `null` fields deserialize to empty strings so they surface as
/// validation failures instead of decode errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub email: String,
}

impl RegisterRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
