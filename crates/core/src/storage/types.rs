use serde::{Deserialize, Serialize};

/// Name of the table holding attendee rows.
pub const ATTENDEES_TABLE: &str = "attendees";

/// Column holding the registrant's display name.
pub const NAME_COLUMN: &str = "Name";

/// Column holding the registrant's contact email.
pub const EMAIL_COLUMN: &str = "Email";

/// Which columns a `select` should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Only the `Name` column.
    Names,
    /// Both `Name` and `Email`.
    NamesAndEmails,
}

impl Projection {
    /// Column names in store order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Projection::Names => &[NAME_COLUMN],
            Projection::NamesAndEmails => &[NAME_COLUMN, EMAIL_COLUMN],
        }
    }

    /// Comma separated column list, as used in `select=` clauses.
    pub fn select_clause(self) -> String {
        self.columns().join(",")
    }

    /// Whether the email column is part of the projection.
    pub fn includes_email(self) -> bool {
        matches!(self, Projection::NamesAndEmails)
    }
}

/// A row as returned by the store.
///
/// The store does not guarantee that either column is present, so both are
/// optional. Columns outside the requested [`Projection`] are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeRow {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
}

impl AttendeeRow {
    /// Creates a row with both columns present.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Returns a copy restricted to the given projection.
    pub fn project(&self, projection: Projection) -> Self {
        Self {
            name: self.name.clone(),
            email: if projection.includes_email() {
                self.email.clone()
            } else {
                None
            },
        }
    }
}

/// A row to insert. Values are persisted exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendee {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
}

impl NewAttendee {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<NewAttendee> for AttendeeRow {
    fn from(attendee: NewAttendee) -> Self {
        Self {
            name: Some(attendee.name),
            email: Some(attendee.email),
        }
    }
}
