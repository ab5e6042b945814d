//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the attendees table and its indexes.
///
/// The unique expression indexes mirror the case-insensitive duplicate check
/// so that registrations racing from separate processes still cannot both
/// land.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS attendees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    "Name" TEXT,
    "Email" TEXT,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_attendees_name_normalized
    ON attendees (lower(trim("Name")));
CREATE UNIQUE INDEX IF NOT EXISTS idx_attendees_email_normalized
    ON attendees (lower(trim("Email")));
"#;

/// Name of the index guarding the email column; appears in constraint errors.
pub const EMAIL_INDEX: &str = "idx_attendees_email_normalized";

pub const INSERT_ATTENDEE: &str = r#"
INSERT INTO attendees ("Name", "Email")
VALUES (?1, ?2)
"#;

pub const SELECT_NAMES: &str = r#"
SELECT "Name"
FROM attendees
ORDER BY id ASC
"#;

pub const SELECT_NAMES_AND_EMAILS: &str = r#"
SELECT "Name", "Email"
FROM attendees
ORDER BY id ASC
"#;
