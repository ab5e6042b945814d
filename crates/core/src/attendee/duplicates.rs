//! Case-insensitive duplicate detection against the rows already stored.

use std::collections::HashSet;

use crate::storage::AttendeeRow;

/// Canonical form used for comparisons: trimmed and lower-cased.
///
/// Lower-casing is Unicode aware, so `"ÉLODIE"` and `"élodie"` collide.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Which column a submitted registration collided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateMatch {
    Name,
    Email,
    NameAndEmail,
}

/// Normalized names and emails of every stored row.
#[derive(Debug, Clone, Default)]
pub struct ExistingAttendees {
    names: HashSet<String>,
    emails: HashSet<String>,
}

impl ExistingAttendees {
    /// Builds the lookup sets. Absent or blank columns are skipped.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a AttendeeRow>) -> Self {
        let mut existing = Self::default();
        for row in rows {
            if let Some(name) = row.name.as_deref().map(normalize).filter(|n| !n.is_empty()) {
                existing.names.insert(name);
            }
            if let Some(email) = row.email.as_deref().map(normalize).filter(|e| !e.is_empty()) {
                existing.emails.insert(email);
            }
        }
        existing
    }

    /// Returns the collision, if any, for a submitted pair.
    pub fn find_duplicate(&self, name: &str, email: &str) -> Option<DuplicateMatch> {
        let name_taken = self.names.contains(&normalize(name));
        let email_taken = self.emails.contains(&normalize(email));
        match (name_taken, email_taken) {
            (true, true) => Some(DuplicateMatch::NameAndEmail),
            (true, false) => Some(DuplicateMatch::Name),
            (false, true) => Some(DuplicateMatch::Email),
            (false, false) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.emails.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> ExistingAttendees {
        let rows = vec![
            AttendeeRow::new("Ana", "ana@x.com"),
            AttendeeRow {
                name: Some("  Carlo ".to_string()),
                email: None,
            },
            AttendeeRow {
                name: None,
                email: Some("ghost@x.com".to_string()),
            },
        ];
        ExistingAttendees::from_rows(&rows)
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  ANA@X.Com "), "ana@x.com");
        assert_eq!(normalize("ÉLODIE"), "élodie");
    }

    #[test]
    fn test_duplicate_by_name_is_case_insensitive() {
        assert_eq!(
            existing().find_duplicate("ANA", "other@y.com"),
            Some(DuplicateMatch::Name)
        );
    }

    #[test]
    fn test_duplicate_by_email_is_case_insensitive() {
        assert_eq!(
            existing().find_duplicate("Different", "ANA@X.COM"),
            Some(DuplicateMatch::Email)
        );
    }

    #[test]
    fn test_duplicate_on_both_columns() {
        assert_eq!(
            existing().find_duplicate(" ana ", "Ana@x.com"),
            Some(DuplicateMatch::NameAndEmail)
        );
    }

    #[test]
    fn test_stored_whitespace_is_ignored() {
        assert_eq!(
            existing().find_duplicate("carlo", "carlo@x.com"),
            Some(DuplicateMatch::Name)
        );
    }

    #[test]
    fn test_rows_with_missing_columns_still_count() {
        assert_eq!(
            existing().find_duplicate("Ghost", "GHOST@x.com"),
            Some(DuplicateMatch::Email)
        );
    }

    #[test]
    fn test_new_pair_is_not_duplicate() {
        assert_eq!(existing().find_duplicate("Bea", "bea@z.com"), None);
    }

    #[test]
    fn test_empty_store() {
        let existing = ExistingAttendees::from_rows(&Vec::<AttendeeRow>::new());
        assert!(existing.is_empty());
        assert_eq!(existing.find_duplicate("Bea", "bea@z.com"), None);
    }
}
