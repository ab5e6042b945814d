mod dashboard;
mod duplicates;
mod types;
mod validation;

pub use dashboard::{DashboardStats, DEFAULT_CAPACITY, PREVIEW_LIMIT};
pub use duplicates::{normalize, DuplicateMatch, ExistingAttendees};
pub use types::{Attendee, RegisterRequest};
pub use validation::{validate_registration, ValidationError};
