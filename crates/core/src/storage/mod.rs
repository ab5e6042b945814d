mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::AttendeeStore;
pub use types::{AttendeeRow, NewAttendee, Projection, ATTENDEES_TABLE, EMAIL_COLUMN, NAME_COLUMN};
