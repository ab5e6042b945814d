mod error;
mod http_mapping;
mod service;

pub use error::{ErrorKind, RegistrationError};
pub use http_mapping::registration_error_to_status_code;
pub use service::{AttendeeListing, RegistrationService};
