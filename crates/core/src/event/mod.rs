mod content;
mod countdown;
mod types;

pub use countdown::Countdown;
pub use types::{EventDetails, ItineraryDay, ItineraryItem};
