use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single slot in the itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryItem {
    /// Display time, e.g. `"2:00 PM"`.
    pub time: String,
    pub title: String,
    /// Free-form lines shown under the title.
    #[serde(default)]
    pub details: Vec<String>,
    /// Optional activities are rendered with a "totally optional" hint.
    #[serde(default)]
    pub optional: bool,
}

impl ItineraryItem {
    pub fn new(time: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            title: title.into(),
            details: Vec::new(),
            optional: false,
        }
    }

    /// Appends a detail line.
    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// e.g. `"Day 1: August 30, 2025 (Saturday)"`.
    pub label: String,
    pub items: Vec<ItineraryItem>,
}

impl ItineraryDay {
    pub fn new(label: impl Into<String>, items: Vec<ItineraryItem>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// Everything the page shows about the event apart from the attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub title: String,
    pub tagline: String,
    /// Human readable date range, e.g. `"August 30–31, 2025"`.
    pub dates: String,
    pub venue: String,
    /// Arrival time, used for the countdown.
    pub starts_at: DateTime<FixedOffset>,
    pub days: Vec<ItineraryDay>,
    pub reminders: Vec<String>,
}
