//! Pretty output formatting.

use gunita_core::attendee::{Attendee, DashboardStats};

use crate::client::attendees::AttendeeList;
use crate::client::event::EventInfo;
use crate::client::health::Readiness;

/// Format the attendee list for display.
pub fn format_attendees(list: &AttendeeList) -> String {
    if let Some(error) = &list.error {
        return format!("Could not load attendees: {error}");
    }
    if list.names.is_empty() {
        return "No one has confirmed yet. Be the first!".to_string();
    }
    let mut output = format!("ATTENDEES ({})\n", list.count);
    output.push_str(&"-".repeat(40));
    for name in &list.names {
        output.push_str(&format!("\n  {name}"));
    }
    output
}

/// Format a confirmed registration.
pub fn format_registered(attendee: &Attendee) -> String {
    format!(
        "Attendance confirmed for {} <{}>. See you there!",
        attendee.name, attendee.email
    )
}

/// Format dashboard figures for display.
pub fn format_dashboard(stats: &DashboardStats) -> String {
    if stats.is_empty() {
        return format!("No one has confirmed yet. (0/{} slots)", stats.capacity);
    }
    let mut output = format!(
        "{} ({}%)\n  Remaining: {}",
        stats.progress_label(),
        stats.percent,
        stats.remaining
    );
    if stats.overflow > 0 {
        output.push_str(&format!(
            "\n  Showing {} avatars +{} more",
            stats.preview, stats.overflow
        ));
    }
    output
}

/// Format event details and the itinerary.
pub fn format_event(info: &EventInfo) -> String {
    let event = &info.event;
    let mut output = format!(
        "{} - {}\n  {}\n  {}\n  {}",
        event.title, event.tagline, event.dates, event.venue, info.countdown
    );
    for day in &event.days {
        output.push_str(&format!("\n\n{}", day.label));
        for item in &day.items {
            let hint = if item.optional { " (optional)" } else { "" };
            output.push_str(&format!("\n  {} {}{}", item.time, item.title, hint));
        }
    }
    output
}

/// Format probe results.
pub fn format_health(live: bool, ready: &Readiness) -> String {
    let mut output = format!(
        "Live: {}\nReady: {} ({}ms)",
        if live { "yes" } else { "no" },
        if ready.healthy { "yes" } else { "no" },
        ready.latency_ms
    );
    if let Some(error) = &ready.error {
        output.push_str(&format!("\n  Error: {error}"));
    }
    output
}
