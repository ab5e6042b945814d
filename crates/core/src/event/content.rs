//! Content for the GunitaTawanan 2025 reunion.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use super::{EventDetails, ItineraryDay, ItineraryItem};

/// Philippine time, UTC+08:00.
const MANILA: FixedOffset = match FixedOffset::east_opt(8 * 3600) {
    Some(offset) => offset,
    None => panic!("UTC+08:00 is out of range"),
};

/// Arrival, 2:00 PM on August 30 2025 in Manila, as a UTC timestamp.
const ARRIVAL_UTC: NaiveDateTime = match (
    NaiveDate::from_ymd_opt(2025, 8, 30),
    NaiveTime::from_hms_opt(6, 0, 0),
) {
    (Some(date), Some(time)) => NaiveDateTime::new(date, time),
    _ => panic!("arrival is not a valid timestamp"),
};

impl EventDetails {
    /// The reunion this site was built for.
    pub fn gunita_tawanan_2025() -> Self {
        let starts_at = DateTime::from_naive_utc_and_offset(ARRIVAL_UTC, MANILA);

        Self {
            title: "GunitaTawanan 2025".to_string(),
            tagline: "Your Ultimate Chill Reunion".to_string(),
            dates: "August 30–31, 2025".to_string(),
            venue: "New Era Association | One Spatial Iloilo".to_string(),
            starts_at,
            days: vec![day_one(), day_two()],
            reminders: vec![
                "Bring essentials, themed attire, food contributions, and your best tawa or \
                 “chill lang” energy"
                    .to_string(),
                "This is a safe, no-pressure, “be yourself” reunion. Rest if you want, join \
                 the fun if you want!"
                    .to_string(),
            ],
        }
    }
}

fn day_one() -> ItineraryDay {
    ItineraryDay::new(
        "Day 1: August 30, 2025 (Saturday)",
        vec![
            ItineraryItem::new("2:00 PM", "Arrival & Check-in")
                .detail("Registration at lobby")
                .detail("Welcome drinks")
                .detail("Room assignment & quick orientation"),
            ItineraryItem::new("2:30 PM", "Settling In & Free Time")
                .detail("Unpack, settle, take photos, vibe check"),
            ItineraryItem::new("3:30 PM", "Opening Program")
                .detail("Welcome remarks")
                .detail("Light icebreaker (e.g., “Find Someone Who…”)")
                .detail("Reminders: just chill, respect everyone’s comfort"),
            ItineraryItem::new("4:30 PM", "Merienda & Chill Catch-up")
                .detail("Snacks and drinks")
                .detail("Catch-up conversations, no forced grouping")
                .detail("Playlist plays in the background"),
            ItineraryItem::new("5:30 PM", "Gentle Group Activity")
                .detail("One group activity: e.g., “Guess the Throwback Photo”")
                .optional(),
            ItineraryItem::new("6:00 PM", "Free Time / Room Prep")
                .detail("Relax, get ready for dinner, pajama/loungewear if you want"),
            ItineraryItem::new("7:00 PM", "Dinner")
                .detail("Buy or order dinner, any cuisine that suits your palate")
                .detail("Long-table setup for shared stories and laughter"),
            ItineraryItem::new("8:00 PM", "Debrief & Reflection Night")
                .detail("How’s everyone really doing?")
                .detail("Memorable moments: personal, career, life updates")
                .detail("What we miss, what we look forward to as a group")
                .detail("Open mic for anything, big or small")
                .detail("Parallel zone: nap, doomscroll, board games or cards"),
            ItineraryItem::new("10:00 PM", "Open Socials")
                .detail("Pajama/lounge hangout")
                .detail("Movie or music")
                .detail("“Tambay” corners and late night snacks"),
            ItineraryItem::new("12:00 MN", "Wind Down").detail(
                "Quiet hours begin, but the “barkada” room stays open for late-night convos",
            ),
        ],
    )
}

fn day_two() -> ItineraryDay {
    ItineraryDay::new(
        "Day 2: August 31, 2025 (Sunday)",
        vec![
            ItineraryItem::new("7:00 AM", "Chill Wake-up & Breakfast")
                .detail("Self-serve breakfast, coffee, and chill conversations"),
            ItineraryItem::new("8:00 AM", "Light Morning Activity")
                .detail("Stretching, walk, or just tambay by the pool/garden")
                .optional(),
            ItineraryItem::new("9:30 AM", "Free Time")
                .detail("Swim, pack up, photos, last-minute chika"),
            ItineraryItem::new("10:30 AM", "Brunch & Closing")
                .detail("Group brunch")
                .detail("“Letter to Future Self”")
                .detail("Feedback and suggestions for next time")
                .detail("Final group picture, thank yous, and send-offs"),
            ItineraryItem::new("12:00 NN", "Checkout / Departure"),
        ],
    )
}
