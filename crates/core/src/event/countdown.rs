use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Time left until the event starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Countdown {
    Upcoming { days: i64, hours: i64, minutes: i64 },
    Started,
}

impl Countdown {
    /// Computes the countdown from `now` to `start`, truncating to minutes.
    pub fn until<A: TimeZone, B: TimeZone>(start: &DateTime<A>, now: &DateTime<B>) -> Self {
        let remaining = start.fixed_offset() - now.fixed_offset();
        if remaining <= chrono::TimeDelta::zero() {
            return Countdown::Started;
        }
        let minutes_total = remaining.num_minutes();
        Countdown::Upcoming {
            days: minutes_total / (24 * 60),
            hours: (minutes_total / 60) % 24,
            minutes: minutes_total % 60,
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, Countdown::Started)
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Countdown::Upcoming {
                days,
                hours,
                minutes,
            } => write!(f, "{days}d {hours}h {minutes}m to go"),
            Countdown::Started => write!(f, "The reunion is on!"),
        }
    }
}
