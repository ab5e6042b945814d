use serde::{Deserialize, Serialize};

/// Number of slots available when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 30;

/// Maximum number of avatar icons shown before collapsing into "+N more".
pub const PREVIEW_LIMIT: usize = 10;

/// Fill-rate figures derived from the attendee count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub attending: usize,
    pub capacity: usize,
    /// Fraction of capacity filled, clamped to `0.0..=1.0` for progress bars.
    pub fill_ratio: f64,
    /// Whole percentage of capacity filled, may exceed 100 when overbooked.
    pub percent: u32,
    pub remaining: usize,
    /// Number of avatar icons to draw.
    pub preview: usize,
    /// Attendees not represented by an icon.
    pub overflow: usize,
}

impl DashboardStats {
    /// Computes the stats for `attending` confirmed attendees.
    ///
    /// A zero capacity yields a ratio of `1.0` as soon as anyone attends.
    pub fn compute(attending: usize, capacity: usize) -> Self {
        let raw_ratio = match (attending, capacity) {
            (0, _) => 0.0,
            (_, 0) => 1.0,
            (a, c) => a as f64 / c as f64,
        };
        let preview = attending.min(PREVIEW_LIMIT);

        Self {
            attending,
            capacity,
            fill_ratio: raw_ratio.clamp(0.0, 1.0),
            percent: (raw_ratio * 100.0).round() as u32,
            remaining: capacity.saturating_sub(attending),
            preview,
            overflow: attending - preview,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attending == 0
    }

    pub fn is_full(&self) -> bool {
        self.attending >= self.capacity
    }

    /// Progress caption, e.g. `"12/30 slots filled"`.
    pub fn progress_label(&self) -> String {
        format!("{}/{} slots filled", self.attending, self.capacity)
    }
}
