//! A shelter's working window for one calendar day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::interval::TimeInterval;

/// Absolute opening and closing instants for a single date.
///
/// Built from the shelter's opening/closing time-of-day with no timezone
/// conversion. When `work_start >= work_end` the window is degenerate: it is
/// still a valid value, it just has no capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayWindow {
    pub date: NaiveDate,
    pub work_start: NaiveDateTime,
    pub work_end: NaiveDateTime,
}

impl DayWindow {
    /// Combine `date` with the shelter's opening and closing time-of-day.
    pub fn build(date: NaiveDate, opening: NaiveTime, closing: NaiveTime) -> Self {
        DayWindow {
            date,
            work_start: date.and_time(opening),
            work_end: date.and_time(closing),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.work_start >= self.work_end
    }

    /// The window as an interval; `None` when degenerate.
    pub fn interval(&self) -> Option<TimeInterval> {
        TimeInterval::new(self.work_start, self.work_end)
    }

    /// Working minutes in the day, zero for a degenerate window.
    pub fn capacity_minutes(&self) -> i64 {
        self.interval().map_or(0, |w| w.duration_minutes())
    }
}
