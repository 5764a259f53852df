//! Half-open time intervals over absolute (zone-normalized) timestamps.

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

/// A non-empty half-open interval `[start, end)`.
///
/// `start < end` always holds: [`TimeInterval::new`] refuses zero-width and
/// inverted bounds, so a degenerate interval can never reach the merge or gap
/// stages. Ordering is by `start`, then by `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimeInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeInterval {
    /// Build an interval, or `None` when `start >= end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Length of the interval in whole minutes (truncated).
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// True when the two intervals share at least one instant.
    ///
    /// Adjacent intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when one interval ends exactly where the other begins.
    pub fn touches(&self, other: &TimeInterval) -> bool {
        self.end == other.start || other.end == self.start
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn contains_interval(&self, other: &TimeInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The shared part of both intervals, if any.
    pub fn intersection(&self, other: &TimeInterval) -> Option<TimeInterval> {
        TimeInterval::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// Smallest interval covering both `self` and `other`.
    ///
    /// Only meaningful for overlapping or touching intervals; for disjoint ones
    /// the result also covers the gap between them.
    pub fn hull(&self, other: &TimeInterval) -> TimeInterval {
        TimeInterval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 16)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn rejects_zero_width_and_inverted() {
        assert!(TimeInterval::new(at(9, 0), at(9, 0)).is_none());
        assert!(TimeInterval::new(at(10, 0), at(9, 0)).is_none());
        assert!(TimeInterval::new(at(9, 0), at(9, 1)).is_some());
    }

    #[test]
    fn adjacent_intervals_touch_but_do_not_overlap() {
        let a = TimeInterval::new(at(9, 0), at(11, 0)).unwrap();
        let b = TimeInterval::new(at(11, 0), at(13, 0)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.touches(&b));
        assert!(b.touches(&a));
        assert!(a.intersection(&b).is_none());
        assert_eq!(a.hull(&b), TimeInterval::new(at(9, 0), at(13, 0)).unwrap());
    }

    #[test]
    fn contains_is_half_open() {
        let a = TimeInterval::new(at(9, 0), at(11, 0)).unwrap();
        assert!(a.contains(at(9, 0)));
        assert!(a.contains(at(10, 59)));
        assert!(!a.contains(at(11, 0)));
    }

    #[test]
    fn ordering_is_start_then_end() {
        let short = TimeInterval::new(at(9, 0), at(10, 0)).unwrap();
        let long = TimeInterval::new(at(9, 0), at(12, 0)).unwrap();
        let later = TimeInterval::new(at(9, 30), at(9, 45)).unwrap();
        let mut v = vec![later, long, short];
        v.sort();
        assert_eq!(v, vec![short, long, later]);
    }
}
