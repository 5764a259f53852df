//! Detect reservations that overlap shelter unavailability periods.
//!
//! Read-only diagnostics over already-loaded busy slots. Adjacent slots (one
//! ends exactly when the other starts) are NOT conflicts.

use serde::Serialize;

use crate::busy::BusySlot;

/// An activity reservation overlapping an unavailability period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub activity: BusySlot,
    pub unavailability: BusySlot,
    pub overlap_minutes: i64,
}

/// Find all pairwise overlaps between `activity` and `unavailability` slots.
///
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
/// Degenerate slots (`start >= end`) never conflict.
pub fn find_conflicts(activity: &[BusySlot], unavailability: &[BusySlot]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for a in activity {
        let Some(a_interval) = a.interval() else {
            continue;
        };
        for b in unavailability {
            let Some(overlap) = b
                .interval()
                .and_then(|b_interval| a_interval.intersection(&b_interval))
            else {
                continue;
            };
            conflicts.push(Conflict {
                activity: *a,
                unavailability: *b,
                overlap_minutes: overlap.duration_minutes(),
            });
        }
    }

    conflicts
}
