//! Merge overlapping or touching busy intervals into maximal disjoint blocks.

use crate::interval::TimeInterval;

/// Sort by start and sweep once, absorbing every interval whose start is at or
/// before the current block's end.
///
/// Touching intervals (`a.end == b.start`) merge, so back-to-back bookings
/// never leave a zero-width gap. The result is sorted, disjoint and
/// non-touching.
pub fn merge(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        if let Some(last) = merged.last_mut() {
            if interval.start() <= last.end() {
                // Overlapping or adjacent - extend the current block.
                *last = last.hull(&interval);
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}
