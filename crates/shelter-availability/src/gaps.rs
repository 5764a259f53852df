//! Subtract merged busy blocks from a working window.

use crate::day_window::DayWindow;
use crate::interval::TimeInterval;

/// Available sub-ranges of `window` not covered by `merged_busy`.
///
/// `merged_busy` must be sorted and disjoint (the output of
/// [`merge`](crate::merge::merge)). Emitted ranges are always contained in the
/// window, sorted, and never zero-width. A degenerate window yields nothing.
pub fn gaps(window: &DayWindow, merged_busy: &[TimeInterval]) -> Vec<TimeInterval> {
    if window.is_degenerate() {
        return Vec::new();
    }

    let mut free = Vec::new();
    let mut cursor = window.work_start;

    for block in merged_busy {
        if cursor >= window.work_end {
            break;
        }
        if let Some(gap) = TimeInterval::new(cursor, block.start().min(window.work_end)) {
            free.push(gap);
        }
        cursor = cursor.max(block.end());
    }

    // Trailing range after the last busy block.
    if let Some(gap) = TimeInterval::new(cursor, window.work_end) {
        free.push(gap);
    }

    free
}
