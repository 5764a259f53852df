//! Intersect busy intervals with a day's working window.
//!
//! A busy interval that merely touches the window (ends at `work_start` or
//! starts at `work_end`) clips to nothing. One that starts at `work_start` or
//! ends at `work_end` is kept up to that edge. A multi-day busy interval is
//! clipped independently against every day it crosses.

use crate::busy::{BusySlot, ClippedBusy};
use crate::day_window::DayWindow;
use crate::interval::TimeInterval;

/// `[max(busy.start, work_start), min(busy.end, work_end))`, or `None` if empty.
///
/// A degenerate window always yields `None`.
pub fn clip(busy: &TimeInterval, window: &DayWindow) -> Option<TimeInterval> {
    TimeInterval::new(
        busy.start().max(window.work_start),
        busy.end().min(window.work_end),
    )
}

/// Clip a tagged slot, keeping its id and source kind.
///
/// Slots with `start >= end` contribute nothing.
pub fn clip_slot(slot: &BusySlot, window: &DayWindow) -> Option<ClippedBusy> {
    let interval = slot.interval()?;
    clip(&interval, window).map(|interval| ClippedBusy {
        id: slot.id(),
        kind: slot.kind(),
        interval,
    })
}
