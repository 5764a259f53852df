//! Assemble a 7-day availability schedule for one animal at one shelter.
//!
//! For each date of the week the shelter's working window is built, every busy
//! slot from both sources is clipped against it, the clips are merged
//! regardless of source, and the gaps left in the window become that day's
//! available ranges. The raw (clipped, tagged) busy slots are kept alongside so
//! callers can explain why a period is unavailable.
//!
//! Nothing here can fail. Degenerate shelter hours give a day with no
//! availability and degenerate busy slots are ignored.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::busy::{BusySlot, ClippedBusy};
use crate::clip::clip_slot;
use crate::day_window::DayWindow;
use crate::gaps::gaps;
use crate::interval::TimeInterval;
use crate::merge::merge;

/// Number of consecutive dates in a [`WeeklySchedule`].
pub const DAYS_PER_WEEK: u64 = 7;

/// A free sub-range of one day's working window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AvailableRange {
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
}

impl AvailableRange {
    fn from_interval(date: NaiveDate, interval: TimeInterval) -> Self {
        AvailableRange {
            date,
            start: interval.start(),
            end: interval.end(),
            duration_minutes: interval.duration_minutes(),
        }
    }

    pub fn interval(&self) -> Option<TimeInterval> {
        TimeInterval::new(self.start, self.end)
    }
}

/// Availability for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub day_window: DayWindow,
    /// Busy slots that intersect the window, clipped to it, in input order.
    pub busy_slots: Vec<ClippedBusy>,
    /// Free ranges, sorted by start, pairwise non-overlapping and non-touching.
    pub available_ranges: Vec<AvailableRange>,
}

impl DaySchedule {
    /// The day's busy time as maximal disjoint blocks, sources merged.
    pub fn merged_busy(&self) -> Vec<TimeInterval> {
        let clips: Vec<TimeInterval> = self.busy_slots.iter().map(|c| c.interval).collect();
        merge(&clips)
    }

    pub fn available_minutes(&self) -> i64 {
        self.available_ranges.iter().map(|r| r.duration_minutes).sum()
    }

    pub fn is_fully_booked(&self) -> bool {
        self.available_ranges.is_empty()
    }
}

/// Seven consecutive [`DaySchedule`]s starting at `week_start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySchedule {
    pub week_start: NaiveDate,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub days: Vec<DaySchedule>,
}

impl WeeklySchedule {
    pub fn day(&self, date: NaiveDate) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn total_available_minutes(&self) -> i64 {
        self.days.iter().map(DaySchedule::available_minutes).sum()
    }

    /// All available ranges of the week in chronological order.
    pub fn available_ranges(&self) -> impl Iterator<Item = &AvailableRange> {
        self.days.iter().flat_map(|d| d.available_ranges.iter())
    }
}

/// Build one day's schedule from the slots of both sources.
pub fn assemble_day<'a, I>(
    date: NaiveDate,
    opening: NaiveTime,
    closing: NaiveTime,
    slots: I,
) -> DaySchedule
where
    I: IntoIterator<Item = &'a BusySlot>,
{
    let window = DayWindow::build(date, opening, closing);
    if window.is_degenerate() {
        debug!(%date, %opening, %closing, "degenerate working window, no availability");
    }

    let busy_slots: Vec<ClippedBusy> = slots
        .into_iter()
        .filter_map(|slot| {
            if slot.interval().is_none() {
                trace!(id = slot.id(), kind = ?slot.kind(), "ignoring busy slot with start >= end");
            }
            clip_slot(slot, &window)
        })
        .collect();

    let clips: Vec<TimeInterval> = busy_slots.iter().map(|c| c.interval).collect();
    let merged = merge(&clips);
    let available_ranges: Vec<AvailableRange> = gaps(&window, &merged)
        .into_iter()
        .map(|gap| AvailableRange::from_interval(date, gap))
        .collect();

    trace!(
        %date,
        clipped = busy_slots.len(),
        merged = merged.len(),
        available = available_ranges.len(),
        "assembled day"
    );

    DaySchedule {
        date,
        day_window: window,
        busy_slots,
        available_ranges,
    }
}

/// Compute the weekly availability for `week_start ..= week_start + 6`.
///
/// `activity` holds active reservations for the animal, `unavailability` the
/// shelter's unavailable periods. Both are clipped per day, so a slot spanning
/// several days contributes a fragment to each of them.
pub fn assemble(
    week_start: NaiveDate,
    opening: NaiveTime,
    closing: NaiveTime,
    activity: &[BusySlot],
    unavailability: &[BusySlot],
) -> WeeklySchedule {
    debug!(
        %week_start,
        %opening,
        %closing,
        activity = activity.len(),
        unavailability = unavailability.len(),
        "assembling weekly schedule"
    );

    let mut days = Vec::with_capacity(DAYS_PER_WEEK as usize);
    for offset in 0..DAYS_PER_WEEK {
        let Some(date) = week_start.checked_add_days(Days::new(offset)) else {
            warn!(%week_start, offset, "date out of range, truncating week");
            break;
        };
        days.push(assemble_day(
            date,
            opening,
            closing,
            activity.iter().chain(unavailability),
        ));
    }

    WeeklySchedule {
        week_start,
        opening_time: opening,
        closing_time: closing,
        days,
    }
}

/// The earliest available range in the week lasting at least
/// `min_duration_minutes`.
pub fn find_first_available(
    schedule: &WeeklySchedule,
    min_duration_minutes: i64,
) -> Option<&AvailableRange> {
    schedule
        .available_ranges()
        .find(|range| range.duration_minutes >= min_duration_minutes)
}
