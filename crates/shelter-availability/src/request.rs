//! JSON request format shared by the CLI and WASM front ends.
//!
//! ```json
//! {
//!   "week_start": "2026-03-16",
//!   "opening_time": "09:00",
//!   "closing_time": "18:00",
//!   "activity": [{"id": 1, "start": "2026-03-16T10:00:00", "end": "2026-03-16T12:00:00"}],
//!   "unavailability": []
//! }
//! ```
//!
//! Slots listed under `activity` become [`BusySlot::Activity`], those under
//! `unavailability` become [`BusySlot::Unavailability`]; both lists are
//! optional.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;

use crate::busy::BusySlot;
use crate::error::{AvailabilityError, Result};
use crate::week::{self, WeeklySchedule};

#[derive(Deserialize)]
struct RequestDto {
    week_start: String,
    opening_time: String,
    closing_time: String,
    #[serde(default)]
    activity: Vec<SlotDto>,
    #[serde(default)]
    unavailability: Vec<SlotDto>,
}

#[derive(Deserialize)]
struct SlotDto {
    id: u64,
    start: String,
    end: String,
}

/// A fully parsed availability request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub week_start: NaiveDate,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub activity: Vec<BusySlot>,
    pub unavailability: Vec<BusySlot>,
}

impl AvailabilityRequest {
    /// Parse a request from its JSON representation.
    ///
    /// # Errors
    /// Returns `AvailabilityError::Json` for malformed JSON or missing fields,
    /// and the matching `Invalid*` variant for an unparseable date, time of day
    /// or timestamp.
    pub fn from_json(json: &str) -> Result<Self> {
        let dto: RequestDto = serde_json::from_str(json)?;

        let activity = dto
            .activity
            .iter()
            .map(|s| {
                Ok(BusySlot::activity(
                    s.id,
                    parse_datetime(&s.start)?,
                    parse_datetime(&s.end)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        let unavailability = dto
            .unavailability
            .iter()
            .map(|s| {
                Ok(BusySlot::unavailability(
                    s.id,
                    parse_datetime(&s.start)?,
                    parse_datetime(&s.end)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(AvailabilityRequest {
            week_start: parse_date(&dto.week_start)?,
            opening_time: parse_time_of_day(&dto.opening_time)?,
            closing_time: parse_time_of_day(&dto.closing_time)?,
            activity,
            unavailability,
        })
    }

    /// Run the weekly assembly for this request.
    pub fn assemble(&self) -> WeeklySchedule {
        week::assemble(
            self.week_start,
            self.opening_time,
            self.closing_time,
            &self.activity,
            &self.unavailability,
        )
    }
}

/// Parse a time of day in `HH:MM` or `HH:MM:SS` form.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| AvailabilityError::InvalidTimeOfDay(format!("'{}': {}", s, e)))
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| AvailabilityError::InvalidDate(format!("'{}': {}", s, e)))
}

/// Parse a timestamp.
///
/// Accepts RFC 3339 (converted to UTC, then taken as wall-clock time) and
/// naive `YYYY-MM-DDTHH:MM[:SS]`, which is taken as already normalized.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc).naive_utc());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| AvailabilityError::InvalidDateTime(format!("'{}': {}", s, e)))
}
