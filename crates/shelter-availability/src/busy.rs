//! Busy periods from the two sources the engine consumes.
//!
//! Both sources are pre-filtered by the caller: only reservations in the
//! active/reserved state and unavailability records in the unavailable state
//! are ever turned into a [`BusySlot`]. The engine does not look at statuses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::interval::TimeInterval;

/// Where a busy period came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyKind {
    /// An animal-activity reservation.
    Activity,
    /// A shelter-wide unavailability period.
    Unavailability,
}

/// A raw busy period as loaded from storage.
///
/// Bounds are kept as given; a slot with `start >= end` is legal here and
/// simply contributes nothing (see [`BusySlot::interval`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BusySlot {
    Activity {
        id: u64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    Unavailability {
        id: u64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl BusySlot {
    pub fn activity(id: u64, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        BusySlot::Activity { id, start, end }
    }

    pub fn unavailability(id: u64, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        BusySlot::Unavailability { id, start, end }
    }

    pub fn kind(&self) -> BusyKind {
        match self {
            BusySlot::Activity { .. } => BusyKind::Activity,
            BusySlot::Unavailability { .. } => BusyKind::Unavailability,
        }
    }

    /// Identifier of the originating reservation or unavailability record.
    pub fn id(&self) -> u64 {
        match *self {
            BusySlot::Activity { id, .. } | BusySlot::Unavailability { id, .. } => id,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        match *self {
            BusySlot::Activity { start, .. } | BusySlot::Unavailability { start, .. } => start,
        }
    }

    pub fn end(&self) -> NaiveDateTime {
        match *self {
            BusySlot::Activity { end, .. } | BusySlot::Unavailability { end, .. } => end,
        }
    }

    /// The slot's bounds as a [`TimeInterval`], or `None` for a degenerate slot.
    pub fn interval(&self) -> Option<TimeInterval> {
        TimeInterval::new(self.start(), self.end())
    }
}

/// The part of a [`BusySlot`] that falls inside one day's working window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClippedBusy {
    pub id: u64,
    pub kind: BusyKind,
    #[serde(flatten)]
    pub interval: TimeInterval,
}
