//! # shelter-availability
//!
//! Weekly availability engine for animal-fostering shelters.
//!
//! Given a shelter's daily opening hours and two sources of busy time (animal
//! activity reservations and shelter-wide unavailability periods), the engine
//! computes the free sub-intervals of each day across a 7-day window. It is a
//! pure function over already-loaded data: no I/O, no status filtering, no
//! timezone conversion.
//!
//! ## Modules
//!
//! - [`interval`] - Half-open `[start, end)` time intervals
//! - [`busy`] - Tagged busy slots (activity / unavailability)
//! - [`day_window`] - A shelter's working window for one date
//! - [`clip`] - Intersect busy intervals with a working window
//! - [`merge`] - Merge overlapping or touching intervals
//! - [`gaps`] - Subtract busy blocks from a working window
//! - [`week`] - Assemble the 7-day schedule, first-fit search
//! - [`conflict`] - Reservations overlapping unavailability periods
//! - [`request`] - JSON request format used by the front ends
//! - [`error`] - Error types

pub mod busy;
pub mod clip;
pub mod conflict;
pub mod day_window;
pub mod error;
pub mod gaps;
pub mod interval;
pub mod merge;
pub mod request;
pub mod week;

pub use busy::{BusyKind, BusySlot, ClippedBusy};
pub use conflict::{find_conflicts, Conflict};
pub use day_window::DayWindow;
pub use error::AvailabilityError;
pub use interval::TimeInterval;
pub use request::AvailabilityRequest;
pub use week::{
    assemble, find_first_available, AvailableRange, DaySchedule, WeeklySchedule, DAYS_PER_WEEK,
};
