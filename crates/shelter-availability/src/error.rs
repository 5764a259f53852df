//! Error types for the request-parsing boundary.
//!
//! The availability engine itself is total; only turning caller-supplied text
//! (JSON, dates, times-of-day) into typed values can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
