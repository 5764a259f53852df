//! WASM bindings for shelter-availability.
//!
//! Exposes weekly assembly, first-fit search and conflict detection to
//! JavaScript via `wasm-bindgen`. Requests and results cross the boundary as
//! JSON strings in the format described in `shelter_availability::request`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p shelter-availability-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/shelter-availability-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/shelter_availability_wasm.wasm
//! ```

use serde::Serialize;
use shelter_availability::error::Result as AvailabilityResult;
use shelter_availability::AvailabilityRequest;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON-in / JSON-out cores (plain Rust, testable off-wasm)
// ---------------------------------------------------------------------------

fn to_json<T: Serialize>(value: &T) -> AvailabilityResult<String> {
    Ok(serde_json::to_string(value)?)
}

fn assemble_week_json(request_json: &str) -> AvailabilityResult<String> {
    let request = AvailabilityRequest::from_json(request_json)?;
    to_json(&request.assemble())
}

fn find_first_available_json(
    request_json: &str,
    min_duration_minutes: i64,
) -> AvailabilityResult<String> {
    let schedule = AvailabilityRequest::from_json(request_json)?.assemble();
    to_json(&shelter_availability::find_first_available(
        &schedule,
        min_duration_minutes,
    ))
}

fn find_conflicts_json(request_json: &str) -> AvailabilityResult<String> {
    let request = AvailabilityRequest::from_json(request_json)?;
    to_json(&shelter_availability::find_conflicts(
        &request.activity,
        &request.unavailability,
    ))
}

fn to_js_error(e: shelter_availability::AvailabilityError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the weekly schedule for a JSON request.
///
/// Returns the schedule as a JSON string: `week_start`, `opening_time`,
/// `closing_time` and seven `days`, each with `day_window`, `busy_slots` and
/// `available_ranges`.
#[wasm_bindgen(js_name = "assembleWeek")]
pub fn assemble_week(request_json: &str) -> Result<String, JsValue> {
    assemble_week_json(request_json).map_err(to_js_error)
}

/// First available range of at least `min_duration_minutes`, as JSON (`null`
/// when nothing fits).
#[wasm_bindgen(js_name = "findFirstAvailable")]
pub fn find_first_available(
    request_json: &str,
    min_duration_minutes: i64,
) -> Result<String, JsValue> {
    find_first_available_json(request_json, min_duration_minutes).map_err(to_js_error)
}

/// Reservations in the request overlapping its unavailability periods, as a
/// JSON array of `{activity, unavailability, overlap_minutes}`.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(request_json: &str) -> Result<String, JsValue> {
    find_conflicts_json(request_json).map_err(to_js_error)
}
