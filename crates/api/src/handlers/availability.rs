//! # Availability Handlers
//!
//! Read-only views of a provider's availability for the booking widgets:
//! the hourly start options for a window, whether a given date can be
//! picked, and which dates in an upcoming range can be picked.
//!
//! Provider data (open/close times and working weekdays) arrives with each
//! request; nothing is stored server-side apart from the slot cache.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use slotbook_core::{
    day_gate::{is_date_selectable, selectable_dates, weekday_name},
    models::{
        availability::{AvailabilityWindow, AvailableDaySet},
        time::{TimeLabel, TimeOfDay},
    },
};

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for the slot listing endpoint
///
/// * `open` - Provider open time, `HH:MM`
/// * `close` - Provider close time, `HH:MM`
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub open: String,
    pub close: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
    pub slots: Vec<TimeLabel>,
}

/// Lists the hourly start options for a window
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/slots?open=09:30&close=17:00
/// ```
///
/// # Errors
///
/// * `TimeError::InvalidTimeFormat` - `open` or `close` is not `HH:MM`
#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let window = AvailabilityWindow::parse(&query.open, &query.close)?;
    let slots = state.slot_cache.slots_for(&window)?;

    Ok(Json(SlotsResponse {
        open: window.open,
        close: window.close,
        slots: slots.as_ref().clone(),
    }))
}

/// Query parameters for the single-date check
///
/// * `date` - Calendar date, `YYYY-MM-DD`
/// * `days` - Comma-separated weekday names, e.g. `Monday,Friday`
#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: NaiveDate,
    pub days: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayResponse {
    pub date: NaiveDate,
    pub weekday: String,
    pub selectable: bool,
}

/// Reports whether a date falls on one of the provider's weekdays
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/day?date=2026-10-19&days=Monday,Friday
/// ```
#[axum::debug_handler]
pub async fn check_day(Query(query): Query<DayQuery>) -> Json<DayResponse> {
    let days = parse_day_names(query.days.as_deref());

    Json(DayResponse {
        date: query.date,
        weekday: weekday_name(query.date.weekday()).to_string(),
        selectable: is_date_selectable(query.date, &days),
    })
}

/// Query parameters for the selectable-dates listing
///
/// * `days` - Comma-separated weekday names
/// * `start` - First date to consider (default: today, UTC)
/// * `horizon` - Number of days to cover (default and maximum: configured horizon)
#[derive(Debug, Deserialize)]
pub struct DatesQuery {
    pub days: Option<String>,
    pub start: Option<NaiveDate>,
    pub horizon: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatesResponse {
    pub start: NaiveDate,
    pub horizon: u32,
    pub dates: Vec<NaiveDate>,
}

/// Lists the dates a calendar widget should enable
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/dates?days=Monday,Friday&start=2026-10-19&horizon=14
/// ```
#[axum::debug_handler]
pub async fn list_dates(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<DatesQuery>,
) -> Json<DatesResponse> {
    let days = parse_day_names(query.days.as_deref());
    let start = query.start.unwrap_or_else(|| Utc::now().date_naive());
    let max_horizon = state.config.max_horizon_days;
    let horizon = query.horizon.unwrap_or(max_horizon).min(max_horizon);

    Json(DatesResponse {
        start,
        horizon,
        dates: selectable_dates(start, horizon, &days),
    })
}

/// Splits a comma-separated weekday list. A missing list is an empty set.
pub fn parse_day_names(days: Option<&str>) -> AvailableDaySet {
    match days {
        Some(days) => AvailableDaySet::from_names(
            days.split(',').map(str::trim).filter(|name| !name.is_empty()),
        ),
        None => AvailableDaySet::default(),
    }
}
