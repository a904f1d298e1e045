//! Weekday gating for calendar dates.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::availability::AvailableDaySet;

/// Long English name of a weekday, e.g. `"Monday"`.
///
/// Same text as chrono's `%A`, returned as a `&'static str` so the day-set
/// wire form and rejection messages need no formatting pass.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Inverse of [`weekday_name`]. Matching is exact.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "Monday" => Some(Weekday::Mon),
        "Tuesday" => Some(Weekday::Tue),
        "Wednesday" => Some(Weekday::Wed),
        "Thursday" => Some(Weekday::Thu),
        "Friday" => Some(Weekday::Fri),
        "Saturday" => Some(Weekday::Sat),
        "Sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Whether `date` falls on one of the provider's available weekdays.
pub fn is_date_selectable(date: NaiveDate, available_days: &AvailableDaySet) -> bool {
    available_days.contains(date.weekday())
}

/// Dates in `[start, start + horizon_days)` that pass the day gate, ascending.
pub fn selectable_dates(
    start: NaiveDate,
    horizon_days: u32,
    available_days: &AvailableDaySet,
) -> Vec<NaiveDate> {
    if available_days.is_empty() {
        return Vec::new();
    }

    (0..u64::from(horizon_days))
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .filter(|date| is_date_selectable(*date, available_days))
        .collect()
}
