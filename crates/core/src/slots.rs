//! # Slot Generation
//!
//! Turns a provider's open/close window into the hourly start options shown
//! to customers, and orders those labels for range filtering.
//!
//! The first slot is the open hour when the open time is on the hour,
//! otherwise the next whole hour. Slots continue one hour apart up to and
//! including the close hour. The close minute never drops the close hour
//! itself, so a `14:30` close still offers `2:00 PM`.

use crate::errors::TimeResult;
use crate::models::time::{TimeLabel, TimeOfDay};

/// Generates the hourly start labels for a window.
///
/// Returns an empty list when the rounded-up start hour is past the close
/// hour, or lands on the close hour with an open minute later than the close
/// minute.
pub fn generate_hourly_slots(open: &TimeOfDay, close: &TimeOfDay) -> Vec<TimeLabel> {
    let start_hour = if open.minute() == 0 {
        open.hour()
    } else {
        open.hour() + 1
    };
    let close_hour = close.hour();

    if start_hour > close_hour || (start_hour == close_hour && open.minute() > close.minute()) {
        return Vec::new();
    }

    (start_hour..=close_hour).map(TimeLabel::on_the_hour).collect()
}

/// Parses `"HH:MM"` boundaries and generates their slots.
///
/// # Errors
///
/// * `TimeError::InvalidTimeFormat` - either boundary is not a valid `HH:MM`
pub fn generate_hourly_slots_str(open: &str, close: &str) -> TimeResult<Vec<TimeLabel>> {
    let open: TimeOfDay = open.parse()?;
    let close: TimeOfDay = close.parse()?;
    Ok(generate_hourly_slots(&open, &close))
}

/// True when `a` falls at or before `b` on the clock.
pub fn is_at_or_before(a: &TimeLabel, b: &TimeLabel) -> bool {
    a.minutes_since_midnight() <= b.minutes_since_midnight()
}

/// The slots a to-time may be chosen from once `from` is picked.
///
/// With no from-time every slot is a candidate.
pub fn to_time_candidates(slots: &[TimeLabel], from: Option<&TimeLabel>) -> Vec<TimeLabel> {
    match from {
        Some(from) => slots
            .iter()
            .filter(|candidate| is_at_or_before(from, candidate))
            .copied()
            .collect(),
        None => slots.to_vec(),
    }
}
