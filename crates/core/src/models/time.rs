//! Wall-clock values used by the slot engine.
//!
//! Two textual forms exist: the 24-hour `"HH:MM"` form providers use for their
//! open and close times ([`TimeOfDay`]), and the 12-hour `"H:MM AM"` form shown
//! to customers ([`TimeLabel`]). Generated slots are always whole hours, so a
//! label produced by the generator always ends in `:00`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{TimeError, TimeResult};

/// A provider boundary time in 24-hour form, e.g. `"18:44"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Builds a time from an hour in `0..=23` and a minute in `0..=59`.
    pub fn from_hm(hour: u32, minute: u32) -> TimeResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| {
                TimeError::InvalidTimeFormat(format!("{hour:02}:{minute:02} is not a valid time"))
            })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        let invalid = || TimeError::InvalidTimeFormat(format!("expected HH:MM, got {s:?}"));

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour = parse_clock_component(hour).ok_or_else(invalid)?;
        let minute = parse_clock_component(minute).ok_or_else(invalid)?;

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeError;

    fn try_from(value: String) -> TimeResult<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A 12-hour display label such as `"7:00 PM"`.
///
/// Stored as a 24-hour hour/minute pair so that the derived ordering is clock
/// order. Midnight displays as `12:00 AM` and noon as `12:00 PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeLabel {
    hour: u8,
    minute: u8,
}

impl TimeLabel {
    /// Label for the start of a whole hour, `hour` in `0..=23`.
    pub(crate) fn on_the_hour(hour: u32) -> Self {
        debug_assert!(hour < 24, "hour out of range: {hour}");
        Self {
            hour: hour as u8,
            minute: 0,
        }
    }

    /// Hour on the 24-hour clock.
    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl FromStr for TimeLabel {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        let invalid = || TimeError::InvalidTimeFormat(format!("expected H:MM AM/PM, got {s:?}"));

        let (clock, meridiem) = s.trim().split_once(char::is_whitespace).ok_or_else(invalid)?;
        let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
        let hour = parse_clock_component(hour).ok_or_else(invalid)?;
        let minute = parse_clock_component(minute).ok_or_else(invalid)?;

        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(invalid());
        }

        let meridiem = meridiem.trim();
        let hour = if meridiem.eq_ignore_ascii_case("AM") {
            if hour == 12 { 0 } else { hour }
        } else if meridiem.eq_ignore_ascii_case("PM") {
            if hour == 12 { 12 } else { hour + 12 }
        } else {
            return Err(invalid());
        };

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }
}

impl TryFrom<String> for TimeLabel {
    type Error = TimeError;

    fn try_from(value: String) -> TimeResult<Self> {
        value.parse()
    }
}

impl From<TimeLabel> for String {
    fn from(label: TimeLabel) -> Self {
        label.to_string()
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (display_hour, meridiem) = match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(f, "{}:{:02} {}", display_hour, self.minute, meridiem)
    }
}

// One or two ASCII digits. Signs and whitespace are rejected.
fn parse_clock_component(raw: &str) -> Option<u32> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
