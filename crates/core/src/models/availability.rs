use std::collections::HashSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::day_gate::{weekday_from_name, weekday_name};
use crate::errors::TimeResult;
use crate::models::time::{TimeLabel, TimeOfDay};
use crate::slots::generate_hourly_slots;

/// A provider's daily open/close boundary, both in 24-hour form.
///
/// Overnight windows (close before open) are not modelled and simply produce
/// no slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl AvailabilityWindow {
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }

    /// Parses both boundaries from `"HH:MM"` strings.
    pub fn parse(open: &str, close: &str) -> TimeResult<Self> {
        Ok(Self {
            open: open.parse()?,
            close: close.parse()?,
        })
    }

    /// Hourly start options for this window.
    pub fn slots(&self) -> Vec<TimeLabel> {
        generate_hourly_slots(&self.open, &self.close)
    }
}

/// Weekdays on which a provider accepts bookings.
///
/// On the wire this is a list of long weekday names (`["Monday", "Friday"]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AvailableDaySet {
    days: HashSet<Weekday>,
}

impl AvailableDaySet {
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }

    /// Builds a set from long weekday names. Names that are not an exact
    /// weekday name can never match a date and are dropped.
    pub fn from_names<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        let days = names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                let day = weekday_from_name(name);
                if day.is_none() {
                    warn!(name, "Ignoring unrecognised weekday name");
                }
                day
            })
            .collect();
        Self { days }
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Member days ordered Monday first.
    pub fn sorted(&self) -> Vec<Weekday> {
        let mut days: Vec<Weekday> = self.days.iter().copied().collect();
        days.sort_by_key(|day| day.num_days_from_monday());
        days
    }
}

impl From<Vec<String>> for AvailableDaySet {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

impl From<AvailableDaySet> for Vec<String> {
    fn from(set: AvailableDaySet) -> Self {
        set.sorted()
            .into_iter()
            .map(|day| weekday_name(day).to_string())
            .collect()
    }
}

impl FromIterator<Weekday> for AvailableDaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::new(iter)
    }
}
