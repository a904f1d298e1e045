use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::time::TimeLabel;

/// In-progress choice of date, from-time and to-time for one booking flow.
///
/// A selection is a plain value: the coordinator takes one in and hands a new
/// one back, and each booking widget keeps its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSelection {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub from: Option<TimeLabel>,
    #[serde(default)]
    pub to: Option<TimeLabel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    NoDateSelected,
    DateSelected,
    FromTimeSelected,
    RangeSelected,
}

impl SlotSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        match (self.date, self.from, self.to) {
            (None, _, _) => SelectionState::NoDateSelected,
            (Some(_), None, _) => SelectionState::DateSelected,
            (Some(_), Some(_), None) => SelectionState::FromTimeSelected,
            (Some(_), Some(_), Some(_)) => SelectionState::RangeSelected,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == SelectionState::RangeSelected
    }
}
