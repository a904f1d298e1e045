//! # Selection Coordinator
//!
//! Drives the date → from-time → to-time booking flow over a
//! [`SlotSelection`] value. Every transition takes the current selection and
//! returns a [`SelectionUpdate`] holding the next selection together with
//! freshly computed candidate lists, so a widget can re-render from the
//! update alone.
//!
//! Transitions that would break the flow (an unavailable date, a time that is
//! not a current candidate, a to-time before the from-time) are ignored: the
//! update carries the previous selection and the reason, and no error is
//! raised to the caller.
//!
//! The candidate lists in an update are exactly the times the next transition
//! will accept: no from-times before a date is picked, no to-times before a
//! from-time is picked.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::day_gate::{is_date_selectable, weekday_name};
use crate::errors::{TimeError, TimeResult};
use crate::models::availability::{AvailabilityWindow, AvailableDaySet};
use crate::models::selection::{SelectionState, SlotSelection};
use crate::models::time::TimeLabel;
use crate::slots::{is_at_or_before, to_time_candidates};

/// A user action against a booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionAction {
    SelectDate { date: NaiveDate },
    SelectFromTime { time: TimeLabel },
    SelectToTime { time: TimeLabel },
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransitionOutcome {
    Applied,
    /// The action was refused. The returned selection is the incoming one
    /// with any stale parts already dropped, so it can still differ from
    /// what the caller sent.
    Ignored { reason: String },
}

/// Result of a transition: the selection to keep plus what to render next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionUpdate {
    pub selection: SlotSelection,
    pub state: SelectionState,
    pub outcome: TransitionOutcome,
    pub from_candidates: Vec<TimeLabel>,
    pub to_candidates: Vec<TimeLabel>,
}

impl SelectionUpdate {
    pub fn is_applied(&self) -> bool {
        self.outcome == TransitionOutcome::Applied
    }
}

#[derive(Debug, Clone)]
pub struct SelectionCoordinator {
    slots: Vec<TimeLabel>,
    available_days: AvailableDaySet,
}

impl SelectionCoordinator {
    pub fn new(window: &AvailabilityWindow, available_days: AvailableDaySet) -> Self {
        Self::with_slots(window.slots(), available_days)
    }

    /// Uses slots that were already generated for the active window.
    pub fn with_slots(slots: Vec<TimeLabel>, available_days: AvailableDaySet) -> Self {
        Self {
            slots,
            available_days,
        }
    }

    /// Every from-time candidate, in clock order.
    pub fn slots(&self) -> &[TimeLabel] {
        &self.slots
    }

    pub fn available_days(&self) -> &AvailableDaySet {
        &self.available_days
    }

    /// From-time candidates for `selection`: every slot once a date is picked.
    pub fn from_candidates(&self, selection: &SlotSelection) -> Vec<TimeLabel> {
        match selection.date {
            Some(_) => self.slots.clone(),
            None => Vec::new(),
        }
    }

    /// To-time candidates for `selection`: all slots at or after its from-time,
    /// none while no from-time is picked.
    pub fn to_candidates(&self, selection: &SlotSelection) -> Vec<TimeLabel> {
        match selection.from {
            Some(from) => to_time_candidates(&self.slots, Some(&from)),
            None => Vec::new(),
        }
    }

    /// Describes `selection` without changing it.
    pub fn view(&self, selection: SlotSelection) -> SelectionUpdate {
        self.update(self.sanitize(selection), TransitionOutcome::Applied)
    }

    pub fn apply(&self, selection: SlotSelection, action: SelectionAction) -> SelectionUpdate {
        match action {
            SelectionAction::SelectDate { date } => self.select_date(selection, date),
            SelectionAction::SelectFromTime { time } => self.select_from_time(selection, time),
            SelectionAction::SelectToTime { time } => self.select_to_time(selection, time),
            SelectionAction::Reset => self.reset(),
        }
    }

    /// Picks a date. Any previous time choice is cleared.
    pub fn select_date(&self, selection: SlotSelection, date: NaiveDate) -> SelectionUpdate {
        let current = self.sanitize(selection);
        let next = if is_date_selectable(date, &self.available_days) {
            Ok(SlotSelection {
                date: Some(date),
                from: None,
                to: None,
            })
        } else {
            Err(TimeError::InvalidSelection(format!(
                "{} is a {}, which is not an available day",
                date,
                weekday_name(date.weekday())
            )))
        };
        self.settle(current, next)
    }

    /// Picks a from-time. An existing to-time survives only if it is still at
    /// or after the new from-time.
    pub fn select_from_time(&self, selection: SlotSelection, from: TimeLabel) -> SelectionUpdate {
        let current = self.sanitize(selection);
        let next = self.check_from_time(&current, from).map(|()| SlotSelection {
            date: current.date,
            from: Some(from),
            to: current.to.filter(|to| is_at_or_before(&from, to)),
        });
        self.settle(current, next)
    }

    pub fn select_to_time(&self, selection: SlotSelection, to: TimeLabel) -> SelectionUpdate {
        let current = self.sanitize(selection);
        let next = self.check_to_time(&current, to).map(|()| SlotSelection {
            to: Some(to),
            ..current
        });
        self.settle(current, next)
    }

    /// Discards the flow's selection.
    pub fn reset(&self) -> SelectionUpdate {
        self.update(SlotSelection::empty(), TransitionOutcome::Applied)
    }

    fn check_from_time(&self, current: &SlotSelection, from: TimeLabel) -> TimeResult<()> {
        if current.date.is_none() {
            return Err(TimeError::InvalidSelection(
                "a date must be selected before a from-time".to_string(),
            ));
        }
        if !self.slots.contains(&from) {
            return Err(TimeError::InvalidSelection(format!(
                "{from} is not an available start time"
            )));
        }
        Ok(())
    }

    fn check_to_time(&self, current: &SlotSelection, to: TimeLabel) -> TimeResult<()> {
        let Some(from) = current.from else {
            return Err(TimeError::InvalidSelection(
                "a from-time must be selected before a to-time".to_string(),
            ));
        };
        if !self.slots.contains(&to) {
            return Err(TimeError::InvalidSelection(format!(
                "{to} is not an available time"
            )));
        }
        if !is_at_or_before(&from, &to) {
            return Err(TimeError::InvalidSelection(format!(
                "{to} is before the from-time {from}"
            )));
        }
        Ok(())
    }

    // Drops whatever part of an incoming selection no longer fits this
    // provider's days and slots, so a stale value can never yield an
    // inconsistent pair.
    fn sanitize(&self, selection: SlotSelection) -> SlotSelection {
        let date = selection
            .date
            .filter(|date| is_date_selectable(*date, &self.available_days));
        let from = selection
            .from
            .filter(|from| date.is_some() && self.slots.contains(from));
        let to = selection.to.filter(|to| {
            from.is_some_and(|from| self.slots.contains(to) && is_at_or_before(&from, to))
        });

        let sanitized = SlotSelection { date, from, to };
        if sanitized != selection {
            debug!(?selection, ?sanitized, "Dropped stale parts of selection");
        }
        sanitized
    }

    fn settle(&self, current: SlotSelection, next: TimeResult<SlotSelection>) -> SelectionUpdate {
        match next {
            Ok(next) => self.update(next, TransitionOutcome::Applied),
            Err(err) => {
                debug!(error = %err, "Ignoring selection transition");
                self.update(
                    current,
                    TransitionOutcome::Ignored {
                        reason: err.to_string(),
                    },
                )
            }
        }
    }

    fn update(&self, selection: SlotSelection, outcome: TransitionOutcome) -> SelectionUpdate {
        SelectionUpdate {
            state: selection.state(),
            outcome,
            from_candidates: self.from_candidates(&selection),
            to_candidates: self.to_candidates(&selection),
            selection,
        }
    }
}
