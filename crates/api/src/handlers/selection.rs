//! # Selection Handlers
//!
//! Runs one booking-flow transition. The client sends its current selection
//! along with the provider's window and weekdays, and receives the next
//! selection plus the candidate lists to render. No flow state is kept on
//! the server, so concurrent widgets never share a selection.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use slotbook_core::{
    coordinator::{SelectionAction, SelectionCoordinator, SelectionUpdate},
    models::{
        availability::{AvailabilityWindow, AvailableDaySet},
        selection::SlotSelection,
    },
};

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub window: AvailabilityWindow,
    #[serde(default)]
    pub available_days: AvailableDaySet,
    #[serde(default)]
    pub selection: SlotSelection,
    pub action: SelectionAction,
}

/// Applies a selection action
///
/// # Endpoint
///
/// ```text
/// POST /api/selection/transition
/// {
///   "window": { "open": "12:00", "close": "18:00" },
///   "available_days": ["Monday", "Wednesday"],
///   "selection": { "date": "2026-10-19", "from": "3:00 PM" },
///   "action": { "type": "select_to_time", "time": "5:00 PM" }
/// }
/// ```
///
/// An action the flow cannot accept still answers 200, with an `ignored`
/// outcome and the unchanged selection.
#[axum::debug_handler]
pub async fn transition(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<TransitionRequest>,
) -> Result<Json<SelectionUpdate>, AppError> {
    let slots = state.slot_cache.slots_for(&request.window)?;
    let coordinator = SelectionCoordinator::with_slots(slots.as_ref().clone(), request.available_days);

    Ok(Json(coordinator.apply(request.selection, request.action)))
}
