use axum::{Json, extract::State};
use pretty_assertions::assert_eq;
use serde_json::{from_value, json, to_value};
use slotbook_api::handlers::selection::{TransitionRequest, transition};
use slotbook_core::{
    coordinator::{SelectionUpdate, TransitionOutcome},
    models::selection::SelectionState,
};

use crate::test_utils::TestContext;

fn request(selection: serde_json::Value, action: serde_json::Value) -> TransitionRequest {
    from_value(json!({
        "window": { "open": "12:00", "close": "18:00" },
        "available_days": ["Monday", "Wednesday"],
        "selection": selection,
        "action": action,
    }))
    .expect("Failed to deserialize transition request")
}

async fn run(selection: serde_json::Value, action: serde_json::Value) -> SelectionUpdate {
    let state = TestContext::new().build_state();
    let Json(update) = transition(State(state), Json(request(selection, action)))
        .await
        .expect("transition should not fail");
    update
}

#[tokio::test]
async fn test_select_date_on_available_day() {
    let update = run(json!({}), json!({ "type": "select_date", "date": "2026-10-19" })).await;

    assert_eq!(update.state, SelectionState::DateSelected);
    assert_eq!(update.outcome, TransitionOutcome::Applied);
    assert_eq!(update.from_candidates.len(), 7);
    assert!(update.to_candidates.is_empty());
}

#[tokio::test]
async fn test_select_date_on_unavailable_day_is_ignored() {
    let update = run(json!({}), json!({ "type": "select_date", "date": "2026-10-20" })).await;

    assert_eq!(update.state, SelectionState::NoDateSelected);
    assert!(matches!(update.outcome, TransitionOutcome::Ignored { .. }));
}

#[tokio::test]
async fn test_from_time_after_to_time_clears_to_time() {
    let update = run(
        json!({ "date": "2026-10-19", "from": "3:00 PM", "to": "4:00 PM" }),
        json!({ "type": "select_from_time", "time": "5:00 PM" }),
    )
    .await;

    assert_eq!(update.state, SelectionState::FromTimeSelected);
    assert_eq!(
        to_value(update.selection).unwrap(),
        json!({ "date": "2026-10-19", "from": "5:00 PM", "to": null })
    );
}

#[tokio::test]
async fn test_to_candidates_start_at_from_time() {
    let update = run(
        json!({ "date": "2026-10-19" }),
        json!({ "type": "select_from_time", "time": "3:00 PM" }),
    )
    .await;

    assert_eq!(
        to_value(&update.to_candidates).unwrap(),
        json!(["3:00 PM", "4:00 PM", "5:00 PM", "6:00 PM"])
    );
}

#[tokio::test]
async fn test_complete_range_and_reset() {
    let update = run(
        json!({ "date": "2026-10-19", "from": "1:00 PM" }),
        json!({ "type": "select_to_time", "time": "2:00 PM" }),
    )
    .await;
    assert_eq!(update.state, SelectionState::RangeSelected);

    let update = run(to_value(update.selection).unwrap(), json!({ "type": "reset" })).await;
    assert_eq!(update.state, SelectionState::NoDateSelected);
}

#[test]
fn test_request_rejects_malformed_window() {
    let result = from_value::<TransitionRequest>(json!({
        "window": { "open": "noon", "close": "18:00" },
        "action": { "type": "reset" },
    }));

    assert!(result.is_err());
}

#[test]
fn test_update_wire_shape() {
    let state = TestContext::new().build_state();
    let Json(update) = tokio_test::block_on(transition(
        State(state),
        Json(request(json!({}), json!({ "type": "select_date", "date": "2026-10-21" }))),
    ))
    .unwrap();

    let value = to_value(update).unwrap();
    assert_eq!(value["state"], json!("date_selected"));
    assert_eq!(value["outcome"], json!({ "status": "applied" }));
    assert_eq!(value["selection"]["date"], json!("2026-10-21"));
    assert_eq!(value["from_candidates"][0], json!("12:00 PM"));
    assert_eq!(value["to_candidates"], json!([]));
}
