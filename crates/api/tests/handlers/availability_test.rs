use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_api::handlers::availability::*;
use slotbook_core::errors::TimeError;

use crate::test_utils::{TestContext, monday};

fn labels(response: &SlotsResponse) -> Vec<String> {
    response.slots.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn test_list_slots_for_partial_hour_window() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let query = SlotsQuery {
        open: "18:44".to_string(),
        close: "20:43".to_string(),
    };

    let response = list_slots(State(state.clone()), Query(query)).await.unwrap();

    assert_eq!(labels(&response), vec!["7:00 PM", "8:00 PM"]);
    assert_eq!(response.open.to_string(), "18:44");
    assert_eq!(state.slot_cache.len(), 1);
}

#[tokio::test]
async fn test_list_slots_empty_when_start_rounds_past_close() {
    let state = TestContext::new().build_state();

    let query = SlotsQuery {
        open: "09:30".to_string(),
        close: "09:00".to_string(),
    };

    let response = list_slots(State(state), Query(query)).await.unwrap();

    assert!(response.slots.is_empty());
}

#[tokio::test]
async fn test_list_slots_invalid_time_is_bad_request() {
    let state = TestContext::new().build_state();

    let query = SlotsQuery {
        open: "nine".to_string(),
        close: "17:00".to_string(),
    };

    let err = list_slots(State(state), Query(query)).await.unwrap_err();

    assert!(matches!(err.0, TimeError::InvalidTimeFormat(_)));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[case(19, Some("Monday"), "Monday", true)]
#[case(20, Some("Monday,Wednesday"), "Tuesday", false)]
#[case(21, Some(" Monday , Wednesday "), "Wednesday", true)]
#[case(19, None, "Monday", false)]
#[tokio::test]
async fn test_check_day(
    #[case] day: u32,
    #[case] days: Option<&str>,
    #[case] weekday: &str,
    #[case] selectable: bool,
) {
    let query = DayQuery {
        date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
        days: days.map(str::to_string),
    };

    let response = check_day(Query(query)).await;

    assert_eq!(response.weekday, weekday);
    assert_eq!(response.selectable, selectable);
}

#[tokio::test]
async fn test_list_dates_within_horizon() {
    let state = TestContext::new().build_state();

    let query = DatesQuery {
        days: Some("Monday,Friday".to_string()),
        start: Some(monday()),
        horizon: Some(14),
    };

    let response = list_dates(State(state), Query(query)).await;

    let expected: Vec<NaiveDate> = [19, 23, 26, 30]
        .into_iter()
        .map(|day| NaiveDate::from_ymd_opt(2026, 10, day).unwrap())
        .collect();
    assert_eq!(response.horizon, 14);
    assert_eq!(response.dates, expected);
}

#[tokio::test]
async fn test_list_dates_caps_horizon() {
    let state = TestContext::new().with_max_horizon(7).build_state();

    let query = DatesQuery {
        days: Some("Monday".to_string()),
        start: Some(monday()),
        horizon: Some(365),
    };

    let response = list_dates(State(state), Query(query)).await;

    assert_eq!(response.horizon, 7);
    assert_eq!(response.dates, vec![monday()]);
}

#[test]
fn test_parse_day_names() {
    let days = parse_day_names(Some("Monday,,Someday,Friday"));
    assert_eq!(days.len(), 2);
    assert!(parse_day_names(None).is_empty());
}
