use axum::http::StatusCode;
use rstest::rstest;
use slotbook_api::middleware::error_handling::{AppError, map_error};
use slotbook_core::errors::TimeError;

#[rstest]
#[case(TimeError::InvalidTimeFormat("expected HH:MM".to_string()), StatusCode::BAD_REQUEST)]
#[case(TimeError::InvalidSelection("not a slot".to_string()), StatusCode::BAD_REQUEST)]
#[case(TimeError::Internal(eyre::eyre!("lock poisoned")), StatusCode::INTERNAL_SERVER_ERROR)]
#[tokio::test]
async fn test_error_status_mapping(#[case] error: TimeError, #[case] status: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), status);
}

#[tokio::test]
async fn test_error_body_is_json_message() {
    let response = map_error(TimeError::InvalidTimeFormat("expected HH:MM, got \"noon\"".to_string()));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        value,
        serde_json::json!({ "error": "Invalid time format: expected HH:MM, got \"noon\"" })
    );
}

#[test]
fn test_app_error_conversions() {
    let from_time: AppError = TimeError::InvalidSelection("bad".to_string()).into();
    assert!(matches!(from_time.0, TimeError::InvalidSelection(_)));

    let from_report: AppError = eyre::eyre!("boom").into();
    assert!(matches!(from_report.0, TimeError::Internal(_)));
}
