use rstest::rstest;
use slotbook_api::app;

use crate::test_utils::TestContext;

#[rstest]
#[case(&["https://book.example.com"])]
#[case(&["*"])]
#[case(&["*", "https://book.example.com"])]
#[case(&["https://book.example.com", "not a header\n"])]
fn test_app_builds_with_cors_origins(#[case] origins: &[&str]) {
    let state = TestContext::new().with_cors_origins(origins).build_state();

    let _router = app(state);
}

#[test]
fn test_app_builds_without_cors() {
    let state = TestContext::new().build_state();

    let _router = app(state);
}
