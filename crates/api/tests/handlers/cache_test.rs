use std::sync::Arc;

use axum::extract::State;
use slotbook_api::{cache::SlotCache, routes::health::health_check};
use slotbook_core::models::availability::AvailabilityWindow;

use crate::test_utils::TestContext;

#[test]
fn test_cache_reuses_generated_slots() {
    let cache = SlotCache::new();
    let window = AvailabilityWindow::parse("09:00", "12:00").unwrap();

    let first = cache.slots_for(&window).unwrap();
    let second = cache.slots_for(&window).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), 4);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_keys_on_both_boundaries() {
    let cache = SlotCache::new();
    assert!(cache.is_empty());

    cache
        .slots_for(&AvailabilityWindow::parse("09:00", "12:00").unwrap())
        .unwrap();
    cache
        .slots_for(&AvailabilityWindow::parse("09:00", "12:30").unwrap())
        .unwrap();
    cache
        .slots_for(&AvailabilityWindow::parse("09:15", "12:00").unwrap())
        .unwrap();

    assert_eq!(cache.len(), 3);
}

#[test]
fn test_cache_evicts_oldest_window_at_capacity() {
    let cache = SlotCache::with_capacity(2);
    let first = AvailabilityWindow::parse("09:00", "12:00").unwrap();
    let second = AvailabilityWindow::parse("10:00", "12:00").unwrap();
    let third = AvailabilityWindow::parse("11:00", "12:00").unwrap();

    cache.slots_for(&first).unwrap();
    cache.slots_for(&second).unwrap();
    let slots = cache.slots_for(&third).unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(cache.len(), 2);
    assert!(!cache.contains(&first));
    assert!(cache.contains(&second));
    assert!(cache.contains(&third));
}

#[test]
fn test_cache_stays_bounded_under_many_windows() {
    let cache = SlotCache::with_capacity(16);

    for hour in 0..24 {
        for minute in [0, 15, 30, 45] {
            let open = format!("{hour:02}:{minute:02}");
            let window = AvailabilityWindow::parse(&open, "23:59").unwrap();
            cache.slots_for(&window).unwrap();
        }
    }

    assert_eq!(cache.len(), 16);
}

#[test]
fn test_zero_capacity_still_generates_slots() {
    let cache = SlotCache::with_capacity(0);
    let window = AvailabilityWindow::parse("09:00", "12:00").unwrap();

    assert_eq!(cache.slots_for(&window).unwrap().len(), 4);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_health_reports_cached_windows() {
    let state = TestContext::new().build_state();
    state
        .slot_cache
        .slots_for(&AvailabilityWindow::parse("08:00", "10:00").unwrap())
        .unwrap();

    let response = health_check(State(state)).await;

    assert_eq!(response.status, "ok");
    assert_eq!(response.cached_windows, 1);
    assert_eq!(response.cache_capacity, 256);
}

#[tokio::test]
async fn test_state_uses_configured_capacity() {
    let state = TestContext::new().with_cache_capacity(1).build_state();
    for close in ["10:00", "11:00", "12:00"] {
        state
            .slot_cache
            .slots_for(&AvailabilityWindow::parse("08:00", close).unwrap())
            .unwrap();
    }

    let response = health_check(State(state)).await;

    assert_eq!(response.cached_windows, 1);
    assert_eq!(response.cache_capacity, 1);
}
