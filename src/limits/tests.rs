// src/limits/tests.rs
//!
//! Tests for demo quota policy and recording

use std::sync::Arc;

use super::*;
use crate::session::SessionState;
use crate::store::{now_ms, MemorySessionStore, SessionStore};

fn service() -> DemoLimitsService {
    DemoLimitsService::new(Arc::new(MemorySessionStore::new()))
}

fn service_with_state(state: SessionState) -> DemoLimitsService {
    DemoLimitsService::new(Arc::new(MemorySessionStore::with_state(state)))
}

#[test]
fn test_fresh_session_allows_product_creation() {
    let service = service();
    assert!(service.can_create_product().is_allowed());
}

#[test]
fn test_product_count_tracks_recorded_creations() {
    let service = service();

    for expected in 1..=3 {
        service.record_product_creation();
        assert_eq!(service.session().product_count, expected);
    }
}

#[test]
fn test_product_creation_denied_at_ceiling() {
    let service = service();

    for _ in 0..5 {
        assert!(service.can_create_product().is_allowed());
        service.record_product_creation();
    }

    let decision = service.can_create_product();
    assert!(!decision.is_allowed());
    assert_eq!(
        decision.message.as_deref(),
        Some("Demo limit: Maximum 5 products per session")
    );
}

#[test]
fn test_cart_ceiling_boundary() {
    let service = service();

    for n in 0..10 {
        assert!(service.can_add_to_cart(n).is_allowed(), "size {n}");
    }

    let decision = service.can_add_to_cart(10);
    assert!(!decision.is_allowed());
    assert_eq!(
        decision.message.as_deref(),
        Some("Demo limit: Maximum 10 items in cart")
    );
    assert!(!service.can_add_to_cart(11).is_allowed());
}

#[test]
fn test_operations_allowed_below_rate_limit() {
    let service = service();

    for _ in 0..14 {
        service.record_operation();
    }

    assert!(service.can_perform_operation().is_allowed());
}

#[test]
fn test_operations_denied_at_rate_limit() {
    let service = service();

    for _ in 0..15 {
        service.record_operation();
    }

    let decision = service.can_perform_operation();
    assert!(!decision.is_allowed());
    assert_eq!(
        decision.message.as_deref(),
        Some("Demo limit: Too many operations. Please wait a moment.")
    );
}

#[test]
fn test_operations_allowed_again_after_window_expires() {
    // Seed a log where all 15 entries fell out of the 60s window.
    let now = now_ms();
    let stale: Vec<i64> = (0..15).map(|i| now - 61_000 - i).collect();
    let service = service_with_state(SessionState {
        product_count: 0,
        operations: stale,
        start_time: now - 120_000,
    });

    assert!(service.can_perform_operation().is_allowed());
}

#[test]
fn test_window_counts_only_recent_entries() {
    // 10 stale entries and 10 recent ones: only the recent ones count,
    // and 10 < 15 so the operation is allowed.
    let now = now_ms();
    let mut operations: Vec<i64> = (0..10).map(|i| now - 90_000 - i).collect();
    operations.extend((0..10).map(|i| now - 1_000 - i));
    let service = service_with_state(SessionState {
        product_count: 0,
        operations,
        start_time: now - 120_000,
    });

    assert!(service.can_perform_operation().is_allowed());
    assert_eq!(service.session_stats().operations_this_minute, 10);
}

#[test]
fn test_check_prunes_expired_entries_from_store() {
    let now = now_ms();
    let store = Arc::new(MemorySessionStore::with_state(SessionState {
        product_count: 0,
        operations: vec![now - 90_000, now - 1_000],
        start_time: now - 120_000,
    }));
    let service = DemoLimitsService::new(Arc::clone(&store) as Arc<dyn SessionStore>);

    service.can_perform_operation();

    // The expired entry was written back out of the persisted log.
    assert_eq!(store.load().operations.len(), 1);
}

#[test]
fn test_checks_do_not_consume_quota() {
    let service = service();

    for _ in 0..50 {
        assert!(service.can_create_product().is_allowed());
        assert!(service.can_perform_operation().is_allowed());
    }

    assert_eq!(service.session_stats().operations_this_minute, 0);
    assert_eq!(service.session_stats().products_created, 0);
}

#[test]
fn test_reset_session_clears_counters() {
    let service = service();

    service.record_product_creation();
    service.record_operation();
    service.reset_session();
    service.reset_session();

    let session = service.session();
    assert_eq!(session.product_count, 0);
    assert!(session.operations.is_empty());
    assert!(service.can_create_product().is_allowed());
}

#[test]
fn test_session_stats_snapshot() {
    let service = service();

    service.record_product_creation();
    service.record_product_creation();
    service.record_product_creation();
    service.record_operation();
    service.record_operation();

    let stats = service.session_stats();
    assert_eq!(stats.products_created, 3);
    assert_eq!(stats.max_products, 5);
    assert_eq!(stats.max_cart_items, 10);
    assert_eq!(stats.operations_this_minute, 2);
    assert_eq!(stats.max_operations_per_minute, 15);
}

#[test]
fn test_custom_limits() {
    let service = DemoLimitsService::with_limits(
        Arc::new(MemorySessionStore::new()),
        SessionLimits {
            max_products_per_session: 1,
            max_cart_items: 2,
            max_operations_per_minute: 3,
        },
    );

    service.record_product_creation();
    assert!(!service.can_create_product().is_allowed());

    assert!(service.can_add_to_cart(1).is_allowed());
    assert!(!service.can_add_to_cart(2).is_allowed());

    for _ in 0..3 {
        service.record_operation();
    }
    assert!(!service.can_perform_operation().is_allowed());
}
