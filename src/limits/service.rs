// src/limits/service.rs
//!
//! Limits service - central policy checks and usage recording

use std::sync::Arc;

use tracing::debug;

use crate::session::{SessionState, SessionStats};
use crate::store::{now_ms, SessionStore};

use super::types::{Decision, SessionLimits, RATE_WINDOW_MS};

/// Central guard for the interactive API demos.
///
/// Policy checks (`can_*`) and recording (`record_*`) are deliberately
/// separate calls so the UI can surface a denial message before attempting
/// anything. A second user action can interleave between a check and its
/// record and overshoot a ceiling slightly; the guard is advisory, not a
/// hard limiter.
pub struct DemoLimitsService {
    store: Arc<dyn SessionStore>,
    limits: SessionLimits,
}

impl DemoLimitsService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            limits: SessionLimits::default(),
        }
    }

    pub fn with_limits(store: Arc<dyn SessionStore>, limits: SessionLimits) -> Self {
        Self { store, limits }
    }

    /// Get the configured limits
    pub fn limits(&self) -> &SessionLimits {
        &self.limits
    }

    /// May the visitor create another demo product this session?
    pub fn can_create_product(&self) -> Decision {
        let session = self.store.load();

        if session.product_count >= self.limits.max_products_per_session {
            debug!(
                product_count = session.product_count,
                max = self.limits.max_products_per_session,
                "product creation denied"
            );
            return Decision::deny(format!(
                "Demo limit: Maximum {} products per session",
                self.limits.max_products_per_session
            ));
        }

        Decision::allow()
    }

    /// May another item go into a cart currently holding `current_cart_size`
    /// items?
    pub fn can_add_to_cart(&self, current_cart_size: u32) -> Decision {
        if current_cart_size >= self.limits.max_cart_items {
            debug!(
                current_cart_size,
                max = self.limits.max_cart_items,
                "cart addition denied"
            );
            return Decision::deny(format!(
                "Demo limit: Maximum {} items in cart",
                self.limits.max_cart_items
            ));
        }

        Decision::allow()
    }

    /// May the visitor perform another mutating operation right now?
    ///
    /// Prunes log entries older than the trailing 60s window and writes the
    /// pruned list back so the log cannot grow without bound. The decision
    /// itself is taken on the pruned count.
    pub fn can_perform_operation(&self) -> Decision {
        let mut session = self.store.load();
        let cutoff = now_ms().saturating_sub(RATE_WINDOW_MS);

        let before = session.operations.len();
        session.operations.retain(|&t| t > cutoff);
        if session.operations.len() != before {
            self.store.save(&session);
        }

        if session.operations.len() as u32 >= self.limits.max_operations_per_minute {
            debug!(
                operations = session.operations.len(),
                max = self.limits.max_operations_per_minute,
                "operation denied by rate limit"
            );
            return Decision::deny("Demo limit: Too many operations. Please wait a moment.");
        }

        Decision::allow()
    }

    /// Account for one successfully created product.
    pub fn record_product_creation(&self) {
        let mut session = self.store.load();
        session.product_count += 1;
        self.store.save(&session);
    }

    /// Account for one mutating operation, timestamped now.
    pub fn record_operation(&self) {
        let mut session = self.store.load();
        session.operations.push(now_ms());
        self.store.save(&session);
    }

    /// Clear all counters back to a fresh session.
    pub fn reset_session(&self) {
        debug!("resetting demo session");
        self.store.reset();
    }

    /// Snapshot of live counters and configured ceilings for the usage
    /// indicator.
    pub fn session_stats(&self) -> SessionStats {
        let session = self.store.load();
        let cutoff = now_ms().saturating_sub(RATE_WINDOW_MS);

        SessionStats {
            products_created: session.product_count,
            max_products: self.limits.max_products_per_session,
            max_cart_items: self.limits.max_cart_items,
            operations_this_minute: session.operations_since(cutoff) as u32,
            max_operations_per_minute: self.limits.max_operations_per_minute,
        }
    }

    /// Raw session state, read-only, for diagnostics.
    pub fn session(&self) -> SessionState {
        self.store.load()
    }
}
