// src/session/mod.rs
//!
//! Session state persisted for one demo visitor

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Demo-usage counters for one browsing session.
///
/// Persisted as a single JSON object under the `demo_session_data` key.
/// Deserialization is strict: a payload missing any field (or carrying the
/// wrong shape) is rejected as a whole and the store substitutes a fresh
/// state instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Demo products successfully created this session. Only ever grows.
    pub product_count: u32,
    /// Epoch-ms timestamp of every recorded mutating operation, in
    /// insertion (= chronological) order. Entries older than the rate
    /// window are pruned lazily at check time.
    pub operations: Vec<i64>,
    /// Session creation time (epoch ms). Set once, never mutated.
    pub start_time: i64,
}

impl SessionState {
    /// A brand-new session starting now.
    pub fn fresh(now_ms: i64) -> Self {
        Self {
            product_count: 0,
            operations: Vec::new(),
            start_time: now_ms,
        }
    }

    /// Count of recorded operations inside the trailing window ending at
    /// `now_ms`, without mutating the log.
    pub fn operations_since(&self, cutoff_ms: i64) -> usize {
        self.operations.iter().filter(|&&t| t > cutoff_ms).count()
    }
}

/// Read-only usage snapshot for the on-screen indicator ("3/5 products").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub products_created: u32,
    pub max_products: u32,
    pub max_cart_items: u32,
    pub operations_this_minute: u32,
    pub max_operations_per_minute: u32,
}
