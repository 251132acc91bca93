// src/limits/types.rs
//!
//! Common type definitions for demo usage limits

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sliding window for the operations-per-minute limit, in milliseconds.
pub const RATE_WINDOW_MS: i64 = 60_000;

/// Demo session limits
#[derive(Debug, Clone)]
pub struct SessionLimits {
    /// Hard ceiling on demo product creation per session (default: 5)
    pub max_products_per_session: u32,
    /// Hard ceiling on total items the demo cart may hold (default: 10)
    pub max_cart_items: u32,
    /// Mutating operations allowed inside the trailing 60s window (default: 15)
    pub max_operations_per_minute: u32,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_products_per_session: 5,
            max_cart_items: 10,
            max_operations_per_minute: 15,
        }
    }
}

/// Outcome of a quota check.
///
/// Denial is a normal value, never an error: `message` is present only when
/// `allowed` is false and is meant for direct display to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            message: None,
        }
    }

    pub fn deny(message: impl Into<String>) -> Self {
        Self {
            allowed: false,
            message: Some(message.into()),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }
}
