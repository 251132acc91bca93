// src/demo/cart.rs
//!
//! E-commerce demo cart, guarded by the session limits

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::limits::DemoLimitsService;

use super::error::DemoError;

/// One line of the demo cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
}

/// Local demo cart. The cart ceiling counts total units across all lines,
/// so adding quantity 3 of one product consumes three slots.
pub struct CartDemo {
    guard: Arc<DemoLimitsService>,
    lines: Mutex<Vec<CartLine>>,
}

impl CartDemo {
    pub fn new(guard: Arc<DemoLimitsService>) -> Self {
        Self {
            guard,
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the cart lines.
    pub fn lines(&self) -> Vec<CartLine> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Total units currently in the cart.
    pub fn total_items(&self) -> u32 {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|l| l.quantity)
            .sum()
    }

    pub fn add_item(&self, product_id: &str, quantity: u32) -> Result<(), DemoError> {
        if quantity == 0 {
            return Err(DemoError::InvalidInput {
                reason: "Quantity must be at least 1".to_string(),
            });
        }

        // Checked against the size the cart would reach; the last unit must
        // still fit under the ceiling.
        let current = self.total_items();
        let can_add = self.guard.can_add_to_cart(current.saturating_add(quantity) - 1);
        if !can_add.allowed {
            return Err(DemoError::from_denied(can_add));
        }
        let can_operate = self.guard.can_perform_operation();
        if !can_operate.allowed {
            return Err(DemoError::from_denied(can_operate));
        }

        self.guard.record_operation();

        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        match lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => line.quantity += quantity,
            None => lines.push(CartLine {
                product_id: product_id.to_string(),
                quantity,
            }),
        }
        Ok(())
    }

    pub fn remove_item(&self, product_id: &str) -> Result<(), DemoError> {
        let can_operate = self.guard.can_perform_operation();
        if !can_operate.allowed {
            return Err(DemoError::from_denied(can_operate));
        }

        self.guard.record_operation();

        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        let before = lines.len();
        lines.retain(|l| l.product_id != product_id);
        if lines.len() == before {
            return Err(DemoError::ProductNotFound {
                id: product_id.to_string(),
            });
        }
        Ok(())
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}
