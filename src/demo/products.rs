// src/demo/products.rs
//!
//! Product management demo - guarded CRUD against the simulated catalog

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::limits::DemoLimitsService;

use super::error::{BackendError, DemoError};

/// A demo catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Fields the demo form submits for create and edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ProductDraft {
    /// Same validation the demo form applies before submitting.
    fn validate(&self) -> Result<(), DemoError> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return Err(DemoError::InvalidInput {
                reason: "All fields are required".to_string(),
            });
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(DemoError::InvalidInput {
                reason: "Price must be a positive number".to_string(),
            });
        }
        Ok(())
    }

    fn build(&self, id: String) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
        }
    }
}

/// The companion demo API, reduced to the calls the product widget makes.
pub trait ProductBackend: Send + Sync {
    fn create(&self, draft: &ProductDraft) -> Result<Product, BackendError>;
    fn update(&self, id: &str, draft: &ProductDraft) -> Result<Product, BackendError>;
    fn delete(&self, id: &str) -> Result<(), BackendError>;
}

/// In-memory stand-in for the demo backend. `set_offline` makes every call
/// fail with a network error, which the consumer answers with its local
/// fallback.
#[derive(Debug, Default)]
pub struct SimulatedBackend {
    products: Mutex<HashMap<String, Product>>,
    offline: AtomicBool,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), BackendError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(BackendError::Unreachable {
                service: "products".to_string(),
            });
        }
        Ok(())
    }
}

impl ProductBackend for SimulatedBackend {
    fn create(&self, draft: &ProductDraft) -> Result<Product, BackendError> {
        self.check_online()?;
        let product = draft.build(uuid::Uuid::new_v4().to_string());
        let mut products = self.products.lock().unwrap_or_else(|e| e.into_inner());
        products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    fn update(&self, id: &str, draft: &ProductDraft) -> Result<Product, BackendError> {
        self.check_online()?;
        let mut products = self.products.lock().unwrap_or_else(|e| e.into_inner());
        match products.get_mut(id) {
            Some(existing) => {
                *existing = draft.build(id.to_string());
                Ok(existing.clone())
            }
            None => Err(BackendError::NotFound { id: id.to_string() }),
        }
    }

    fn delete(&self, id: &str) -> Result<(), BackendError> {
        self.check_online()?;
        let mut products = self.products.lock().unwrap_or_else(|e| e.into_inner());
        match products.remove(id) {
            Some(_) => Ok(()),
            None => Err(BackendError::NotFound { id: id.to_string() }),
        }
    }
}

/// Drives the product management demo.
///
/// Every mutation follows the same sequence as the original widget: quota
/// checks first, one operation recorded before the attempt, and product
/// creation accounted only after it actually succeeded.
pub struct ProductsDemo {
    guard: Arc<DemoLimitsService>,
    backend: Arc<dyn ProductBackend>,
    local: Mutex<Vec<Product>>,
}

impl ProductsDemo {
    pub fn new(guard: Arc<DemoLimitsService>, backend: Arc<dyn ProductBackend>) -> Self {
        Self {
            guard,
            backend,
            local: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the locally known catalog.
    pub fn products(&self) -> Vec<Product> {
        self.local.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn create(&self, draft: ProductDraft) -> Result<Product, DemoError> {
        let can_create = self.guard.can_create_product();
        if !can_create.allowed {
            return Err(DemoError::from_denied(can_create));
        }
        let can_operate = self.guard.can_perform_operation();
        if !can_operate.allowed {
            return Err(DemoError::from_denied(can_operate));
        }
        draft.validate()?;

        self.guard.record_operation();

        let product = match self.backend.create(&draft) {
            Ok(product) => product,
            Err(e) => {
                // Keep the demo usable without the backend: the product
                // exists only in local state.
                warn!(error = %e, "product backend unreachable, creating locally");
                draft.build(uuid::Uuid::new_v4().to_string())
            }
        };

        let mut local = self.local.lock().unwrap_or_else(|e| e.into_inner());
        local.push(product.clone());
        self.guard.record_product_creation();
        Ok(product)
    }

    pub fn update(&self, id: &str, draft: ProductDraft) -> Result<Product, DemoError> {
        let can_operate = self.guard.can_perform_operation();
        if !can_operate.allowed {
            return Err(DemoError::from_denied(can_operate));
        }
        draft.validate()?;

        self.guard.record_operation();

        match self.backend.update(id, &draft) {
            Ok(product) => {
                self.replace_local(product.clone());
                Ok(product)
            }
            Err(BackendError::NotFound { id }) => Err(DemoError::ProductNotFound { id }),
            Err(e) => {
                warn!(error = %e, "product backend unreachable, updating locally");
                let mut local = self.local.lock().unwrap_or_else(|e| e.into_inner());
                match local.iter_mut().find(|p| p.id == id) {
                    Some(existing) => {
                        *existing = draft.build(id.to_string());
                        Ok(existing.clone())
                    }
                    None => Err(DemoError::ProductNotFound { id: id.to_string() }),
                }
            }
        }
    }

    pub fn delete(&self, id: &str) -> Result<(), DemoError> {
        let can_operate = self.guard.can_perform_operation();
        if !can_operate.allowed {
            return Err(DemoError::from_denied(can_operate));
        }

        self.guard.record_operation();

        match self.backend.delete(id) {
            Ok(()) => {
                self.remove_local(id);
                Ok(())
            }
            Err(BackendError::NotFound { id }) => {
                self.remove_local(&id);
                Err(DemoError::ProductNotFound { id })
            }
            Err(e) => {
                warn!(error = %e, "product backend unreachable, deleting locally");
                let mut local = self.local.lock().unwrap_or_else(|e| e.into_inner());
                let before = local.len();
                local.retain(|p| p.id != id);
                if local.len() == before {
                    return Err(DemoError::ProductNotFound { id: id.to_string() });
                }
                Ok(())
            }
        }
    }

    fn replace_local(&self, product: Product) {
        let mut local = self.local.lock().unwrap_or_else(|e| e.into_inner());
        match local.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => local.push(product),
        }
    }

    fn remove_local(&self, id: &str) {
        let mut local = self.local.lock().unwrap_or_else(|e| e.into_inner());
        local.retain(|p| p.id != id);
    }
}
