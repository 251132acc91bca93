// src/demo/mod.rs
//!
//! Consumer services for the interactive API demos
//!
//! Thin wrappers that drive the simulated product catalog and e-commerce
//! cart through the demo limits guard: policy check first, usage recorded
//! before the attempt, and a fallback to purely local state when the demo
//! backend is unreachable so the widgets stay usable.

mod cart;
mod error;
mod products;


pub use cart::{CartDemo, CartLine};
pub use error::{BackendError, DemoError};
pub use products::{Product, ProductBackend, ProductDraft, ProductsDemo, SimulatedBackend};
