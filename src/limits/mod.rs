// src/limits/mod.rs
//!
//! Demo usage limits - quota policy and recording
//!
//! Soft, advisory ceilings on what a visitor can do against the shared demo
//! environment: products created per session, items in the demo cart, and a
//! sliding-window rate limit on all mutating operations.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::DemoLimitsService;
pub use types::{Decision, SessionLimits, RATE_WINDOW_MS};
