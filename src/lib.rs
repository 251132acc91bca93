// src/lib.rs
//!
//! calanco-demo-limits
//!
//! Session quota and rate-limit guard behind the interactive API demos of
//! the Calanco portfolio. The guard is advisory: it protects the shared
//! demo environment from runaway visitors and produces a realistic
//! "rate limited" UX, while a companion backend may enforce its own
//! independent limits.
//!
//! The subsystem never fails: storage problems degrade to an in-memory
//! session, malformed data is replaced by a fresh one, and a quota denial
//! is a normal [`limits::Decision`] value rather than an error.

pub mod demo;
pub mod limits;
pub mod session;
pub mod store;

pub use limits::{Decision, DemoLimitsService, SessionLimits};
pub use session::{SessionState, SessionStats};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
