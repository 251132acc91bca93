// src/store/mod.rs
//!
//! Durable persistence for the demo session state

mod file;
mod memory;


pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use crate::session::SessionState;

/// Storage key for the whole session blob. The file store appends `.json`.
pub const SESSION_KEY: &str = "demo_session_data";

/// Persistence boundary for [`SessionState`].
///
/// Implementations never fail: `load` degrades to a freshly synthesized
/// state when the backing storage is absent, malformed, or unavailable,
/// and `save` is best effort. Consumers therefore never need try/catch
/// style handling around session access.
///
/// The store is injected into the limits service so tests can substitute
/// [`MemorySessionStore`] for the file-backed default.
pub trait SessionStore: Send + Sync {
    /// Returns the persisted state, synthesizing (and persisting) a fresh
    /// one when nothing valid is stored.
    fn load(&self) -> SessionState;

    /// Overwrites the persisted state with a single whole-object write.
    /// Failures are swallowed after logging.
    fn save(&self, state: &SessionState);

    /// Removes the persisted record so the next `load` starts fresh.
    fn reset(&self);
}

/// Current wall-clock time in epoch milliseconds.
///
/// A clock before the Unix epoch degrades to 0 rather than panicking, in
/// line with the never-fail contract of this module.
pub(crate) fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
