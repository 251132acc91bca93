// src/store/memory.rs
//!
//! In-memory session store for tests and storage-less embedders

use std::sync::Mutex;

use crate::session::SessionState;

use super::{now_ms, SessionStore};

/// Keeps the session state in process memory only.
///
/// Used as the injected fake in tests and as the fallback target when no
/// writable data directory exists.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    state: Mutex<Option<SessionState>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the store pre-seeded, letting tests shape timestamps freely.
    pub fn with_state(state: SessionState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> SessionState {
        let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
        guard
            .get_or_insert_with(|| SessionState::fresh(now_ms()))
            .clone()
    }

    fn save(&self, state: &SessionState) {
        let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(state.clone());
    }

    fn reset(&self) {
        let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}
