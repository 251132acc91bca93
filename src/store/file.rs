// src/store/file.rs
//!
//! File-backed session store

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::session::SessionState;

use super::{now_ms, SessionStore, SESSION_KEY};

/// Persists the session blob as a JSON file inside a data directory.
///
/// Once any read or write against the file fails, the store flips to an
/// in-memory copy for the rest of the process lifetime. Counters keep
/// advancing; they are simply no longer durable. This mirrors how the demo
/// behaves in a browser with storage disabled.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Engaged (Some) only after storage has failed.
    fallback: Mutex<Option<SessionState>>,
}

impl FileSessionStore {
    /// Store under `<data_dir>/demo_session_data.json`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{SESSION_KEY}.json")),
            fallback: Mutex::new(None),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_to_disk(&self, state: &SessionState) -> std::io::Result<()> {
        // Whole-object replacement; no partial-write recovery is needed.
        let json = serde_json::to_vec(state).map_err(std::io::Error::other)?;
        fs::write(&self.path, json)
    }

    fn engage_fallback(&self, state: SessionState, reason: &dyn std::fmt::Display) {
        warn!(path = %self.path.display(), %reason, "session storage unavailable, continuing in memory");
        let mut guard = self.fallback.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(state);
    }

    fn fallback_state(&self) -> Option<SessionState> {
        let guard = self.fallback.lock().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> SessionState {
        if let Some(state) = self.fallback_state() {
            return state;
        }

        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<SessionState>(&bytes) {
                Ok(state) => state,
                Err(e) => {
                    // Corrupt or wrong-shaped payload: discard, start fresh.
                    debug!(path = %self.path.display(), error = %e, "discarding malformed session data");
                    let fresh = SessionState::fresh(now_ms());
                    self.save(&fresh);
                    fresh
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let fresh = SessionState::fresh(now_ms());
                self.save(&fresh);
                fresh
            }
            Err(e) => {
                let fresh = SessionState::fresh(now_ms());
                self.engage_fallback(fresh.clone(), &e);
                fresh
            }
        }
    }

    fn save(&self, state: &SessionState) {
        {
            let mut guard = self.fallback.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(fallback) = guard.as_mut() {
                *fallback = state.clone();
                return;
            }
        }

        if let Err(e) = self.write_to_disk(state) {
            self.engage_fallback(state.clone(), &e);
        }
    }

    fn reset(&self) {
        {
            let mut guard = self.fallback.lock().unwrap_or_else(|e| e.into_inner());
            if guard.is_some() {
                // Stay in memory mode; the file may still hold stale data.
                *guard = Some(SessionState::fresh(now_ms()));
                return;
            }
        }

        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                // Nothing durable to clear; fall back so the next load is fresh.
                self.engage_fallback(SessionState::fresh(now_ms()), &e);
            }
        }
    }
}
