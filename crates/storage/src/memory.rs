// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory state store for testing

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use carousel_core::RingState;

use crate::store::{StateStore, StoreError};

/// In-memory fake store. Clones share the same cell, so a test can keep a
/// handle for assertions while the orchestrator owns another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<Option<RingState>>>,
    saves: Arc<Mutex<u32>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a state, as if a prior invocation had persisted it.
    pub fn seed(&self, state: RingState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = Some(state);
    }

    /// The currently stored state, if any.
    pub fn snapshot(&self) -> Option<RingState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> u32 {
        *self.saves.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<RingState, StoreError> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .ok_or_else(|| StoreError::Read {
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::NotFound, "no state stored"),
            })
    }

    fn save(&self, state: &RingState) -> Result<(), StoreError> {
        *self.saves.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
