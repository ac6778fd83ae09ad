// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed state store

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use carousel_core::RingState;

use crate::store::{StateStore, StoreError};

/// Single-file JSON store: the whole ring state in one document.
///
/// Saving replaces the file outright (remove, then write fresh) so a
/// leftover from an older, larger ring can never bleed into a shorter
/// snapshot.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonStore {
    fn load(&self) -> Result<RingState, StoreError> {
        let bytes = fs::read(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let state: RingState =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;
        state.check().map_err(|reason| StoreError::Invalid {
            path: self.path.clone(),
            reason,
        })?;
        Ok(state)
    }

    fn save(&self, state: &RingState) -> Result<(), StoreError> {
        self.clear()?;
        let bytes = serde_json::to_vec(state).map_err(StoreError::Encode)?;
        fs::write(&self.path, bytes).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
