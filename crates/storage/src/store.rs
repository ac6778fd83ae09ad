// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State store interface

use std::io;
use std::path::PathBuf;

use carousel_core::RingState;
use thiserror::Error;

/// Errors from loading or persisting ring state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The state file could not be read.
    #[error("failed to read ring state from {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    /// The state file is not valid JSON for a ring state.
    #[error("failed to decode ring state at {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The state decoded but fails its consistency checks.
    #[error("ring state at {path} is inconsistent: {reason}")]
    Invalid { path: PathBuf, reason: String },

    /// The state could not be serialized.
    #[error("failed to encode ring state: {0}")]
    Encode(#[source] serde_json::Error),

    /// The state file could not be written.
    #[error("failed to write ring state to {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

impl StoreError {
    /// True when the failure means "no state has been persisted yet" rather
    /// than a damaged or unreadable file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Load/save access to a ring's persisted state.
///
/// A full snapshot is written on every save. Implementations must return
/// exactly what was last saved, so callers can treat the store as the only
/// source of truth across invocations.
pub trait StateStore: Send + Sync {
    /// Read and validate the persisted state.
    fn load(&self) -> Result<RingState, StoreError>;

    /// Persist a full snapshot, replacing whatever was stored before.
    fn save(&self, state: &RingState) -> Result<(), StoreError>;

    /// Remove any persisted state. Absent state is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}
