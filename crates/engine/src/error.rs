// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the rotation engine

use std::io;
use std::path::PathBuf;

use carousel_adapters::{ChannelError, ProcessError};
use carousel_storage::StoreError;
use thiserror::Error;

/// Errors that can occur while rotating the ring
#[derive(Debug, Error)]
pub enum RotateError {
    #[error("invalid ring config: {0}")]
    Config(String),
    #[error("ring is locked by an unfinished swap; tear it down to recover")]
    AlreadyRunning,
    #[error("failed to create ring directory {path}: {source}")]
    Provision { path: PathBuf, source: io::Error },
    #[error("failed to read code source {path}: {source}")]
    Source { path: PathBuf, source: io::Error },
    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),
    #[error("process error: {0}")]
    Process(#[from] ProcessError),
    #[error("state error: {0}")]
    Store(#[from] StoreError),
    #[error("failed to remove ring directory {path}: {source}")]
    Teardown { path: PathBuf, source: io::Error },
}
