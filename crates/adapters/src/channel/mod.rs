// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Code delivery channel adapters

mod fifo;

pub use fifo::FifoAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ChannelCall, FakeChannelAdapter};

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from channel operations
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("failed to clear stale channel at {path}: {source}")]
    Unlink { path: PathBuf, source: io::Error },
    #[error("failed to create channel at {path}: {source}")]
    Create { path: PathBuf, source: io::Error },
    #[error("failed to deliver code over channel at {path}: {source}")]
    Deliver { path: PathBuf, source: io::Error },
}

/// Adapter for per-slot code delivery channels.
///
/// One channel per ring slot. A worker opens its channel for reading when
/// it starts and consumes whatever arrives; `deliver` does not return until
/// some reader has taken the payload.
#[async_trait]
pub trait ChannelAdapter: Clone + Send + Sync + 'static {
    /// Create a fresh channel at `path`, replacing anything stale left there.
    async fn provision(&self, path: &Path) -> Result<(), ChannelError>;

    /// Write `code` into the channel.
    async fn deliver(&self, path: &Path, code: &[u8]) -> Result<(), ChannelError>;
}
