// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker process adapters

mod system;

pub use system::SystemProcessAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessAdapter, FakeWorker, ProcessCall};

use async_trait::async_trait;
use carousel_core::WorkerId;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors from process operations
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to spawn worker `{cmd}`: {source}")]
    Spawn { cmd: String, source: io::Error },
    #[error("failed to signal worker {id}: {source}")]
    Signal { id: WorkerId, source: io::Error },
}

/// Adapter for worker process lifecycle.
///
/// Workers outlive the invocation that starts them; the returned id is all
/// later invocations have to reach them with.
#[async_trait]
pub trait ProcessAdapter: Clone + Send + Sync + 'static {
    /// Start a worker process reading from `channel`.
    async fn spawn(&self, cmd: &str, channel: &Path) -> Result<WorkerId, ProcessError>;

    /// Ask a worker to stop. A worker that is already gone counts as
    /// stopped; unset ids are skipped outright.
    async fn request_stop(&self, id: WorkerId) -> Result<(), ProcessError>;
}
