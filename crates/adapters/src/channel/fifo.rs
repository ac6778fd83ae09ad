// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named-pipe channel adapter

use super::{ChannelAdapter, ChannelError};
use async_trait::async_trait;
use nix::sys::stat::Mode;
use std::io;
use std::path::Path;

/// Channels backed by POSIX named pipes (FIFOs).
///
/// Provisioning unlinks any stale node first; a FIFO left over from an
/// earlier ring would otherwise be reused with no reader behind it.
#[derive(Debug, Clone, Default)]
pub struct FifoAdapter;

impl FifoAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChannelAdapter for FifoAdapter {
    async fn provision(&self, path: &Path) -> Result<(), ChannelError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(ChannelError::Unlink {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }

        // 0644: workers only read, the orchestrator writes.
        let mode = Mode::S_IRUSR | Mode::S_IWUSR | Mode::S_IRGRP | Mode::S_IROTH;
        nix::unistd::mkfifo(path, mode).map_err(|errno| ChannelError::Create {
            path: path.to_path_buf(),
            source: errno.into(),
        })?;

        tracing::debug!(path = %path.display(), "provisioned channel");
        Ok(())
    }

    async fn deliver(&self, path: &Path, code: &[u8]) -> Result<(), ChannelError> {
        // Opening a FIFO for writing parks until a reader shows up, so this
        // returns only once a worker has the payload.
        tokio::fs::write(path, code)
            .await
            .map_err(|source| ChannelError::Deliver {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), bytes = code.len(), "delivered code");
        Ok(())
    }
}

#[cfg(test)]
#[path = "fifo_tests.rs"]
mod tests;
