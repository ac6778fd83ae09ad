// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host process adapter

use super::{ProcessAdapter, ProcessError};
use async_trait::async_trait;
use carousel_core::WorkerId;
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Workers as plain host processes.
///
/// Spawned children inherit the invoking terminal's stdio and are never
/// waited on, so they keep running after this process exits.
#[derive(Debug, Clone, Default)]
pub struct SystemProcessAdapter;

impl SystemProcessAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessAdapter for SystemProcessAdapter {
    async fn spawn(&self, cmd: &str, channel: &Path) -> Result<WorkerId, ProcessError> {
        let mut parts = cmd.split_whitespace();
        let program = parts.next().ok_or_else(|| ProcessError::Spawn {
            cmd: cmd.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty worker command"),
        })?;

        let child = Command::new(program)
            .args(parts)
            .arg(channel)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                cmd: cmd.to_string(),
                source,
            })?;

        let id = WorkerId::new(child.id());
        tracing::debug!(%id, cmd, channel = %channel.display(), "spawned worker");
        Ok(id)
    }

    async fn request_stop(&self, id: WorkerId) -> Result<(), ProcessError> {
        // Id 0 would signal our whole process group.
        if !id.is_set() {
            tracing::debug!("skipping stop for unset worker id");
            return Ok(());
        }

        match kill(Pid::from_raw(id.as_raw() as i32), Signal::SIGINT) {
            Ok(()) => {
                tracing::debug!(%id, "sent SIGINT to worker");
                Ok(())
            }
            // Already gone is the outcome we wanted.
            Err(Errno::ESRCH) => Ok(()),
            Err(errno) => Err(ProcessError::Signal {
                id,
                source: errno.into(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
