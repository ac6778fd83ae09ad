// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake process adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ProcessAdapter, ProcessError};
use async_trait::async_trait;
use carousel_core::WorkerId;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded process call
#[derive(Debug, Clone)]
pub enum ProcessCall {
    Spawn { cmd: String, channel: PathBuf },
    RequestStop { id: WorkerId },
}

/// Fake worker state
#[derive(Debug, Clone)]
pub struct FakeWorker {
    pub cmd: String,
    pub channel: PathBuf,
    pub running: bool,
}

/// Fake process adapter for testing.
///
/// Hands out sequential ids starting at 4301 so assertions read like real
/// pids.
#[derive(Clone, Default)]
pub struct FakeProcessAdapter {
    workers: Arc<Mutex<HashMap<WorkerId, FakeWorker>>>,
    calls: Arc<Mutex<Vec<ProcessCall>>>,
    next_id: Arc<Mutex<u32>>,
    fail_spawn: Arc<Mutex<bool>>,
}

impl FakeProcessAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ProcessCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Get a worker by id
    pub fn get_worker(&self, id: WorkerId) -> Option<FakeWorker> {
        self.workers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
    }

    /// Ids of workers that are still running, in spawn order.
    pub fn running(&self) -> Vec<WorkerId> {
        let mut ids: Vec<WorkerId> = self
            .workers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|(_, w)| w.running)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_by_key(|id| id.as_raw());
        ids
    }

    /// Make the next `spawn` calls fail.
    pub fn fail_spawn(&self) {
        *self.fail_spawn.lock().unwrap_or_else(|e| e.into_inner()) = true;
    }
}

#[async_trait]
impl ProcessAdapter for FakeProcessAdapter {
    async fn spawn(&self, cmd: &str, channel: &Path) -> Result<WorkerId, ProcessError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ProcessCall::Spawn {
                cmd: cmd.to_string(),
                channel: channel.to_path_buf(),
            });

        if *self.fail_spawn.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(ProcessError::Spawn {
                cmd: cmd.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "injected failure"),
            });
        }

        let id = {
            let mut next = self.next_id.lock().unwrap_or_else(|e| e.into_inner());
            *next += 1;
            WorkerId::new(4300 + *next)
        };

        self.workers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(
                id,
                FakeWorker {
                    cmd: cmd.to_string(),
                    channel: channel.to_path_buf(),
                    running: true,
                },
            );

        Ok(id)
    }

    async fn request_stop(&self, id: WorkerId) -> Result<(), ProcessError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ProcessCall::RequestStop { id });

        // Unknown or unset ids are absorbed, mirroring SIGINT to a pid that
        // is already gone.
        if let Some(worker) = self
            .workers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_mut(&id)
        {
            worker.running = false;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
