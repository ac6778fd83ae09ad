// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ring location and worker launch configuration

use std::path::PathBuf;

/// Default number of slots in a ring.
pub const DEFAULT_SLOTS: usize = 5;

/// Default worker program: an interpreter that reads its script from the
/// channel path passed as its sole argument.
pub const DEFAULT_WORKER_CMD: &str = "node";

/// Where a ring lives and how its workers are launched.
///
/// Explicit values rather than hidden constants, so independent rings can
/// coexist (and tests can point one at a temp directory).
#[derive(Debug, Clone)]
pub struct RingConfig {
    /// Directory holding the channels and the state file.
    pub dir: PathBuf,
    /// Ring size. Only consulted when creating a ring; an existing ring
    /// carries its own size in the persisted state.
    pub slots: usize,
    /// Program launched for each worker, given its channel path as the
    /// sole argument.
    pub worker_cmd: String,
}

impl RingConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            slots: DEFAULT_SLOTS,
            worker_cmd: DEFAULT_WORKER_CMD.to_string(),
        }
    }

    /// Config for the well-known ring under the system temp directory,
    /// honoring the `CAROUSEL_DIR` and `CAROUSEL_WORKER` overrides.
    pub fn from_env() -> Self {
        let dir = std::env::var("CAROUSEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir().join("carousel"));
        let mut config = Self::new(dir);
        if let Ok(cmd) = std::env::var("CAROUSEL_WORKER") {
            config.worker_cmd = cmd;
        }
        config
    }

    pub fn with_slots(mut self, slots: usize) -> Self {
        self.slots = slots;
        self
    }

    pub fn with_worker_cmd(mut self, cmd: impl Into<String>) -> Self {
        self.worker_cmd = cmd.into();
        self
    }

    /// Path of the channel for a slot: `<dir>/fifo<slot>`.
    pub fn channel_path(&self, slot: usize) -> PathBuf {
        self.dir.join(format!("fifo{}", slot))
    }

    /// Path of the persisted ring state: `<dir>/state.json`.
    pub fn state_path(&self) -> PathBuf {
        self.dir.join("state.json")
    }
}
