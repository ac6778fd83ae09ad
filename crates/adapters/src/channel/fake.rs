// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake channel adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ChannelAdapter, ChannelError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded channel call
#[derive(Debug, Clone)]
pub enum ChannelCall {
    Provision { path: PathBuf },
    Deliver { path: PathBuf, code: Vec<u8> },
}

/// Fake channel adapter for testing
#[derive(Clone, Default)]
pub struct FakeChannelAdapter {
    channels: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    calls: Arc<Mutex<Vec<ChannelCall>>>,
    fail_provision: Arc<Mutex<bool>>,
}

impl FakeChannelAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ChannelCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Last payload delivered to `path`, if any.
    pub fn delivered(&self, path: &Path) -> Option<Vec<u8>> {
        self.channels
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .filter(|code| !code.is_empty())
            .cloned()
    }

    /// True once `path` has been provisioned.
    pub fn is_provisioned(&self, path: &Path) -> bool {
        self.channels
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(path)
    }

    /// Make the next `provision` calls fail.
    pub fn fail_provision(&self) {
        *self.fail_provision.lock().unwrap_or_else(|e| e.into_inner()) = true;
    }
}

#[async_trait]
impl ChannelAdapter for FakeChannelAdapter {
    async fn provision(&self, path: &Path) -> Result<(), ChannelError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ChannelCall::Provision {
                path: path.to_path_buf(),
            });

        if *self.fail_provision.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(ChannelError::Create {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "injected failure"),
            });
        }

        self.channels
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.to_path_buf(), Vec::new());

        Ok(())
    }

    async fn deliver(&self, path: &Path, code: &[u8]) -> Result<(), ChannelError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ChannelCall::Deliver {
                path: path.to_path_buf(),
                code: code.to_vec(),
            });

        let mut channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());
        match channels.get_mut(path) {
            Some(slot) => {
                *slot = code.to_vec();
                Ok(())
            }
            None => Err(ChannelError::Deliver {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "channel never provisioned"),
            }),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
