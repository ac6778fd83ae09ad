// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted ring state

use serde::{Deserialize, Serialize};

/// Opaque handle to a worker process.
///
/// The raw value is the OS pid. The ring only ever observes and signals
/// workers, so the handle supports no other operations. Zero is reserved:
/// it marks a slot whose worker has never been started, and must never be
/// forwarded to the signalling layer (on POSIX, pid 0 addresses the
/// caller's own process group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(u32);

impl WorkerId {
    /// Marker for a slot whose worker has never been started.
    pub const UNSET: WorkerId = WorkerId(0);

    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Whether a worker was ever spawned into this slot.
    pub fn is_set(&self) -> bool {
        self.0 != 0
    }

    pub fn as_raw(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ring's persisted state: one JSON document per ring.
///
/// `workers` holds one pid per slot. The schema must round-trip exactly so
/// that a load followed by a save is a no-op on the persisted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingState {
    /// True while a handoff is in progress. A crash mid-handoff leaves this
    /// set; only teardown recovers.
    pub locked: bool,
    /// Slot the latest code went to. The next handoff retires this slot's
    /// worker, spawns a fresh one there, then delivers to the slot after it.
    pub pointer: usize,
    /// One worker pid per slot, in slot order.
    pub workers: Vec<WorkerId>,
}

impl RingState {
    /// Fresh state for a ring of `slots` slots: unlocked, pointer on the
    /// last slot, no workers recorded yet.
    pub fn initial(slots: usize) -> Self {
        Self {
            locked: false,
            pointer: slots.saturating_sub(1),
            workers: vec![WorkerId::UNSET; slots],
        }
    }

    /// Ring size. Fixed at creation and always derived from the persisted
    /// workers list, never from the invoking configuration.
    pub fn slots(&self) -> usize {
        self.workers.len()
    }

    /// Advance the pointer one slot, wrapping at the end of the ring.
    pub fn advance(&mut self) {
        self.pointer = (self.pointer + 1) % self.slots();
    }

    /// Consistency check for states decoded from disk. A state that decodes
    /// but fails this check cannot be trusted to index the ring.
    pub fn check(&self) -> Result<(), String> {
        if self.workers.is_empty() {
            return Err("workers list is empty".to_string());
        }
        if self.pointer >= self.workers.len() {
            return Err(format!(
                "pointer {} out of range for {} slots",
                self.pointer,
                self.workers.len()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
