// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation outcomes

use carousel_core::WorkerId;

/// What a swap invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swap {
    /// True when this invocation had to create the ring first.
    pub initialized: bool,
    /// Worker retired from the spare slot, if one was running there.
    pub retired: Option<WorkerId>,
    /// Slot that received a fresh replacement worker.
    pub spare_slot: usize,
    /// The replacement worker. It idles until the pointer comes back around.
    pub spare: WorkerId,
    /// Slot whose warm worker received the code.
    pub delivered_slot: usize,
    /// The worker now running the new code.
    pub delivered_to: WorkerId,
    /// Payload size in bytes.
    pub bytes: usize,
}

/// What a teardown invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teardown {
    /// False when there was no ring to tear down.
    pub existed: bool,
    /// Number of workers asked to stop.
    pub stopped: usize,
}
