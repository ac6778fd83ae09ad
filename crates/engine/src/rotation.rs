// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ring rotation orchestrator

use std::io;
use std::path::Path;

use carousel_adapters::{ChannelAdapter, ProcessAdapter};
use carousel_core::{RingConfig, RingState, WorkerId};
use carousel_storage::StateStore;

use crate::error::RotateError;
use crate::outcome::{Swap, Teardown};

/// Drives one invocation's worth of work against the ring.
///
/// All host interaction goes through the adapters and the store, so the
/// full rotation logic runs against fakes in tests.
pub struct Rotator<P, C, S> {
    config: RingConfig,
    procs: P,
    channels: C,
    store: S,
}

impl<P, C, S> Rotator<P, C, S>
where
    P: ProcessAdapter,
    C: ChannelAdapter,
    S: StateStore,
{
    pub fn new(config: RingConfig, procs: P, channels: C, store: S) -> Self {
        Self {
            config,
            procs,
            channels,
            store,
        }
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Swap the ring over to the code in `source`.
    ///
    /// On the first invocation this also builds the ring. Either way the
    /// code lands in a worker that was spawned a full cycle earlier and has
    /// been sitting on its channel since, so the swap costs no startup wait.
    pub async fn swap(&self, source: &Path) -> Result<Swap, RotateError> {
        let (mut state, initialized) = match self.store.load() {
            Ok(state) => (state, false),
            Err(err) if err.is_not_found() => (self.init().await?, true),
            Err(err) => return Err(err.into()),
        };

        if state.locked {
            return Err(RotateError::AlreadyRunning);
        }

        // Persist the lock before touching any worker. A crash from here on
        // leaves it set, and only teardown clears it.
        state.locked = true;
        self.store.save(&state)?;

        // Retire the pointer slot's worker and spawn its replacement. The
        // replacement opens the slot's channel and parks there; its turn
        // comes when the pointer wraps back around.
        let spare_slot = state.pointer;
        let retired = state.workers[spare_slot];
        if retired.is_set() {
            self.procs.request_stop(retired).await?;
        }
        let spare = self
            .procs
            .spawn(&self.config.worker_cmd, &self.config.channel_path(spare_slot))
            .await?;
        state.workers[spare_slot] = spare;

        // Hand the code to the next slot's warm worker.
        state.advance();
        let delivered_slot = state.pointer;
        let code = tokio::fs::read(source)
            .await
            .map_err(|err| RotateError::Source {
                path: source.to_path_buf(),
                source: err,
            })?;
        self.channels
            .deliver(&self.config.channel_path(delivered_slot), &code)
            .await?;

        state.locked = false;
        self.store.save(&state)?;

        tracing::info!(
            source = %source.display(),
            delivered_slot,
            spare_slot,
            %spare,
            "swap complete"
        );

        Ok(Swap {
            initialized,
            retired: retired.is_set().then_some(retired),
            spare_slot,
            spare,
            delivered_slot,
            delivered_to: state.workers[delivered_slot],
            bytes: code.len(),
        })
    }

    /// Build a fresh ring: one channel per slot, warm workers in every slot
    /// except the pointer's.
    ///
    /// The pointer slot stays empty on purpose; the first handoff spawns
    /// into it and delivers to slot 0. `swap` calls this when no state is
    /// persisted yet.
    pub async fn init(&self) -> Result<RingState, RotateError> {
        match self.store.load() {
            Ok(_) => {
                return Err(RotateError::Config(format!(
                    "ring already initialized at {}",
                    self.config.dir.display()
                )));
            }
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err.into()),
        }

        // A directory with no readable state is the debris of a crashed
        // init; building a fresh ring over it would orphan any workers that
        // init already launched.
        if self.config.dir.exists() {
            return Err(RotateError::Config(format!(
                "ring directory {} exists but holds no readable state; run `carousel done` to reset",
                self.config.dir.display()
            )));
        }

        let slots = self.config.slots;
        if slots < 2 {
            return Err(RotateError::Config(format!(
                "ring needs at least 2 slots to rotate, got {slots}"
            )));
        }

        tokio::fs::create_dir_all(&self.config.dir)
            .await
            .map_err(|source| RotateError::Provision {
                path: self.config.dir.clone(),
                source,
            })?;

        let mut state = RingState::initial(slots);
        for slot in 0..slots {
            let channel = self.config.channel_path(slot);
            self.channels.provision(&channel).await?;
            if slot == slots - 1 {
                continue;
            }
            state.workers[slot] = self.procs.spawn(&self.config.worker_cmd, &channel).await?;
        }

        self.store.save(&state)?;
        tracing::info!(dir = %self.config.dir.display(), slots, "initialized ring");
        Ok(state)
    }

    /// Tear the ring down: stop every worker and remove the ring directory.
    ///
    /// This is also the recovery path, so it keeps going past almost
    /// anything: a locked ring, an unreadable state file, workers that are
    /// already gone. Only failing to remove the directory is an error.
    pub async fn teardown(&self) -> Result<Teardown, RotateError> {
        let state = match self.store.load() {
            Ok(state) => Some(state),
            Err(err) if err.is_not_found() => {
                if !self.config.dir.exists() {
                    return Ok(Teardown {
                        existed: false,
                        stopped: 0,
                    });
                }
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "tearing down despite unreadable state");
                None
            }
        };

        let mut stopped = 0;
        if let Some(state) = state {
            for id in state.workers.iter().copied().filter(WorkerId::is_set) {
                match self.procs.request_stop(id).await {
                    Ok(()) => stopped += 1,
                    // A worker we cannot signal must not block recovery.
                    Err(err) => tracing::warn!(%id, error = %err, "failed to stop worker"),
                }
            }
        }

        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "failed to clear ring state");
        }

        match tokio::fs::remove_dir_all(&self.config.dir).await {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(RotateError::Teardown {
                    path: self.config.dir.clone(),
                    source,
                });
            }
        }

        tracing::info!(dir = %self.config.dir.display(), stopped, "ring torn down");
        Ok(Teardown {
            existed: true,
            stopped,
        })
    }

    /// The persisted ring state, or `None` when no ring exists.
    pub fn status(&self) -> Result<Option<RingState>, RotateError> {
        match self.store.load() {
            Ok(state) => Ok(Some(state)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
