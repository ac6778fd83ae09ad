// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `carousel <file>` - deliver new code to the ring

use std::path::Path;

use anyhow::Result;
use carousel_adapters::{ChannelAdapter, ProcessAdapter};
use carousel_engine::Rotator;
use carousel_storage::StateStore;

pub async fn swap<P, C, S>(rotator: &Rotator<P, C, S>, target: &str) -> Result<()>
where
    P: ProcessAdapter,
    C: ChannelAdapter,
    S: StateStore,
{
    let outcome = rotator.swap(Path::new(target)).await?;

    if outcome.initialized {
        println!(
            "Initialized ring at {} ({} slots)",
            rotator.config().dir.display(),
            rotator.config().slots
        );
    }

    println!(
        "Delivered {} to slot {} (spawned replacement in slot {}, pid {})",
        target, outcome.delivered_slot, outcome.spare_slot, outcome.spare
    );

    Ok(())
}
