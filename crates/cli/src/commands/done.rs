// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `carousel done` - stop the ring and clean up

use anyhow::Result;
use carousel_adapters::{ChannelAdapter, ProcessAdapter};
use carousel_engine::Rotator;
use carousel_storage::StateStore;

pub async fn done<P, C, S>(rotator: &Rotator<P, C, S>) -> Result<()>
where
    P: ProcessAdapter,
    C: ChannelAdapter,
    S: StateStore,
{
    let outcome = rotator.teardown().await?;

    if outcome.existed {
        println!("Ring torn down ({} workers stopped)", outcome.stopped);
    } else {
        println!("Nothing to tear down");
    }

    Ok(())
}
