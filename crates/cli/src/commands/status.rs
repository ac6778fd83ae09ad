// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `carousel status` - inspect the persisted ring

use anyhow::Result;
use carousel_adapters::{ChannelAdapter, ProcessAdapter};
use carousel_engine::Rotator;
use carousel_storage::StateStore;

pub fn status<P, C, S>(rotator: &Rotator<P, C, S>) -> Result<()>
where
    P: ProcessAdapter,
    C: ChannelAdapter,
    S: StateStore,
{
    let dir = &rotator.config().dir;

    match rotator.status()? {
        None => println!("No ring at {}", dir.display()),
        Some(state) => {
            println!("Ring at {} ({} slots)", dir.display(), state.slots());
            if state.locked {
                println!("  locked: yes (unfinished swap; run `carousel done` to reset)");
            } else {
                println!("  locked: no");
            }
            println!("  pointer: slot {}", state.pointer);
            let workers: Vec<String> = state.workers.iter().map(ToString::to_string).collect();
            println!("  workers: {}", workers.join(" "));
        }
    }

    Ok(())
}
