// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! carousel - zero-downtime hot swaps for script workers

mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use carousel_adapters::{FifoAdapter, SystemProcessAdapter};
use carousel_core::RingConfig;
use carousel_engine::Rotator;
use carousel_storage::JsonStore;

/// Target literal that tears the ring down instead of delivering a file.
const DONE: &str = "done";
/// Target literal that prints the ring state instead of delivering a file.
const STATUS: &str = "status";

#[derive(Parser)]
#[command(
    name = "carousel",
    version,
    about = "Hot-swap a script across a ring of warm workers"
)]
struct Cli {
    /// Code file to deliver, or `done` to tear the ring down, or `status`
    /// to inspect it
    target: String,

    /// Ring directory (default: $CAROUSEL_DIR, else <tmp>/carousel)
    #[arg(long)]
    ring_dir: Option<PathBuf>,

    /// Ring size when creating a new ring
    #[arg(long)]
    slots: Option<usize>,

    /// Worker command, launched with each slot's channel path as its final
    /// argument (default: $CAROUSEL_WORKER, else `node`)
    #[arg(long)]
    worker_cmd: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = RingConfig::from_env();
    if let Some(dir) = cli.ring_dir {
        config.dir = dir;
    }
    if let Some(slots) = cli.slots {
        config = config.with_slots(slots);
    }
    if let Some(cmd) = cli.worker_cmd {
        config = config.with_worker_cmd(cmd);
    }

    tracing::debug!(
        dir = %config.dir.display(),
        worker = %config.worker_cmd,
        "resolved ring config"
    );

    let store = JsonStore::new(config.state_path());
    let rotator = Rotator::new(
        config,
        SystemProcessAdapter::new(),
        FifoAdapter::new(),
        store,
    );

    match cli.target.as_str() {
        DONE => commands::done(&rotator).await,
        STATUS => commands::status(&rotator),
        _ => commands::swap(&rotator, &cli.target).await,
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Quiet by default; RUST_LOG opts into the step-by-step trace on stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
