//! carousel-core: shared types for the carousel worker ring
//!
//! This crate provides:
//! - The persisted ring state and its consistency checks
//! - Ring configuration (directory, slot count, worker command)

pub mod config;
pub mod state;

pub use config::{RingConfig, DEFAULT_SLOTS, DEFAULT_WORKER_CMD};
pub use state::{RingState, WorkerId};
