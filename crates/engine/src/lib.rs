// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Carousel rotation engine
//!
//! Drives the worker ring that makes hot swaps instant: every handoff
//! retires one worker, spawns its replacement, and delivers the new code to
//! a worker that has been warming up since a full cycle ago.

mod error;
mod outcome;
mod rotation;

pub use error::RotateError;
pub use outcome::{Swap, Teardown};
pub use rotation::Rotator;
