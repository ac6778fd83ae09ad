// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O
//!
//! Everything the ring touches outside its own state goes through a trait
//! defined here: delivery channels on the filesystem and worker processes
//! on the host.

pub mod channel;
pub mod process;

pub use channel::{ChannelAdapter, ChannelError, FifoAdapter};
pub use process::{ProcessAdapter, ProcessError, SystemProcessAdapter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use channel::{ChannelCall, FakeChannelAdapter};
#[cfg(any(test, feature = "test-support"))]
pub use process::{FakeProcessAdapter, FakeWorker, ProcessCall};
