// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

mod done;
mod status;
mod swap;

pub use done::done;
pub use status::status;
pub use swap::swap;
