// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Infrastructure Logging
//!
//! Installs the process-wide `tracing` subscriber. The executor and
//! operators only ever call the `tracing` macros directly; this module
//! is the single place that decides how those events are rendered.

use tracing_subscriber::EnvFilter;

/// Initializes a subscriber that writes human-readable logs to stderr,
/// filtered by `RUST_LOG` (falling back to `default_directive` when
/// unset). Safe to call once per process; a second call is a no-op and
/// its `Err` can be ignored by callers that don't care (e.g. tests that
/// may run this more than once across the binary).
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
