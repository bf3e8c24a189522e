// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Bootstrap Module
//!
//! The bootstrap crate sits outside the domain/infrastructure layers and
//! provides the `search-pipeline-demo` binary's entry-point concerns:
//!
//! - **Argument parsing** - `cli`
//! - **Bootstrap-phase logging** - `logger`, separate from the `tracing`
//!   subscriber the executor installs once running
//! - **Graceful shutdown** - `shutdown`, Ctrl-C/SIGTERM coordination for the
//!   demo binary's background tasks
//!
//! Enterprise layers (`search-pipeline-domain`, `search-pipeline`) do not
//! depend on this crate; it only depends on them through the demo binary.

pub mod cli;
pub mod logger;
pub mod shutdown;

pub use cli::Cli;
pub use logger::{BootstrapLogger, ConsoleLogger, NoOpLogger};
pub use shutdown::ShutdownCoordinator;
