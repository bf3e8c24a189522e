// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Search Pipeline Infrastructure
//!
//! Builds runnable pipelines on top of `search-pipeline-domain`'s ports
//! and services: the channel-backed event emitter and the executor
//! (`infrastructure::runtime`), concrete port implementations
//! (`infrastructure::adapters`), process configuration and logging
//! (`infrastructure::config`, `infrastructure::logging`), and the
//! built-in operator set (`operators`).

pub mod infrastructure;
pub mod operators;

pub use infrastructure::runtime::{ChannelEmitter, SearchExecutor};
