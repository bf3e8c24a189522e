// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Infrastructure
//!
//! Everything that touches a runtime, a clock, a channel, or the
//! outside world: the executor and emitter (`runtime`), the concrete
//! port implementations (`adapters`), and process configuration/logging.

pub mod adapters;
pub mod config;
pub mod logging;
pub mod runtime;
