// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Opaque Database Handle
//!
//! `Database` is a marker trait the domain crate never calls through
//! directly; it only threads the handle to operators. This adapter is
//! the minimal concrete handle the demo binary and tests pass through
//! the executor — a real deployment would substitute its own connection
//! pool type here without the domain or runtime crates changing at all.

use search_pipeline_domain::Database;

/// A database handle with nothing behind it. Stands in for whatever
/// connection pool or session type a real deployment injects; this
/// crate never reads it, only passes it through `ExecutionContext`.
pub struct NullDatabase;

impl Database for NullDatabase {}
