// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Bootstrap CLI
//!
//! Command-line arguments for the `search-pipeline-demo` binary. The demo
//! wires an in-memory pubsub channel, a console logger, and a recording
//! analytics sink around the executor so the full operator pipeline can be
//! driven from a terminal.

use clap::Parser;

/// Runs a single search through the pipeline executor.
#[derive(Debug, Parser)]
#[command(name = "search-pipeline-demo", about = "Drive the search pipeline executor from the CLI")]
pub struct Cli {
    /// The search query text.
    #[arg(long, default_value = "")]
    pub query: String,

    /// Logical corpus identifier.
    #[arg(long, default_value = "default")]
    pub collection: String,

    /// Maximum number of results to return. Falls back to the runtime
    /// configuration's default when not given.
    #[arg(long)]
    pub limit: Option<u32>,

    /// Result offset for pagination. Falls back to the runtime
    /// configuration's default when not given.
    #[arg(long)]
    pub offset: Option<u32>,

    /// Enable the query expansion operator.
    #[arg(long)]
    pub expand: bool,

    /// Enable the query interpretation operator.
    #[arg(long)]
    pub interpret: bool,

    /// Enable the Qdrant filter synthesis operator.
    #[arg(long)]
    pub filter: bool,

    /// Enable the recency rescoring operator.
    #[arg(long)]
    pub recency: bool,

    /// Enable the reranking operator.
    #[arg(long)]
    pub rerank: bool,

    /// Enable the completion operator.
    #[arg(long)]
    pub complete: bool,

    /// Stream lifecycle and data events to stdout as they are emitted.
    #[arg(long)]
    pub stream: bool,
}
