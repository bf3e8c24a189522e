// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Entities
//!
//! The declarative config, the mutable per-request context, and the
//! result record that flow through the pipeline.

pub mod execution_context;
pub mod search_config;
pub mod search_result;

pub use execution_context::{ApiKeys, EmitterHandle, ExecutionContext, ExecutionSummary, NullEmitter, OperatorFailure, RequestContext};
pub use search_config::{SearchConfig, SearchConfigBuilder};
pub use search_result::SearchResult;
