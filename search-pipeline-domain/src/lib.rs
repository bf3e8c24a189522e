// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Search Pipeline Domain
//!
//! The pure, runtime-agnostic core of the search pipeline executor:
//! config, execution context, event model, error taxonomy, the ports
//! (`Operator`, `Database`, `EventPublisher`, `AnalyticsSink`) external
//! crates implement, and the two stateless services (planner, scheduler)
//! that decide what runs next.
//!
//! Nothing in this crate spawns a task, opens a socket, or reads the
//! clock; those concerns live in `search-pipeline`'s infrastructure layer.

pub mod entities;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

pub use entities::{
    ApiKeys, EmitterHandle, ExecutionContext, ExecutionSummary, NullEmitter, OperatorFailure, RequestContext, SearchConfig,
    SearchConfigBuilder, SearchResult,
};
pub use error::SearchError;
pub use events::{
    DonePayload, ErrorPayload, EventEnvelope, EventPayload, OperatorEndPayload, OperatorStartPayload, ResultsPayload,
    StartPayload, SummaryPayload,
};
pub use repositories::{
    AnalyticsSink, AnalyticsSinkError, CompletionError, CompletionProvider, Database, EventPublisher, Operator,
    PublishError, SearchQueryEvent, SearchStatus, SearchType, VectorMatch, VectorStore, VectorStoreError,
};
pub use services::{find_ready, plan};
