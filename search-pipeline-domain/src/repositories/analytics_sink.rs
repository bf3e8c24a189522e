// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Analytics Sink Port
//!
//! The analytics hook records one `search_query` event per execution
//! through this trait, mirroring the original source's
//! `ContextualAnalyticsService.track_search_query` / `track_event` shape
//! (distinct id derived from the user, grouped by organization).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the search completed cleanly or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Success,
    Error,
}

/// Whether the request was a streaming (pubsub-backed) or regular search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    Streaming,
    Regular,
}

/// The single analytics event the hook emits per execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQueryEvent {
    pub distinct_id: String,
    pub organization_id: String,
    pub organization_name: String,
    pub query_length: usize,
    pub collection_slug: String,
    pub duration_ms: f64,
    pub search_type: SearchType,
    pub status: SearchStatus,
    pub results_count: Option<usize>,
}

/// Error returned by a sink write. Swallowed by the analytics hook: sink
/// failures must never affect the user-visible result.
#[derive(Debug)]
pub struct AnalyticsSinkError(pub String);

impl fmt::Display for AnalyticsSinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "analytics sink failed: {}", self.0)
    }
}

impl std::error::Error for AnalyticsSinkError {}

/// Records business analytics events.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn track_search_query(&self, event: SearchQueryEvent) -> Result<(), AnalyticsSinkError>;
}
