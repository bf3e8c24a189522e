// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Analytics Sink Adapters
//!
//! Two small [`AnalyticsSink`] implementations: one that writes a debug
//! log line (for the demo binary, where no real analytics backend is
//! wired up), and one that records events in memory (for tests that
//! assert on what was tracked).

use async_trait::async_trait;
use parking_lot::Mutex;
use search_pipeline_domain::{AnalyticsSink, AnalyticsSinkError, SearchQueryEvent};
use std::sync::Arc;

/// Logs every tracked event at debug level instead of forwarding it
/// anywhere. Used by the demo binary, where there is no real analytics
/// backend to integrate with.
pub struct LoggingAnalyticsSink;

#[async_trait]
impl AnalyticsSink for LoggingAnalyticsSink {
    async fn track_search_query(&self, event: SearchQueryEvent) -> Result<(), AnalyticsSinkError> {
        tracing::debug!(
            distinct_id = %event.distinct_id,
            organization_id = %event.organization_id,
            duration_ms = event.duration_ms,
            status = ?event.status,
            results_count = ?event.results_count,
            "search_query analytics event"
        );
        Ok(())
    }
}

/// Records every tracked event for later inspection. Intended for tests.
#[derive(Clone, Default)]
pub struct RecordingAnalyticsSink {
    events: Arc<Mutex<Vec<SearchQueryEvent>>>,
}

impl RecordingAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SearchQueryEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl AnalyticsSink for RecordingAnalyticsSink {
    async fn track_search_query(&self, event: SearchQueryEvent) -> Result<(), AnalyticsSinkError> {
        self.events.lock().push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_pipeline_domain::{SearchStatus, SearchType};

    fn sample_event() -> SearchQueryEvent {
        SearchQueryEvent {
            distinct_id: "user-1".into(),
            organization_id: "org-1".into(),
            organization_name: "acme".into(),
            query_length: 5,
            collection_slug: "docs".into(),
            duration_ms: 12.5,
            search_type: SearchType::Regular,
            status: SearchStatus::Success,
            results_count: Some(3),
        }
    }

    #[tokio::test]
    async fn recording_sink_records_every_event() {
        let sink = RecordingAnalyticsSink::new();
        sink.track_search_query(sample_event()).await.unwrap();
        sink.track_search_query(sample_event()).await.unwrap();
        assert_eq!(sink.events().len(), 2);
    }

    #[tokio::test]
    async fn logging_sink_never_fails() {
        let sink = LoggingAnalyticsSink;
        assert!(sink.track_search_query(sample_event()).await.is_ok());
    }
}
