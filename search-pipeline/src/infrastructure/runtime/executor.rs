// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Search Executor
//!
//! Top-level orchestrator: builds the operator plan, drives the
//! dependency scheduler loop, finalizes the context, and guarantees the
//! analytics event and `done` frame are emitted on every exit path
//! (success, operator failure, or cancellation).

use crate::infrastructure::runtime::emitter::ChannelEmitter;
use search_pipeline_domain::{
    find_ready, plan, AnalyticsSink, ApiKeys, Database, DonePayload, ErrorPayload, EventPublisher, ExecutionContext,
    NullEmitter, Operator, OperatorEndPayload, OperatorFailure, OperatorStartPayload, RequestContext, ResultsPayload,
    SearchConfig, SearchError, SearchQueryEvent, SearchStatus, SearchType, StartPayload, SummaryPayload,
};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

/// Runs search pipelines end to end against injected collaborators.
///
/// Stateless and reusable across requests: all per-request state lives in
/// the [`ExecutionContext`] created inside [`SearchExecutor::execute`].
pub struct SearchExecutor {
    publisher: Arc<dyn EventPublisher>,
    analytics: Arc<dyn AnalyticsSink>,
    channel_prefix: String,
    emitter_channel_capacity: usize,
}

impl SearchExecutor {
    /// Creates an executor that publishes to `<channel_prefix>:<request_id>`
    /// and records one analytics event per invocation. The emitter's queue
    /// uses [`ChannelEmitter`]'s default capacity; override with
    /// [`SearchExecutor::with_emitter_channel_capacity`].
    pub fn new(publisher: Arc<dyn EventPublisher>, analytics: Arc<dyn AnalyticsSink>, channel_prefix: impl Into<String>) -> Self {
        Self {
            publisher,
            analytics,
            channel_prefix: channel_prefix.into(),
            emitter_channel_capacity: crate::infrastructure::runtime::emitter::DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Overrides the bound on the per-request event emitter's internal
    /// queue, e.g. from [`crate::infrastructure::config::ExecutorSettings`].
    pub fn with_emitter_channel_capacity(mut self, capacity: usize) -> Self {
        self.emitter_channel_capacity = capacity;
        self
    }

    /// Executes one search request.
    ///
    /// Returns the final [`ExecutionContext`] on success. On operator
    /// failure or cancellation, returns the [`SearchError`] that caused
    /// termination; the `error` and `done` events, and the analytics
    /// event, are still emitted before the error is returned.
    #[tracing::instrument(skip(self, config, db, request_ctx, api_keys, cancellation), fields(collection = %config.collection_slug, request_id = tracing::field::Empty))]
    pub async fn execute(
        &self,
        config: Arc<SearchConfig>,
        db: Arc<dyn Database>,
        request_ctx: Arc<RequestContext>,
        api_keys: ApiKeys,
        request_id: Option<String>,
        cancellation: CancellationToken,
    ) -> Result<ExecutionContext, SearchError> {
        if let Some(ref rid) = request_id {
            tracing::Span::current().record("request_id", rid.as_str());
        }

        let operators = plan(&config);
        let mut context = ExecutionContext::new(config.query.clone(), config.clone(), db, request_ctx.clone(), api_keys);

        let writer_handle = if let Some(ref request_id) = request_id {
            let channel = format!("{}:{}", self.channel_prefix, request_id);
            let (emitter, handle) = ChannelEmitter::spawn(channel, self.publisher.clone(), self.emitter_channel_capacity);
            context = context.with_streaming(request_id.clone(), emitter);
            Some(handle)
        } else {
            None
        };

        tracing::debug!(
            limit = config.limit,
            offset = config.offset,
            query_expansion = config.query_expansion.is_some(),
            query_interpretation = config.query_interpretation.is_some(),
            qdrant_filter = config.qdrant_filter.is_some(),
            recency = config.recency.is_some(),
            reranking = config.reranking.is_some(),
            completion = config.completion.is_some(),
            "search config summary"
        );

        emit(
            &context,
            "start",
            StartPayload {
                request_id: request_id.clone(),
                query: context.query.clone(),
                limit: config.limit,
                offset: config.offset,
            },
            None,
        )
        .await;

        let start_time = Instant::now();
        let run_result = self.run_loop(&operators, &mut context, &cancellation).await;

        if run_result.is_ok() {
            context.finalize_results();
            emit(
                &context,
                "results",
                ResultsPayload {
                    results: context.final_results.clone().unwrap_or_default(),
                },
                None,
            )
            .await;

            let total_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;
            context.finalize_summary();
            emit(
                &context,
                "summary",
                SummaryPayload {
                    timings: context.timings.clone(),
                    errors: context.errors.clone(),
                    total_time_ms,
                },
                None,
            )
            .await;

            tracing::debug!(
                total_time_ms,
                executed = context.timings.len(),
                planned = operators.len(),
                "search completed"
            );
        }

        let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
        self.record_analytics(&context, &request_ctx, request_id.is_some(), duration_ms, run_result.is_ok())
            .await;

        emit(&context, "done", DonePayload { request_id: request_id.clone() }, None).await;

        // Drop the context's emitter so the writer task's channel closes and
        // its queue drains before we report completion.
        context.emitter = Arc::new(NullEmitter);
        if let Some(handle) = writer_handle {
            if let Err(err) = handle.await {
                tracing::warn!(error = %err, "emitter writer task panicked");
            }
        }

        run_result.map(|()| context)
    }

    /// Runs operators in dependency-ready batches until the plan is
    /// exhausted or no further progress is possible.
    async fn run_loop(
        &self,
        operators: &[Arc<dyn Operator>],
        context: &mut ExecutionContext,
        cancellation: &CancellationToken,
    ) -> Result<(), SearchError> {
        let mut executed: HashSet<String> = HashSet::new();

        while executed.len() < operators.len() {
            let ready = find_ready(operators, &executed);

            if ready.is_empty() {
                let remaining: Vec<String> = operators
                    .iter()
                    .filter(|op| !executed.contains(op.name()))
                    .map(|op| op.name().to_string())
                    .collect();
                tracing::warn!(
                    remaining = ?remaining,
                    "{}",
                    SearchError::SchedulerDeadlock(remaining.clone())
                );
                break;
            }

            for op in ready {
                let name = op.name().to_string();

                emit(context, "operator_start", OperatorStartPayload { name: name.clone() }, Some(&name)).await;

                let op_start = Instant::now();
                let outcome = tokio::select! {
                    biased;
                    _ = cancellation.cancelled() => Err(SearchError::Cancelled(name.clone())),
                    result = op.execute(context) => result,
                };

                match outcome {
                    Ok(()) => {
                        let elapsed_ms = op_start.elapsed().as_secs_f64() * 1000.0;
                        context.timings.insert(name.clone(), elapsed_ms);
                        executed.insert(name.clone());

                        tracing::debug!(operator = %name, elapsed_ms, "operator completed");
                        emit(context, "operator_end", OperatorEndPayload { name: name.clone(), ms: elapsed_ms }, Some(&name)).await;
                    }
                    Err(err) => {
                        let message = err.raw_message();
                        context.errors.push(OperatorFailure {
                            operation: name.clone(),
                            error: message.clone(),
                        });

                        tracing::error!(operator = %name, error = %message, "operator failed");
                        emit(context, "error", ErrorPayload { operation: name.clone(), message }, Some(&name)).await;

                        return Err(err);
                    }
                }
            }
        }

        Ok(())
    }

    async fn record_analytics(
        &self,
        context: &ExecutionContext,
        request_ctx: &RequestContext,
        streaming: bool,
        duration_ms: f64,
        succeeded: bool,
    ) {
        let event = SearchQueryEvent {
            distinct_id: request_ctx.distinct_id(),
            organization_id: request_ctx.organization_id.to_string(),
            organization_name: request_ctx.organization_name.clone(),
            query_length: context.query.chars().count(),
            collection_slug: context.config.collection_slug.clone(),
            duration_ms,
            search_type: if streaming { SearchType::Streaming } else { SearchType::Regular },
            status: if succeeded { SearchStatus::Success } else { SearchStatus::Error },
            results_count: context.final_results.as_ref().map(|results| results.len()),
        };

        if let Err(err) = self.analytics.track_search_query(event).await {
            tracing::warn!(error = %err, "failed to record search analytics");
        }
    }
}

/// Serializes `payload` and forwards it to `context`'s emitter, swallowing
/// serialization failures the same way the emitter swallows publish
/// failures (an event that cannot be built is equally auxiliary).
async fn emit<T: search_pipeline_domain::EventPayload>(context: &ExecutionContext, event_type: &str, payload: T, op_name: Option<&str>) {
    let data = serde_json::to_value(&payload).unwrap_or(Value::Null);
    context.emitter.emit(event_type, data, op_name).await;
}
