// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Execution Context
//!
//! The mutable, per-request record operators communicate through. Rather
//! than the source's untyped keyed mapping, this is split into inputs
//! (immutable after construction), operator products (one optional field
//! per pipeline stage), and accumulators (timings, errors, summary) — the
//! typed-accumulator rendering called for in spec.md's design notes.
//!
//! No `ExecutionContext` outlives a single request: it is created at the
//! start of `execute` and discarded on return.

use crate::entities::search_config::SearchConfig;
use crate::entities::search_result::SearchResult;
use crate::repositories::Database;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// A single operator failure, recorded in `errors` and mirrored into the
/// `error` event and the `summary` event's error list.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OperatorFailure {
    pub operation: String,
    pub error: String,
}

/// Tenant/identity context supplied by the caller. The executor never
/// authenticates or authorizes; it only reads these fields to shape
/// analytics grouping and logging.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub organization_id: Uuid,
    pub organization_name: String,
    pub user_id: Option<Uuid>,
    pub auth_method: String,
}

impl RequestContext {
    /// The analytics distinct id: the user id if present, else
    /// `api_key_<org_id>`, matching the original source's
    /// `str(ctx.user.id) if ctx.user else f"api_key_{ctx.organization.id}"`.
    pub fn distinct_id(&self) -> String {
        match self.user_id {
            Some(id) => id.to_string(),
            None => format!("api_key_{}", self.organization_id),
        }
    }
}

/// Third-party API credentials operators may need. Kept as a small named
/// struct (rather than a generic map) so callers get compile-time
/// feedback on what the pipeline actually consumes.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub openai_api_key: Option<String>,
}

/// Handle operators and the executor use to publish lifecycle/data events.
/// `emit` never fails outwardly: publication errors are swallowed by the
/// concrete implementation (see `search-pipeline`'s channel-backed
/// emitter), matching the "streaming is auxiliary" rationale in spec.md
/// §4.4.
#[async_trait]
pub trait EmitterHandle: Send + Sync {
    async fn emit(&self, event_type: &str, data: Value, op_name: Option<&str>);
}

/// A handle that never publishes anything. Used when `request_id` is
/// absent (`emit` must be a no-op) and in tests that don't care about the
/// event stream.
pub struct NullEmitter;

#[async_trait]
impl EmitterHandle for NullEmitter {
    async fn emit(&self, _event_type: &str, _data: Value, _op_name: Option<&str>) {}
}

/// Final execution summary, populated during finalization.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExecutionSummary {
    pub operations_executed: usize,
    pub total_time_ms: f64,
    pub errors_count: usize,
}

/// The mutable per-request context threaded through every operator.
pub struct ExecutionContext {
    // --- Inputs (read-only after construction) ---
    pub query: String,
    pub config: Arc<SearchConfig>,
    pub db: Arc<dyn Database>,
    pub request_ctx: Arc<RequestContext>,
    pub api_keys: ApiKeys,

    // --- Streaming metadata ---
    pub request_id: Option<String>,
    pub streaming_required: bool,
    pub emitter: Arc<dyn EmitterHandle>,

    // --- Operator products (populated incrementally) ---
    pub expanded_queries: Option<Vec<String>>,
    pub interpreted_filter: Option<Value>,
    pub qdrant_filter: Option<Value>,
    pub embeddings: Option<Vec<Vec<f32>>>,
    pub raw_results: Option<Vec<SearchResult>>,
    pub final_results: Option<Vec<SearchResult>>,
    pub completion: Option<String>,

    // --- Accumulators ---
    pub timings: HashMap<String, f64>,
    pub errors: Vec<OperatorFailure>,
    pub execution_summary: Option<ExecutionSummary>,
}

impl ExecutionContext {
    pub fn new(
        query: String,
        config: Arc<SearchConfig>,
        db: Arc<dyn Database>,
        request_ctx: Arc<RequestContext>,
        api_keys: ApiKeys,
    ) -> Self {
        Self {
            query,
            config,
            db,
            request_ctx,
            api_keys,
            request_id: None,
            streaming_required: false,
            emitter: Arc::new(NullEmitter),
            expanded_queries: None,
            interpreted_filter: None,
            qdrant_filter: None,
            embeddings: None,
            raw_results: None,
            final_results: None,
            completion: None,
            timings: HashMap::new(),
            errors: Vec::new(),
            execution_summary: None,
        }
    }

    /// Marks this context as streaming: events for `request_id` are
    /// published as they occur.
    pub fn with_streaming(mut self, request_id: String, emitter: Arc<dyn EmitterHandle>) -> Self {
        self.request_id = Some(request_id);
        self.streaming_required = true;
        self.emitter = emitter;
        self
    }

    /// Ensures `final_results` is present: falls back to `raw_results`,
    /// then to an empty sequence, per spec.md's finalization invariant.
    pub fn finalize_results(&mut self) {
        if self.final_results.is_none() {
            self.final_results = Some(self.raw_results.clone().unwrap_or_default());
        }
    }

    /// Populates `execution_summary` from the accumulators.
    pub fn finalize_summary(&mut self) {
        let total_time_ms: f64 = self.timings.values().sum();
        self.execution_summary = Some(ExecutionSummary {
            operations_executed: self.timings.len(),
            total_time_ms,
            errors_count: self.errors.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_id_prefers_user_id() {
        let ctx = RequestContext {
            organization_id: Uuid::nil(),
            organization_name: "acme".into(),
            user_id: Some(Uuid::nil()),
            auth_method: "session".into(),
        };
        assert_eq!(ctx.distinct_id(), Uuid::nil().to_string());
    }

    #[test]
    fn distinct_id_falls_back_to_api_key_form() {
        let ctx = RequestContext {
            organization_id: Uuid::nil(),
            organization_name: "acme".into(),
            user_id: None,
            auth_method: "api_key".into(),
        };
        assert_eq!(ctx.distinct_id(), format!("api_key_{}", Uuid::nil()));
    }

    #[test]
    fn finalize_results_falls_back_to_raw_then_empty() {
        use crate::repositories::operator::Operator;
        use std::collections::HashSet;

        struct NoDb;
        impl Database for NoDb {}

        struct NoopOp(&'static str);

        #[async_trait]
        impl Operator for NoopOp {
            fn name(&self) -> &str {
                self.0
            }
            fn depends_on(&self) -> HashSet<String> {
                HashSet::new()
            }
            async fn execute(&self, _context: &mut ExecutionContext) -> Result<(), crate::error::SearchError> {
                Ok(())
            }
        }

        let cfg = crate::entities::search_config::SearchConfig::builder(
            "q",
            "col",
            Arc::new(NoopOp("embedding")),
            Arc::new(NoopOp("vector_search")),
        )
        .build();

        let mut ctx = ExecutionContext::new(
            "q".into(),
            Arc::new(cfg),
            Arc::new(NoDb),
            Arc::new(RequestContext {
                organization_id: Uuid::nil(),
                organization_name: "acme".into(),
                user_id: None,
                auth_method: "api_key".into(),
            }),
            ApiKeys::default(),
        );

        ctx.finalize_results();
        assert_eq!(ctx.final_results, Some(Vec::new()));

        ctx.raw_results = Some(vec![SearchResult::new("1", 0.9)]);
        ctx.final_results = None;
        ctx.finalize_results();
        assert_eq!(ctx.final_results.unwrap().len(), 1);
    }
}
