// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Reranking Operator
//!
//! Sorts `raw_results` by descending score, applies `score_threshold` if
//! configured, and truncates to `limit`, writing `final_results`. This is
//! the operator that produces the context's authoritative result set —
//! later stages (completion) read `final_results`, not `raw_results`.

use async_trait::async_trait;
use search_pipeline_domain::{ExecutionContext, Operator, SearchError};
use std::cmp::Ordering;
use std::collections::HashSet;

pub struct RerankingOperator;

#[async_trait]
impl Operator for RerankingOperator {
    fn name(&self) -> &str {
        "reranking"
    }

    fn depends_on(&self) -> HashSet<String> {
        ["vector_search", "recency"].into_iter().map(String::from).collect()
    }

    async fn execute(&self, context: &mut ExecutionContext) -> Result<(), SearchError> {
        let mut results = context.raw_results.clone().unwrap_or_default();
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        if let Some(threshold) = context.config.score_threshold {
            results.retain(|result| result.score >= threshold);
        }

        results.truncate(context.config.limit as usize);
        context.final_results = Some(results);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_pipeline_domain::{ApiKeys, Database, RequestContext, SearchConfig, SearchResult};
    use std::sync::Arc;
    use uuid::Uuid;

    struct NoDb;
    impl Database for NoDb {}

    struct NoopOp;
    #[async_trait]
    impl Operator for NoopOp {
        fn name(&self) -> &str {
            "embedding"
        }
        fn depends_on(&self) -> HashSet<String> {
            HashSet::new()
        }
        async fn execute(&self, _context: &mut ExecutionContext) -> Result<(), SearchError> {
            Ok(())
        }
    }

    fn context_with_limit(limit: u32, threshold: Option<f32>) -> ExecutionContext {
        let mut builder = SearchConfig::builder("q", "docs", Arc::new(NoopOp), Arc::new(NoopOp)).limit(limit);
        if let Some(threshold) = threshold {
            builder = builder.score_threshold(threshold);
        }
        ExecutionContext::new(
            "q".into(),
            Arc::new(builder.build()),
            Arc::new(NoDb),
            Arc::new(RequestContext {
                organization_id: Uuid::nil(),
                organization_name: "acme".into(),
                user_id: None,
                auth_method: "api_key".into(),
            }),
            ApiKeys::default(),
        )
    }

    #[tokio::test]
    async fn sorts_descending_by_score() {
        let mut ctx = context_with_limit(10, None);
        ctx.raw_results = Some(vec![SearchResult::new("low", 0.1), SearchResult::new("high", 0.9)]);
        RerankingOperator.execute(&mut ctx).await.unwrap();
        let results = ctx.final_results.unwrap();
        assert_eq!(results[0].id, "high");
        assert_eq!(results[1].id, "low");
    }

    #[tokio::test]
    async fn truncates_to_the_configured_limit() {
        let mut ctx = context_with_limit(1, None);
        ctx.raw_results = Some(vec![SearchResult::new("a", 0.9), SearchResult::new("b", 0.8)]);
        RerankingOperator.execute(&mut ctx).await.unwrap();
        assert_eq!(ctx.final_results.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn drops_results_below_the_score_threshold() {
        let mut ctx = context_with_limit(10, Some(0.5));
        ctx.raw_results = Some(vec![SearchResult::new("a", 0.9), SearchResult::new("b", 0.2)]);
        RerankingOperator.execute(&mut ctx).await.unwrap();
        let results = ctx.final_results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "a");
    }

    #[tokio::test]
    async fn empty_raw_results_yields_empty_final_results() {
        let mut ctx = context_with_limit(10, None);
        RerankingOperator.execute(&mut ctx).await.unwrap();
        assert_eq!(ctx.final_results.unwrap(), Vec::new());
    }
}
