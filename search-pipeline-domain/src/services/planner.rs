// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Operator Planner
//!
//! Translates a [`SearchConfig`] into an ordered list of operators. The
//! order is purely a tie-breaker for the dependency scheduler: it encodes
//! the bias that query-shaping steps precede retrieval, which precedes
//! post-processing. Pure function of its input; never fails in practice
//! (the two required slots are non-optional fields on `SearchConfig`, so
//! there's no config shape that can omit them).

use crate::entities::SearchConfig;
use crate::repositories::Operator;
use std::sync::Arc;

/// Builds the ordered operator plan for one request.
///
/// Order: expansion -> interpretation -> filter -> embedding -> vector
/// search -> recency -> reranking -> completion. Null slots are omitted.
pub fn plan(config: &SearchConfig) -> Vec<Arc<dyn Operator>> {
    let mut operators: Vec<Arc<dyn Operator>> = Vec::with_capacity(8);

    if let Some(op) = &config.query_expansion {
        operators.push(op.clone());
    }
    if let Some(op) = &config.query_interpretation {
        operators.push(op.clone());
    }
    if let Some(op) = &config.qdrant_filter {
        operators.push(op.clone());
    }

    operators.push(config.embedding.clone());
    operators.push(config.vector_search.clone());

    if let Some(op) = &config.recency {
        operators.push(op.clone());
    }
    if let Some(op) = &config.reranking {
        operators.push(op.clone());
    }
    if let Some(op) = &config.completion {
        operators.push(op.clone());
    }

    operators
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;

    struct NamedOp(&'static str);

    #[async_trait]
    impl Operator for NamedOp {
        fn name(&self) -> &str {
            self.0
        }
        fn depends_on(&self) -> HashSet<String> {
            HashSet::new()
        }
        async fn execute(&self, _context: &mut crate::entities::ExecutionContext) -> Result<(), crate::error::SearchError> {
            Ok(())
        }
    }

    fn minimal_config() -> SearchConfig {
        SearchConfig::builder("q", "col", Arc::new(NamedOp("embedding")), Arc::new(NamedOp("vector_search"))).build()
    }

    #[test]
    fn minimal_config_plans_exactly_the_two_required_operators() {
        let cfg = minimal_config();
        let names: Vec<&str> = plan(&cfg).iter().map(|op| op.name()).collect();
        assert_eq!(names, vec!["embedding", "vector_search"]);
    }

    #[test]
    fn full_config_preserves_logical_order() {
        let cfg = SearchConfig::builder("q", "col", Arc::new(NamedOp("embedding")), Arc::new(NamedOp("vector_search")))
            .query_expansion(Arc::new(NamedOp("query_expansion")))
            .query_interpretation(Arc::new(NamedOp("query_interpretation")))
            .qdrant_filter(Arc::new(NamedOp("qdrant_filter")))
            .recency(Arc::new(NamedOp("recency")))
            .reranking(Arc::new(NamedOp("reranking")))
            .completion(Arc::new(NamedOp("completion")))
            .build();

        let names: Vec<&str> = plan(&cfg).iter().map(|op| op.name()).collect();
        assert_eq!(
            names,
            vec![
                "query_expansion",
                "query_interpretation",
                "qdrant_filter",
                "embedding",
                "vector_search",
                "recency",
                "reranking",
                "completion",
            ]
        );
    }

    #[test]
    fn planning_twice_yields_identical_order() {
        let cfg = minimal_config();
        let first: Vec<&str> = plan(&cfg).iter().map(|op| op.name()).collect();
        let second: Vec<&str> = plan(&cfg).iter().map(|op| op.name()).collect();
        assert_eq!(first, second);
    }
}
