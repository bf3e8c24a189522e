// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Query Expansion Operator
//!
//! Reference implementation: expands the query into itself plus a
//! lowercased variant. A production operator would call an LLM or a
//! synonym service; this one exists so the pipeline is runnable and
//! testable end to end without one.

use async_trait::async_trait;
use search_pipeline_domain::{ExecutionContext, Operator, SearchError};
use std::collections::HashSet;

pub struct QueryExpansionOperator;

#[async_trait]
impl Operator for QueryExpansionOperator {
    fn name(&self) -> &str {
        "query_expansion"
    }

    fn depends_on(&self) -> HashSet<String> {
        HashSet::new()
    }

    async fn execute(&self, context: &mut ExecutionContext) -> Result<(), SearchError> {
        let lowercased = context.query.to_lowercase();

        let mut expanded = vec![context.query.clone()];
        if lowercased != context.query {
            expanded.push(lowercased);
        }

        context.expanded_queries = Some(expanded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_pipeline_domain::{ApiKeys, Database, RequestContext, SearchConfig};
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

    fn context_for(query: &str) -> ExecutionContext {
        let config = SearchConfig::builder(query, "docs", Arc::new(NoopOp), Arc::new(NoopOp)).build();
        ExecutionContext::new(
            query.to_string(),
            Arc::new(config),
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
    async fn mixed_case_query_expands_to_two_variants() {
        let mut context = context_for("Hello World");
        QueryExpansionOperator.execute(&mut context).await.unwrap();
        assert_eq!(context.expanded_queries.unwrap(), vec!["Hello World", "hello world"]);
    }

    #[tokio::test]
    async fn already_lowercase_query_expands_to_one_variant() {
        let mut context = context_for("hello");
        QueryExpansionOperator.execute(&mut context).await.unwrap();
        assert_eq!(context.expanded_queries.unwrap(), vec!["hello"]);
    }
}
