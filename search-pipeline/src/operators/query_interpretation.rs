// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Query Interpretation Operator
//!
//! Reference implementation: derives a structured filter from
//! `field:value` tokens embedded in the query text (e.g. `type:pdf`).
//! A production operator would use an LLM to infer intent; this one is
//! a deterministic stand-in.

use async_trait::async_trait;
use search_pipeline_domain::{ExecutionContext, Operator, SearchError};
use serde_json::{json, Map, Value};
use std::collections::HashSet;

pub struct QueryInterpretationOperator;

#[async_trait]
impl Operator for QueryInterpretationOperator {
    fn name(&self) -> &str {
        "query_interpretation"
    }

    fn depends_on(&self) -> HashSet<String> {
        ["query_expansion"].into_iter().map(String::from).collect()
    }

    async fn execute(&self, context: &mut ExecutionContext) -> Result<(), SearchError> {
        let source = context
            .expanded_queries
            .as_ref()
            .and_then(|queries| queries.first())
            .cloned()
            .unwrap_or_else(|| context.query.clone());

        let mut fields = Map::new();
        for token in source.split_whitespace() {
            if let Some((field, value)) = token.split_once(':') {
                if !field.is_empty() && !value.is_empty() {
                    fields.insert(field.to_string(), json!(value));
                }
            }
        }

        context.interpreted_filter = Some(Value::Object(fields));
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
    async fn field_value_tokens_become_filter_entries() {
        let mut context = context_for("rust type:pdf lang:en");
        QueryInterpretationOperator.execute(&mut context).await.unwrap();
        let filter = context.interpreted_filter.unwrap();
        assert_eq!(filter["type"], "pdf");
        assert_eq!(filter["lang"], "en");
    }

    #[tokio::test]
    async fn query_without_field_tokens_produces_an_empty_filter() {
        let mut context = context_for("just plain text");
        QueryInterpretationOperator.execute(&mut context).await.unwrap();
        assert_eq!(context.interpreted_filter.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn prefers_the_first_expanded_query_when_present() {
        let mut context = context_for("ignored");
        context.expanded_queries = Some(vec!["type:doc".to_string()]);
        QueryInterpretationOperator.execute(&mut context).await.unwrap();
        assert_eq!(context.interpreted_filter.unwrap()["type"], "doc");
    }
}
