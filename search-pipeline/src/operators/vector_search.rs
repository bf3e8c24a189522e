// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Vector Search Operator
//!
//! Bridges the pipeline to the injected [`VectorStore`] port. Depends on
//! `embedding` for its query vector and soft-depends on `qdrant_filter`
//! so it still runs when the filter stage is disabled.

use async_trait::async_trait;
use search_pipeline_domain::{ExecutionContext, Operator, SearchError, SearchResult, VectorStore};
use std::collections::HashSet;
use std::sync::Arc;

pub struct VectorSearchOperator {
    store: Arc<dyn VectorStore>,
}

impl VectorSearchOperator {
    pub fn new(store: Arc<dyn VectorStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Operator for VectorSearchOperator {
    fn name(&self) -> &str {
        "vector_search"
    }

    fn depends_on(&self) -> HashSet<String> {
        ["embedding", "qdrant_filter"].into_iter().map(String::from).collect()
    }

    async fn execute(&self, context: &mut ExecutionContext) -> Result<(), SearchError> {
        let embedding = context
            .embeddings
            .as_ref()
            .and_then(|embeddings| embeddings.first())
            .ok_or_else(|| SearchError::operator_message(self.name(), "no embedding available to search with"))?;

        let filter = context.qdrant_filter.as_ref().filter(|value| !value.is_null());

        let matches = self
            .store
            .search(&context.config.collection_slug, embedding, filter, context.config.limit, context.config.offset)
            .await
            .map_err(|err| SearchError::operator(self.name(), err))?;

        context.raw_results =
            Some(matches.into_iter().map(|m| SearchResult::new(m.id, m.score).with_payload(m.payload)).collect());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_pipeline_domain::{ApiKeys, Database, RequestContext, SearchConfig, VectorMatch, VectorStoreError};
    use serde_json::{json, Value};
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

    struct StubStore {
        fail: bool,
    }

    #[async_trait]
    impl VectorStore for StubStore {
        async fn search(
            &self,
            _collection: &str,
            _embedding: &[f32],
            filter: Option<&Value>,
            _limit: u32,
            _offset: u32,
        ) -> Result<Vec<VectorMatch>, VectorStoreError> {
            if self.fail {
                return Err(VectorStoreError("unreachable".into()));
            }
            Ok(vec![VectorMatch {
                id: "doc-1".into(),
                score: 0.5,
                payload: json!({"filter_seen": filter.cloned().unwrap_or(Value::Null)}),
            }])
        }
    }

    fn context() -> ExecutionContext {
        let config = SearchConfig::builder("q", "docs", Arc::new(NoopOp), Arc::new(NoopOp)).build();
        ExecutionContext::new(
            "q".into(),
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
    async fn writes_raw_results_from_the_vector_store() {
        let mut ctx = context();
        ctx.embeddings = Some(vec![vec![0.1, 0.2]]);
        let op = VectorSearchOperator::new(Arc::new(StubStore { fail: false }));
        op.execute(&mut ctx).await.unwrap();
        let results = ctx.raw_results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "doc-1");
    }

    #[tokio::test]
    async fn fails_without_an_embedding() {
        let mut ctx = context();
        let op = VectorSearchOperator::new(Arc::new(StubStore { fail: false }));
        assert!(op.execute(&mut ctx).await.is_err());
    }

    #[tokio::test]
    async fn propagates_vector_store_errors() {
        let mut ctx = context();
        ctx.embeddings = Some(vec![vec![0.1, 0.2]]);
        let op = VectorSearchOperator::new(Arc::new(StubStore { fail: true }));
        assert!(op.execute(&mut ctx).await.is_err());
    }
}
