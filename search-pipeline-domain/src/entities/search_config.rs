// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Search Config
//!
//! The declarative, immutable-per-request input to the executor: a query,
//! pagination, and eight operator slots, each independently populated or
//! left `None`. `embedding` and `vector_search` are required; the rest are
//! optional and are simply omitted from the plan when absent.

use crate::repositories::Operator;
use std::sync::Arc;

/// Declarative pipeline configuration for a single search request.
pub struct SearchConfig {
    pub query: String,
    pub limit: u32,
    pub offset: u32,
    pub score_threshold: Option<f32>,
    pub collection_slug: String,

    pub query_expansion: Option<Arc<dyn Operator>>,
    pub query_interpretation: Option<Arc<dyn Operator>>,
    pub qdrant_filter: Option<Arc<dyn Operator>>,
    pub embedding: Arc<dyn Operator>,
    pub vector_search: Arc<dyn Operator>,
    pub recency: Option<Arc<dyn Operator>>,
    pub reranking: Option<Arc<dyn Operator>>,
    pub completion: Option<Arc<dyn Operator>>,
}

impl SearchConfig {
    /// Starts building a config. `query` may be empty — empty queries are
    /// legal and propagate to operators unchanged.
    pub fn builder(
        query: impl Into<String>,
        collection_slug: impl Into<String>,
        embedding: Arc<dyn Operator>,
        vector_search: Arc<dyn Operator>,
    ) -> SearchConfigBuilder {
        SearchConfigBuilder {
            query: query.into(),
            collection_slug: collection_slug.into(),
            limit: 10,
            offset: 0,
            score_threshold: None,
            embedding,
            vector_search,
            query_expansion: None,
            query_interpretation: None,
            qdrant_filter: None,
            recency: None,
            reranking: None,
            completion: None,
        }
    }
}

/// Builder for [`SearchConfig`]. `embedding` and `vector_search` are
/// supplied up front since they are required; the optional slots default
/// to `None` and are populated with `with_*` calls.
pub struct SearchConfigBuilder {
    query: String,
    collection_slug: String,
    limit: u32,
    offset: u32,
    score_threshold: Option<f32>,
    embedding: Arc<dyn Operator>,
    vector_search: Arc<dyn Operator>,
    query_expansion: Option<Arc<dyn Operator>>,
    query_interpretation: Option<Arc<dyn Operator>>,
    qdrant_filter: Option<Arc<dyn Operator>>,
    recency: Option<Arc<dyn Operator>>,
    reranking: Option<Arc<dyn Operator>>,
    completion: Option<Arc<dyn Operator>>,
}

impl SearchConfigBuilder {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = Some(threshold);
        self
    }

    pub fn query_expansion(mut self, op: Arc<dyn Operator>) -> Self {
        self.query_expansion = Some(op);
        self
    }

    pub fn query_interpretation(mut self, op: Arc<dyn Operator>) -> Self {
        self.query_interpretation = Some(op);
        self
    }

    pub fn qdrant_filter(mut self, op: Arc<dyn Operator>) -> Self {
        self.qdrant_filter = Some(op);
        self
    }

    pub fn recency(mut self, op: Arc<dyn Operator>) -> Self {
        self.recency = Some(op);
        self
    }

    pub fn reranking(mut self, op: Arc<dyn Operator>) -> Self {
        self.reranking = Some(op);
        self
    }

    pub fn completion(mut self, op: Arc<dyn Operator>) -> Self {
        self.completion = Some(op);
        self
    }

    pub fn build(self) -> SearchConfig {
        SearchConfig {
            query: self.query,
            limit: self.limit,
            offset: self.offset,
            score_threshold: self.score_threshold,
            collection_slug: self.collection_slug,
            query_expansion: self.query_expansion,
            query_interpretation: self.query_interpretation,
            qdrant_filter: self.qdrant_filter,
            embedding: self.embedding,
            vector_search: self.vector_search,
            recency: self.recency,
            reranking: self.reranking,
            completion: self.completion,
        }
    }
}
