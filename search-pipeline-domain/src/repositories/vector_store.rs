// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Vector Store Port
//!
//! The collaborator `VectorSearchOperator` queries. Named after the
//! concrete store (Qdrant) the original source integrates with, but kept
//! generic here: this crate has no opinion on which vector database
//! backs it.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// One candidate returned by a vector similarity query, before any
/// pipeline-specific post-processing (recency, reranking) runs.
#[derive(Debug, Clone)]
pub struct VectorMatch {
    pub id: String,
    pub score: f32,
    pub payload: Value,
}

/// Error returned by a vector store query.
#[derive(Debug)]
pub struct VectorStoreError(pub String);

impl fmt::Display for VectorStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector store query failed: {}", self.0)
    }
}

impl std::error::Error for VectorStoreError {}

/// Queries a vector collection by embedding similarity.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Returns up to `limit` matches in `collection`, skipping the first
    /// `offset`, for the given `embedding`, optionally constrained by a
    /// backend-specific `filter`.
    async fn search(
        &self,
        collection: &str,
        embedding: &[f32],
        filter: Option<&Value>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<VectorMatch>, VectorStoreError>;
}
