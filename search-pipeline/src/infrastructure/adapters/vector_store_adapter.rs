// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # In-Memory Vector Store Adapter
//!
//! A fixed-catalog [`VectorStore`] scored by cosine similarity against
//! the query embedding. Stands in for Qdrant (or any real vector
//! database) in the demo binary and in tests.

use async_trait::async_trait;
use search_pipeline_domain::{VectorMatch, VectorStore, VectorStoreError};
use serde_json::Value;

/// One document in the in-memory catalog.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub id: String,
    pub embedding: Vec<f32>,
    pub payload: Value,
}

/// A small, fixed catalog searched by cosine similarity. Every
/// `collection` name shares the same catalog; this adapter has no
/// notion of per-collection partitioning, which is fine for a demo
/// where there is only ever one collection in play.
pub struct InMemoryVectorStore {
    catalog: Vec<CatalogEntry>,
}

impl InMemoryVectorStore {
    pub fn new(catalog: Vec<CatalogEntry>) -> Self {
        Self { catalog }
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn search(
        &self,
        _collection: &str,
        embedding: &[f32],
        _filter: Option<&Value>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<VectorMatch>, VectorStoreError> {
        let mut scored: Vec<VectorMatch> = self
            .catalog
            .iter()
            .map(|entry| VectorMatch {
                id: entry.id.clone(),
                score: cosine_similarity(embedding, &entry.embedding),
                payload: entry.payload.clone(),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        let results = scored.into_iter().skip(offset as usize).take(limit as usize).collect();
        Ok(results)
    }
}
