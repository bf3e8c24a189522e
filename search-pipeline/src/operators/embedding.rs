// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Embedding Operator
//!
//! Reference implementation: produces a fixed-dimension vector per
//! expanded query by seeding a PRNG from the query text, so the same
//! text always yields the same embedding without calling out to a real
//! embedding model.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use search_pipeline_domain::{ExecutionContext, Operator, SearchError};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Dimensionality of the stub embeddings this operator produces.
pub const EMBEDDING_DIMENSIONS: usize = 16;

pub struct EmbeddingOperator;

fn seed_for(text: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

/// Computes the same deterministic embedding the operator assigns to a
/// query, for callers (e.g. the demo binary) seeding a matching catalog.
pub fn embed(text: &str) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed_for(text));
    (0..EMBEDDING_DIMENSIONS).map(|_| rng.random_range(-1.0f32..=1.0f32)).collect()
}

#[async_trait]
impl Operator for EmbeddingOperator {
    fn name(&self) -> &str {
        "embedding"
    }

    fn depends_on(&self) -> HashSet<String> {
        HashSet::new()
    }

    async fn execute(&self, context: &mut ExecutionContext) -> Result<(), SearchError> {
        let queries = context.expanded_queries.clone().unwrap_or_else(|| vec![context.query.clone()]);
        let embeddings = queries.iter().map(|q| embed(q)).collect();
        context.embeddings = Some(embeddings);
        Ok(())
    }
}
