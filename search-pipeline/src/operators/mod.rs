// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Built-in Operators
//!
//! Reference implementations of the eight pipeline stages. Each is a
//! deterministic stand-in for a real integration (an LLM call, a vector
//! database, a reranking model): callers are free to substitute their
//! own `Operator` implementations for any slot in [`search_pipeline_domain::SearchConfig`].

pub mod completion;
pub mod embedding;
pub mod qdrant_filter;
pub mod query_expansion;
pub mod query_interpretation;
pub mod recency;
pub mod reranking;
pub mod vector_search;

pub use completion::CompletionOperator;
pub use embedding::EmbeddingOperator;
pub use qdrant_filter::QdrantFilterOperator;
pub use query_expansion::QueryExpansionOperator;
pub use query_interpretation::QueryInterpretationOperator;
pub use recency::RecencyOperator;
pub use reranking::RerankingOperator;
pub use vector_search::VectorSearchOperator;
