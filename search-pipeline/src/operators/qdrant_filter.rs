// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Qdrant Filter Operator
//!
//! Merges `interpreted_filter` into the filter object passed to the
//! vector store. Declares soft dependencies on both
//! `query_interpretation` and `query_expansion` so it still runs
//! immediately when either (or both) of those optional stages is
//! disabled, per the soft-missing-dependency contract.

use async_trait::async_trait;
use search_pipeline_domain::{ExecutionContext, Operator, SearchError};
use serde_json::Value;
use std::collections::HashSet;

pub struct QdrantFilterOperator;

#[async_trait]
impl Operator for QdrantFilterOperator {
    fn name(&self) -> &str {
        "qdrant_filter"
    }

    fn depends_on(&self) -> HashSet<String> {
        ["query_interpretation", "query_expansion"].into_iter().map(String::from).collect()
    }

    async fn execute(&self, context: &mut ExecutionContext) -> Result<(), SearchError> {
        context.qdrant_filter = Some(context.interpreted_filter.clone().unwrap_or(Value::Null));
        Ok(())
    }
}
