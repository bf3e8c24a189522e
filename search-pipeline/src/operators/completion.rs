// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Completion Operator
//!
//! Terminal stage: summarizes `final_results` into a natural-language
//! answer via the injected [`CompletionProvider`] port. Soft-depends on
//! `vector_search` in addition to its hard dependency on `reranking` so
//! it still runs when reranking is disabled but vector search produced
//! `raw_results` directly (finalized into `final_results` by the
//! executor's fallback).

use async_trait::async_trait;
use search_pipeline_domain::{CompletionProvider, ExecutionContext, Operator, SearchError};
use std::collections::HashSet;
use std::sync::Arc;

pub struct CompletionOperator {
    provider: Arc<dyn CompletionProvider>,
}

impl CompletionOperator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Operator for CompletionOperator {
    fn name(&self) -> &str {
        "completion"
    }

    fn depends_on(&self) -> HashSet<String> {
        ["reranking", "vector_search"].into_iter().map(String::from).collect()
    }

    async fn execute(&self, context: &mut ExecutionContext) -> Result<(), SearchError> {
        let results = context.final_results.clone().or_else(|| context.raw_results.clone()).unwrap_or_default();

        let api_key = context.api_keys.openai_api_key.as_deref();
        let completion = self
            .provider
            .complete(&context.query, &results, api_key)
            .await
            .map_err(|err| SearchError::operator(self.name(), err))?;

        context.completion = Some(completion);
        Ok(())
    }
}
