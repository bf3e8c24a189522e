// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Template Completion Adapter
//!
//! A [`CompletionProvider`] that renders a deterministic, templated
//! summary from the result set instead of calling an LLM. Good enough to
//! exercise `CompletionOperator` end to end without a network call.

use async_trait::async_trait;
use search_pipeline_domain::{CompletionError, CompletionProvider, SearchResult};

pub struct TemplateCompletionProvider;

#[async_trait]
impl CompletionProvider for TemplateCompletionProvider {
    async fn complete(&self, query: &str, results: &[SearchResult], _api_key: Option<&str>) -> Result<String, CompletionError> {
        if results.is_empty() {
            return Ok(format!("No results found for \"{query}\"."));
        }

        let top_ids: Vec<&str> = results.iter().take(3).map(|r| r.id.as_str()).collect();
        Ok(format!(
            "Found {} result(s) for \"{query}\"; top matches: {}.",
            results.len(),
            top_ids.join(", ")
        ))
    }
}
