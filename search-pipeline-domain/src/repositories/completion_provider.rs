// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Completion Provider Port
//!
//! The collaborator `CompletionOperator` calls to summarize the final
//! result set into a natural-language answer. Stands in for whatever LLM
//! API the original system calls; this crate only needs the shape of
//! the request/response.

use crate::entities::search_result::SearchResult;
use async_trait::async_trait;
use std::fmt;

/// Error returned by a completion request.
#[derive(Debug)]
pub struct CompletionError(pub String);

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "completion request failed: {}", self.0)
    }
}

impl std::error::Error for CompletionError {}

/// Summarizes a query and its results into a single completion string.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, query: &str, results: &[SearchResult], api_key: Option<&str>) -> Result<String, CompletionError>;
}
