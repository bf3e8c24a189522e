// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Recency Operator
//!
//! Reference implementation: blends each result's similarity score with
//! a recency boost derived from a `updated_at` (RFC 3339) field in its
//! payload, when present. Results without a recognizable timestamp are
//! left at their original score.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use search_pipeline_domain::{ExecutionContext, Operator, SearchError};
use std::collections::HashSet;

/// Weight given to the recency boost relative to the original score.
const RECENCY_WEIGHT: f32 = 0.1;

/// Results newer than this are considered maximally recent.
const RECENCY_HORIZON_DAYS: f32 = 365.0;

fn recency_boost(payload: &serde_json::Value, now: DateTime<Utc>) -> f32 {
    let Some(raw) = payload.get("updated_at").and_then(|v| v.as_str()) else {
        return 0.0;
    };
    let Ok(updated_at) = DateTime::parse_from_rfc3339(raw) else {
        return 0.0;
    };
    let age_days = (now - updated_at.with_timezone(&Utc)).num_seconds() as f32 / 86_400.0;
    (1.0 - (age_days / RECENCY_HORIZON_DAYS)).clamp(0.0, 1.0)
}

pub struct RecencyOperator {
    now: DateTime<Utc>,
}

impl RecencyOperator {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

#[async_trait]
impl Operator for RecencyOperator {
    fn name(&self) -> &str {
        "recency"
    }

    fn depends_on(&self) -> HashSet<String> {
        ["vector_search"].into_iter().map(String::from).collect()
    }

    async fn execute(&self, context: &mut ExecutionContext) -> Result<(), SearchError> {
        let Some(results) = context.raw_results.as_mut() else {
            return Ok(());
        };
        for result in results.iter_mut() {
            let boost = recency_boost(&result.payload, self.now);
            result.score += boost * RECENCY_WEIGHT;
        }
        Ok(())
    }
}
