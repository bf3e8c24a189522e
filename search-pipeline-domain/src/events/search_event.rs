// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Search Event Model
//!
//! The event frame published to `search:<request_id>` and the
//! type-specific payloads merged into it. Rendered as a generic envelope
//! plus an `EventPayload` trait, in the style of the teacher's
//! `DomainEvent<T>` / `EventPayload` pair, specialized to the fixed event
//! vocabulary spec.md §3/§6 define (`start`, `operator_start`,
//! `operator_end`, `error`, `results`, `summary`, `done`).

use crate::entities::execution_context::OperatorFailure;
use crate::entities::search_result::SearchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The envelope every event carries, independent of its type.
///
/// `seq` is strictly increasing and dense within one request; `op_seq` is
/// present only when `op` is (per-operator monotonic counter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type")]
    pub event_type: String,
    pub seq: u64,
    pub op: Option<String>,
    pub op_seq: Option<u64>,
    pub ts: DateTime<Utc>,
    #[serde(flatten)]
    pub data: Value,
}

/// A type-specific event payload, merged into the envelope at emit time.
///
/// Mirrors the teacher's `EventPayload` trait (`event_name`, `validate`)
/// but specialized: this crate's event vocabulary is closed (the seven
/// types in spec.md §3), so there is no open-ended `EventCategory`.
pub trait EventPayload: Serialize {
    /// The wire-level `type` discriminant for this payload.
    fn event_type(&self) -> &'static str;

    /// Serializes the payload's fields for merging into the envelope.
    fn to_data(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartPayload {
    pub request_id: Option<String>,
    pub query: String,
    pub limit: u32,
    pub offset: u32,
}

impl EventPayload for StartPayload {
    fn event_type(&self) -> &'static str {
        "start"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorStartPayload {
    pub name: String,
}

impl EventPayload for OperatorStartPayload {
    fn event_type(&self) -> &'static str {
        "operator_start"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorEndPayload {
    pub name: String,
    pub ms: f64,
}

impl EventPayload for OperatorEndPayload {
    fn event_type(&self) -> &'static str {
        "operator_end"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub operation: String,
    pub message: String,
}

impl EventPayload for ErrorPayload {
    fn event_type(&self) -> &'static str {
        "error"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsPayload {
    pub results: Vec<SearchResult>,
}

impl EventPayload for ResultsPayload {
    fn event_type(&self) -> &'static str {
        "results"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryPayload {
    pub timings: HashMap<String, f64>,
    pub errors: Vec<OperatorFailure>,
    pub total_time_ms: f64,
}

impl EventPayload for SummaryPayload {
    fn event_type(&self) -> &'static str {
        "summary"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonePayload {
    pub request_id: Option<String>,
}

impl EventPayload for DonePayload {
    fn event_type(&self) -> &'static str {
        "done"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_end_payload_serializes_expected_fields() {
        let payload = OperatorEndPayload {
            name: "embedding".into(),
            ms: 12.5,
        };
        let data = payload.to_data();
        assert_eq!(data["name"], "embedding");
        assert_eq!(data["ms"], 12.5);
        assert_eq!(payload.event_type(), "operator_end");
    }
}
