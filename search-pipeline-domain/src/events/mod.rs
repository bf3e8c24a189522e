// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Events
//!
//! The event envelope and type-specific payloads published over pubsub.

pub mod search_event;

pub use search_event::{
    DonePayload, ErrorPayload, EventEnvelope, EventPayload, OperatorEndPayload, OperatorStartPayload, ResultsPayload,
    StartPayload, SummaryPayload,
};
