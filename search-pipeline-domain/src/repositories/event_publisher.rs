// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Event Publisher Port
//!
//! The emitter publishes assembled event frames through this trait. The
//! core never constructs a concrete pubsub client; it only depends on this
//! interface, matching spec.md's treatment of pubsub as an external
//! collaborator.

use async_trait::async_trait;
use std::fmt;

/// Error returned by a publish attempt. The emitter swallows this: a
/// subscriber that cannot receive an event must never fail the pipeline.
#[derive(Debug)]
pub struct PublishError(pub String);

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "publish failed: {}", self.0)
    }
}

impl std::error::Error for PublishError {}

/// Publishes event frames to a named logical channel.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publishes `payload` (already JSON-serialized) to `channel`.
    async fn publish(&self, channel: &str, payload: serde_json::Value) -> Result<(), PublishError>;
}
