// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # In-Memory Pubsub Adapter
//!
//! A process-local [`EventPublisher`] backed by `tokio::sync::broadcast`,
//! one channel per logical pubsub channel name. Stands in for the
//! Redis-backed pubsub the original system uses; subscribers in this
//! process (the demo binary, tests) get exactly the same fan-out
//! semantics without an external broker.

use async_trait::async_trait;
use parking_lot::RwLock;
use search_pipeline_domain::{EventPublisher, PublishError};
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::broadcast;

/// Default per-channel broadcast buffer. A slow subscriber that falls
/// this far behind starts missing messages; publish itself never blocks
/// or fails because of it (`broadcast::Sender::send` only fails when
/// there are zero receivers, which this adapter treats as a normal,
/// silently-dropped publish).
pub const DEFAULT_CHANNEL_BUFFER: usize = 128;

/// Publishes JSON payloads to named in-process channels.
pub struct InMemoryPubSub {
    channels: RwLock<HashMap<String, broadcast::Sender<Value>>>,
    buffer: usize,
}

impl InMemoryPubSub {
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }

    /// Subscribes to `channel`, creating it if it doesn't exist yet.
    pub fn subscribe(&self, channel: &str) -> broadcast::Receiver<Value> {
        let mut channels = self.channels.write();
        channels
            .entry(channel.to_string())
            .or_insert_with(|| broadcast::channel(self.buffer).0)
            .subscribe()
    }
}

impl Default for InMemoryPubSub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryPubSub {
    async fn publish(&self, channel: &str, payload: Value) -> Result<(), PublishError> {
        let sender = {
            let mut channels = self.channels.write();
            channels.entry(channel.to_string()).or_insert_with(|| broadcast::channel(self.buffer).0).clone()
        };

        // No subscribers is not an error: the pipeline must not depend on
        // anyone listening.
        let _ = sender.send(payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn a_subscriber_receives_published_payloads() {
        let pubsub = InMemoryPubSub::new();
        let mut rx = pubsub.subscribe("search:req-1");

        pubsub.publish("search:req-1", json!({"type": "start"})).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received["type"], "start");
    }

    #[tokio::test]
    async fn publishing_with_no_subscribers_still_succeeds() {
        let pubsub = InMemoryPubSub::new();
        let result = pubsub.publish("search:req-none", json!({"type": "start"})).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn channels_are_independent() {
        let pubsub = InMemoryPubSub::new();
        let mut rx_a = pubsub.subscribe("search:a");
        let mut rx_b = pubsub.subscribe("search:b");

        pubsub.publish("search:a", json!({"type": "start"})).await.unwrap();

        assert!(rx_a.try_recv().is_ok());
        assert!(rx_b.try_recv().is_err());
    }
}
