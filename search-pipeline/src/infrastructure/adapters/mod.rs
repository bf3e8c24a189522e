// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Adapters
//!
//! Concrete, swappable implementations of the domain crate's ports:
//! pubsub, analytics, the vector store, the completion provider, and the
//! opaque database handle. None of these are production-grade backends
//! — they exist to make the executor runnable and testable end to end.

pub mod analytics_adapter;
pub mod completion_adapter;
pub mod database_adapter;
pub mod pubsub_adapter;
pub mod vector_store_adapter;

pub use analytics_adapter::{LoggingAnalyticsSink, RecordingAnalyticsSink};
pub use completion_adapter::TemplateCompletionProvider;
pub use database_adapter::NullDatabase;
pub use pubsub_adapter::InMemoryPubSub;
pub use vector_store_adapter::{CatalogEntry, InMemoryVectorStore};
