// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Repositories
//!
//! Ports the domain depends on but does not implement: the operator
//! capability set, and the external collaborators (pubsub, analytics,
//! database) the executor consumes without owning.

pub mod analytics_sink;
pub mod completion_provider;
pub mod database;
pub mod event_publisher;
pub mod operator;
pub mod vector_store;

pub use analytics_sink::{AnalyticsSink, AnalyticsSinkError, SearchQueryEvent, SearchStatus, SearchType};
pub use completion_provider::{CompletionError, CompletionProvider};
pub use database::Database;
pub use event_publisher::{EventPublisher, PublishError};
pub use operator::Operator;
pub use vector_store::{VectorMatch, VectorStore, VectorStoreError};
