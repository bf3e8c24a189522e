// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Search Error Taxonomy
//!
//! Errors the executor can raise to its caller. Streaming and analytics
//! failures are deliberately absent from this enum: per the propagation
//! policy, publish and analytics failures are swallowed at the point of
//! occurrence and never surface as a `Result` to the caller.

use std::fmt;

/// Errors surfaced from running a search pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A required operator slot was missing from the config. This is a
    /// programmer error, raised before `start` is emitted.
    #[error("invalid pipeline plan: {0}")]
    Plan(String),

    /// An operator failed during execution. Carries the failing operator's
    /// name and the underlying error.
    #[error("operator '{operation}' failed: {source}")]
    Operator {
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The dependency scheduler could not make progress: the remaining
    /// operators' dependencies form a cycle or reference an operator that
    /// will never execute. Not an error raised to the caller — the executor
    /// logs a warning and returns with partial results — but kept in the
    /// taxonomy since it is a genuine failure mode worth naming.
    #[error("unsatisfiable dependencies, operators stalled: {0:?}")]
    SchedulerDeadlock(Vec<String>),

    /// The caller cancelled execution while an operator was running.
    #[error("search cancelled while running '{0}'")]
    Cancelled(String),
}

impl SearchError {
    /// Builds an [`SearchError::Operator`] from any `Send + Sync` error.
    pub fn operator(operation: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Operator {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Builds an [`SearchError::Operator`] from a plain message, for
    /// operators that fail with a string rather than a typed error.
    pub fn operator_message(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Operator {
            operation: operation.into(),
            source: Box::new(MessageError(message.into())),
        }
    }

    /// The operator name associated with this error, if any.
    pub fn operation_name(&self) -> Option<&str> {
        match self {
            SearchError::Operator { operation, .. } => Some(operation),
            SearchError::Cancelled(operation) => Some(operation),
            _ => None,
        }
    }

    /// The underlying failure message, without the `operator '<name>'
    /// failed: ` wrapper `Display` adds. Events and `OperatorFailure`
    /// records want the raw message an operator reported, not this
    /// error's own formatting of it.
    pub fn raw_message(&self) -> String {
        match self {
            SearchError::Operator { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

/// A minimal `Error` wrapper around a plain message, used when an operator
/// has nothing more structured to report.
#[derive(Debug)]
struct MessageError(String);

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for MessageError {}
