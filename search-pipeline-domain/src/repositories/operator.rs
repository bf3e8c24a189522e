// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Operator Interface
//!
//! Defines the uniform capability set every pipeline stage implements:
//! a name, a set of soft dependencies, and a single-shot execution entry
//! point. The executor only needs these three things; operator internals
//! (how query expansion actually expands a query, say) are owned entirely
//! by the implementation and are out of scope for this crate.

use crate::entities::execution_context::ExecutionContext;
use crate::error::SearchError;
use async_trait::async_trait;
use std::collections::HashSet;

/// A single pipeline stage.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: the executor holds operators
/// behind `Arc<dyn Operator>` and may run them from any task on the
/// caller's runtime.
#[async_trait]
pub trait Operator: Send + Sync {
    /// Unique identifier within a plan. Other operators reference this
    /// name in their `depends_on` set.
    fn name(&self) -> &str;

    /// Names of operators this operator reads from. A name that does not
    /// appear in the plan is a soft-missing dependency: the scheduler
    /// treats it as already satisfied.
    fn depends_on(&self) -> HashSet<String>;

    /// Executes this operator once, mutating `context` in place.
    ///
    /// Implementations should perform their own retry/fallback before
    /// returning an error: the executor treats every operator failure as
    /// fatal to the whole request.
    async fn execute(&self, context: &mut ExecutionContext) -> Result<(), SearchError>;
}
