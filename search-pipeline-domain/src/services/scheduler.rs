// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Dependency Scheduler
//!
//! Given a plan and the set of operator names already executed, returns
//! the subset of not-yet-executed operators that are ready to run: every
//! name in their `depends_on` is either already executed, or absent from
//! the plan entirely ("soft-missing" — a dependency on an operator the
//! config never enabled is treated as trivially satisfied, never as a
//! blocker).
//!
//! A plain function rather than a struct: it owns no state of its own,
//! the executor owns the `executed` set across iterations.

use crate::repositories::Operator;
use std::collections::HashSet;
use std::sync::Arc;

/// Returns the operators in `plan` that are ready to execute, preserving
/// `plan`'s relative order. Calling this again with an unchanged
/// `executed` set returns the same answer (idempotent).
pub fn find_ready(plan: &[Arc<dyn Operator>], executed: &HashSet<String>) -> Vec<Arc<dyn Operator>> {
    let planned_names: HashSet<&str> = plan.iter().map(|op| op.name()).collect();

    plan.iter()
        .filter(|op| !executed.contains(op.name()))
        .filter(|op| {
            op.depends_on()
                .iter()
                .all(|dep| executed.contains(dep) || !planned_names.contains(dep.as_str()))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct DepOp {
        name: &'static str,
        deps: &'static [&'static str],
    }

    #[async_trait]
    impl Operator for DepOp {
        fn name(&self) -> &str {
            self.name
        }
        fn depends_on(&self) -> HashSet<String> {
            self.deps.iter().map(|s| s.to_string()).collect()
        }
        async fn execute(&self, _context: &mut crate::entities::ExecutionContext) -> Result<(), crate::error::SearchError> {
            Ok(())
        }
    }

    fn op(name: &'static str, deps: &'static [&'static str]) -> Arc<dyn Operator> {
        Arc::new(DepOp { name, deps })
    }

    #[test]
    fn operators_with_no_dependencies_are_ready_immediately() {
        let plan = vec![op("embedding", &[]), op("vector_search", &["embedding"])];
        let ready = find_ready(&plan, &HashSet::new());
        let names: Vec<&str> = ready.iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["embedding"]);
    }

    #[test]
    fn dependency_on_an_absent_operator_is_soft_and_does_not_block() {
        let plan = vec![op("vector_search", &["embedding"])];
        let ready = find_ready(&plan, &HashSet::new());
        let names: Vec<&str> = ready.iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["vector_search"]);
    }

    #[test]
    fn dependency_on_a_planned_but_not_yet_executed_operator_blocks() {
        let plan = vec![op("embedding", &[]), op("vector_search", &["embedding"])];
        let ready = find_ready(&plan, &HashSet::new());
        let names: Vec<&str> = ready.iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["embedding"]);
    }

    #[test]
    fn dependency_satisfied_once_executed_set_contains_it() {
        let plan = vec![op("embedding", &[]), op("vector_search", &["embedding"])];
        let mut executed = HashSet::new();
        executed.insert("embedding".to_string());
        let ready = find_ready(&plan, &executed);
        let names: Vec<&str> = ready.iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["vector_search"]);
    }

    #[test]
    fn already_executed_operators_are_never_returned_again() {
        let plan = vec![op("embedding", &[])];
        let mut executed = HashSet::new();
        executed.insert("embedding".to_string());
        assert!(find_ready(&plan, &executed).is_empty());
    }

    #[test]
    fn calling_find_ready_twice_with_the_same_state_is_idempotent() {
        let plan = vec![op("embedding", &[]), op("vector_search", &["embedding"])];
        let executed = HashSet::new();
        let first: Vec<&str> = find_ready(&plan, &executed).iter().map(|o| o.name()).collect();
        let second: Vec<&str> = find_ready(&plan, &executed).iter().map(|o| o.name()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn mutually_dependent_planned_operators_yield_no_ready_operators() {
        let plan = vec![op("a", &["b"]), op("b", &["a"])];
        assert!(find_ready(&plan, &HashSet::new()).is_empty());
    }
}
