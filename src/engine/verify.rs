// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structural verification of a finished task plan.
//!
//! The builder's stack discipline already guarantees these properties. The
//! verifier re-checks them independently before a plan leaves the process, so a
//! regression in the converter or builder shows up as a loud failure instead of
//! a worker waiting forever on a variable nobody publishes.
//!
//! # Checks
//!
//! 1. **Non-empty**: at least one task
//! 2. **Indices**: `tasks[i].index == i`
//! 3. **Unique variables**: no variable is published twice
//! 4. **Producer before consumer**: every variable operand is published by a task
//!    with a strictly smaller index
//! 5. **Single final task**: exactly one task is final and it publishes the plan's
//!    final variable
//! 6. **Ownership**: every task carries the plan's example id

use std::collections::{HashMap, HashSet};

use super::task::TaskPlan;
use crate::errors::PlanValidationError;

/// Verify every structural invariant of `plan`, reporting all violations.
///
/// # Examples
///
/// ```rust
/// use calc_planner::engine::{plan_expression, verify_plan, UuidVariables};
///
/// let plan = plan_expression("(1+2)*3", "example-1", &UuidVariables).unwrap();
/// assert!(verify_plan(&plan).is_ok());
/// ```
pub fn verify_plan(plan: &TaskPlan) -> Result<(), Vec<PlanValidationError>> {
    if plan.is_empty() {
        return Err(vec![PlanValidationError::EmptyPlan]);
    }

    let mut errors = Vec::new();
    errors.extend(check_indices(plan));
    errors.extend(check_unique_variables(plan));
    errors.extend(check_producer_before_consumer(plan));
    errors.extend(check_final_task(plan));
    errors.extend(check_example_ids(plan));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_indices(plan: &TaskPlan) -> Vec<PlanValidationError> {
    plan.tasks()
        .iter()
        .enumerate()
        .filter(|(position, task)| task.index != *position)
        .map(|(position, task)| PlanValidationError::IndexMismatch {
            position,
            index: task.index,
        })
        .collect()
}

fn check_unique_variables(plan: &TaskPlan) -> Vec<PlanValidationError> {
    let mut seen = HashSet::new();
    plan.tasks()
        .iter()
        .filter(|task| !seen.insert(&task.variable))
        .map(|task| PlanValidationError::DuplicateVariable {
            variable: task.variable.to_string(),
        })
        .collect()
}

fn check_producer_before_consumer(plan: &TaskPlan) -> Vec<PlanValidationError> {
    // First producer wins; duplicates are reported separately.
    let mut producers = HashMap::new();
    for (position, task) in plan.tasks().iter().enumerate() {
        producers.entry(&task.variable).or_insert(position);
    }

    let mut errors = Vec::new();
    for (position, task) in plan.tasks().iter().enumerate() {
        for variable in task.dependencies() {
            match producers.get(variable) {
                None => errors.push(PlanValidationError::UnresolvedOperand {
                    task_index: position,
                    variable: variable.to_string(),
                }),
                Some(&producer) if producer >= position => {
                    errors.push(PlanValidationError::ForwardReference {
                        task_index: position,
                        producer_index: producer,
                        variable: variable.to_string(),
                    })
                }
                Some(_) => {}
            }
        }
    }
    errors
}

fn check_final_task(plan: &TaskPlan) -> Vec<PlanValidationError> {
    let finals: Vec<_> = plan.tasks().iter().filter(|task| task.is_final).collect();
    match finals.as_slice() {
        [task] if task.variable != *plan.final_variable() => {
            vec![PlanValidationError::FinalVariableMismatch {
                expected: plan.final_variable().to_string(),
                found: task.variable.to_string(),
            }]
        }
        [_] => Vec::new(),
        _ => vec![PlanValidationError::FinalTaskCount {
            count: finals.len(),
        }],
    }
}

fn check_example_ids(plan: &TaskPlan) -> Vec<PlanValidationError> {
    plan.tasks()
        .iter()
        .enumerate()
        .filter(|(_, task)| task.example_id != plan.example_id())
        .map(|(position, task)| PlanValidationError::ExampleIdMismatch {
            task_index: position,
            expected: plan.example_id().to_string(),
            found: task.example_id.clone(),
        })
        .collect()
}
