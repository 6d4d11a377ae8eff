// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while turning a validated expression into a task plan.
//!
//! None of these can be produced by input that passed the validator. When one
//! shows up it means the validation rules and the conversion rules disagree, so
//! they are kept apart from [`ExpressionError`] and are never persisted as a
//! user mistake.

use thiserror::Error;

use super::ExpressionError;

/// Internal consistency violations in the converter or the task graph builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// An operator found fewer operands on the stack than it consumes.
    #[error("operand stack underflow: operator '{operator}' at postfix position {position} needs {required} operand(s), found {available}")]
    OperandUnderflow {
        operator: char,
        position: usize,
        required: usize,
        available: usize,
    },

    /// A parenthesis had no partner when the converter reached it.
    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },

    /// The converter produced no tokens at all.
    #[error("postfix sequence is empty")]
    EmptyPostfix,

    /// The reduction did not end with exactly one value on the operand stack.
    #[error("reduction finished with {count} operand(s) left on the stack, expected exactly 1")]
    LeftoverOperands { count: usize },

    /// The remaining value is not the output of any emitted task.
    #[error("final value '{value}' is not produced by any task")]
    FinalTaskMissing { value: String },
}

/// Either failure the planning pipeline can end with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanningError {
    #[error(transparent)]
    Malformed(#[from] ExpressionError),

    #[error("internal planning defect: {0}")]
    Internal(#[from] PlanError),
}

impl PlanningError {
    /// True when the failure is the caller's input rather than a defect.
    pub fn is_malformed(&self) -> bool {
        matches!(self, PlanningError::Malformed(_))
    }
}

/// Structural problems found when re-checking a finished plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanValidationError {
    /// The plan has no tasks.
    #[error("plan contains no tasks")]
    EmptyPlan,

    /// A task's `index` does not match its position in the list.
    #[error("task at position {position} carries index {index}")]
    IndexMismatch { position: usize, index: usize },

    /// Two tasks publish under the same variable.
    #[error("variable '{variable}' is produced by more than one task")]
    DuplicateVariable { variable: String },

    /// A task reads a variable that no task produces.
    #[error("task {task_index} reads variable '{variable}' which no task produces")]
    UnresolvedOperand { task_index: usize, variable: String },

    /// A task reads a variable produced at the same or a later index.
    #[error("task {task_index} reads variable '{variable}' produced later by task {producer_index}")]
    ForwardReference {
        task_index: usize,
        producer_index: usize,
        variable: String,
    },

    /// Anything other than exactly one task is marked final.
    #[error("expected exactly one final task, found {count}")]
    FinalTaskCount { count: usize },

    /// The final task does not publish the plan's final variable.
    #[error("final task publishes '{found}' but the plan result is '{expected}'")]
    FinalVariableMismatch { expected: String, found: String },

    /// A task belongs to another calculation request.
    #[error("task {task_index} belongs to example '{found}', expected '{expected}'")]
    ExampleIdMismatch {
        task_index: usize,
        expected: String,
        found: String,
    },
}
