// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The planning pipeline: validator, infix to postfix converter, task graph builder.
//!
//! ```text
//! "2+3*4" --validate--> ok --convert--> 2 3 4 * + --build--> #0 3 * 4 -> v1
//!                                                           #1 2 + v1 -> v2 (final)
//! ```
//!
//! Everything here is synchronous, allocation-only and free of shared state apart
//! from the variable generator, so concurrent requests need no coordination.

mod builder;
mod converter;
mod dependency_graph;
mod entry_points;
mod expression;
mod levels;
mod operators;
mod task;
mod token;
mod validator;
mod variables;
mod verify;

#[cfg(test)]
mod integration_tests;

pub use builder::TaskGraphBuilder;
pub use converter::convert;
pub use dependency_graph::DependencyGraph;
pub use entry_points::EntryPoints;
pub use expression::{plan_expression, Expression};
pub use operators::{
    operator_info, Associativity, Operator, OperatorInfo, Sign, OPERATOR_TABLE,
};
pub use task::{Operand, Task, TaskPlan, ZERO};
pub use token::{is_numeric_literal, Postfix, Token, VariableId};
pub use validator::{check, find_violation, strip_whitespace, validate, Violation};
pub use variables::{SequentialVariables, UuidVariables};
pub use verify::verify_plan;
