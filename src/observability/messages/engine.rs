// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the planning pipeline.
//!
//! This module contains message types for logging events related to:
//! * Expression rejection by the validator
//! * Infix to postfix conversion
//! * Task graph construction
//! * Internal consistency violations

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Expression rejected by the validator.
///
/// # Log Level
/// `debug!` - Expected outcome for bad user input
///
/// # Example
/// ```
/// use calc_planner::observability::messages::engine::ExpressionRejected;
///
/// let msg = ExpressionRejected {
///     expression: "2++3",
///     rule: "two binary operators in a row",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ExpressionRejected<'a> {
    pub expression: &'a str,
    pub rule: &'a str,
}

impl Display for ExpressionRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Expression '{}' rejected: {}", self.expression, self.rule)
    }
}

impl StructuredLog for ExpressionRejected<'_> {
    fn log(&self) {
        tracing::debug!(
            expression = self.expression,
            rule = self.rule,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "expression_rejected",
            span_name = name,
            expression = self.expression,
            rule = self.rule,
        )
    }
}

/// Infix expression converted to postfix.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct PostfixConverted<'a> {
    pub infix: &'a str,
    pub postfix: &'a str,
    pub token_count: usize,
}

impl Display for PostfixConverted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Converted '{}' to postfix '{}' ({} tokens)",
            self.infix, self.postfix, self.token_count
        )
    }
}

impl StructuredLog for PostfixConverted<'_> {
    fn log(&self) {
        tracing::debug!(
            infix = self.infix,
            postfix = self.postfix,
            token_count = self.token_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "postfix_converted",
            span_name = name,
            infix = self.infix,
            token_count = self.token_count,
        )
    }
}

/// Task plan built from a postfix sequence.
///
/// # Log Level
/// `debug!` - Diagnostic detail
///
/// # Example
/// ```
/// use calc_planner::observability::messages::engine::PlanBuilt;
///
/// let msg = PlanBuilt {
///     example_id: "example-1",
///     task_count: 3,
///     final_variable: "v3",
/// };
///
/// assert_eq!(msg.to_string(), "Built plan for example 'example-1': 3 tasks, result in 'v3'");
/// ```
pub struct PlanBuilt<'a> {
    pub example_id: &'a str,
    pub task_count: usize,
    pub final_variable: &'a str,
}

impl Display for PlanBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built plan for example '{}': {} tasks, result in '{}'",
            self.example_id, self.task_count, self.final_variable
        )
    }
}

impl StructuredLog for PlanBuilt<'_> {
    fn log(&self) {
        tracing::debug!(
            example_id = self.example_id,
            task_count = self.task_count,
            final_variable = self.final_variable,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "plan_built",
            span_name = name,
            example_id = self.example_id,
            task_count = self.task_count,
        )
    }
}

/// An operator found too few operands during reduction.
///
/// # Log Level
/// `error!` - Validator and builder disagree; this is a defect
pub struct OperandUnderflow {
    pub operator: char,
    pub position: usize,
    pub required: usize,
    pub available: usize,
}

impl Display for OperandUnderflow {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Operand stack underflow at postfix position {}: '{}' needs {} operand(s), {} available",
            self.position, self.operator, self.required, self.available
        )
    }
}

impl StructuredLog for OperandUnderflow {
    fn log(&self) {
        tracing::error!(
            operator = %self.operator,
            position = self.position,
            required = self.required,
            available = self.available,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "operand_underflow",
            span_name = name,
            operator = %self.operator,
            position = self.position,
        )
    }
}

/// A parenthesis reached the converter without a partner.
///
/// # Log Level
/// `error!` - Validator and converter disagree; this is a defect
pub struct UnbalancedParenthesis {
    pub position: usize,
}

impl Display for UnbalancedParenthesis {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unbalanced parenthesis reached the converter at position {}", self.position)
    }
}

impl StructuredLog for UnbalancedParenthesis {
    fn log(&self) {
        tracing::error!(position = self.position, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "unbalanced_parenthesis",
            span_name = name,
            position = self.position,
        )
    }
}
