// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::builder::TaskGraphBuilder;
use super::converter::convert;
use super::task::TaskPlan;
use super::token::Postfix;
use super::validator::validate;
use crate::errors::{PlanError, PlanningError};
use crate::traits::VariableGenerator;

/// A submitted expression and, once converted, its postfix form.
///
/// Request scoped: built from the raw text, converted once, then dropped after
/// its plan has been built.
#[derive(Debug, Clone)]
pub struct Expression {
    infix: String,
    postfix: Option<Postfix>,
}

impl Expression {
    pub fn new(infix: impl Into<String>) -> Self {
        Self {
            infix: infix.into(),
            postfix: None,
        }
    }

    pub fn infix(&self) -> &str {
        &self.infix
    }

    /// The postfix form, `None` until [`Expression::convert`] succeeds.
    pub fn postfix(&self) -> Option<&Postfix> {
        self.postfix.as_ref()
    }

    /// Whether the expression passes validation.
    pub fn check(&self) -> bool {
        validate(&self.infix)
    }

    /// Validate and convert to postfix, keeping the result.
    pub fn convert(&mut self) -> Result<&Postfix, PlanningError> {
        let postfix = convert(&self.infix)?;
        Ok(self.postfix.insert(postfix))
    }

    /// Convert if needed, then reduce the postfix form into a task plan.
    pub fn plan(
        &mut self,
        variables: &dyn VariableGenerator,
        example_id: &str,
    ) -> Result<TaskPlan, PlanningError> {
        if self.postfix.is_none() {
            self.convert()?;
        }
        let postfix = self.postfix.as_ref().ok_or(PlanError::EmptyPostfix)?;
        Ok(TaskGraphBuilder::new(variables).build(postfix, example_id)?)
    }
}

/// Plan an expression in one call: validate, convert, build.
///
/// This is the engine's single entry point for callers. It either rejects the
/// text as malformed or returns the ordered tasks and the final result variable
/// for `example_id`.
///
/// # Examples
///
/// ```rust
/// use calc_planner::engine::{plan_expression, SequentialVariables};
///
/// let variables = SequentialVariables::new("v");
///
/// let plan = plan_expression("~5+3", "example-1", &variables).unwrap();
/// let lines: Vec<String> = plan.tasks().iter().map(|t| t.to_string()).collect();
/// assert_eq!(lines, vec!["#0 0 - 5 -> v1", "#1 v1 + 3 -> v2 (final)"]);
///
/// let rejected = plan_expression("2+", "example-2", &variables).unwrap_err();
/// assert!(rejected.is_malformed());
/// ```
pub fn plan_expression(
    infix: &str,
    example_id: &str,
    variables: &dyn VariableGenerator,
) -> Result<TaskPlan, PlanningError> {
    Expression::new(infix).plan(variables, example_id)
}
