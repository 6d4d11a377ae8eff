// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reduction of a postfix sequence into an ordered task list.
//!
//! One left-to-right pass with an operand stack. In postfix form every operator's
//! operands are already on the stack when the operator is reached, so each task
//! only ever reads literals or variables of tasks emitted before it. Dispatching
//! tasks in `index` order therefore satisfies every data dependency without a
//! separate resolution pass.
//!
//! ```text
//! postfix   2 3 4 * +
//!
//! token  stack          emitted
//! 2      [2]
//! 3      [2, 3]
//! 4      [2, 3, 4]
//! *      [2, v1]        #0  3 * 4 -> v1
//! +      [v2]           #1  2 + v1 -> v2 (final)
//! ```

use super::operators::{Operator, Sign};
use super::task::{Operand, Task, TaskPlan};
use super::token::{Postfix, Token};
use crate::errors::PlanError;
use crate::observability::messages::engine::{OperandUnderflow, PlanBuilt};
use crate::observability::messages::StructuredLog;
use crate::traits::VariableGenerator;

/// Builds [`TaskPlan`]s, drawing result identifiers from a [`VariableGenerator`].
pub struct TaskGraphBuilder<'a> {
    variables: &'a dyn VariableGenerator,
}

impl<'a> TaskGraphBuilder<'a> {
    pub fn new(variables: &'a dyn VariableGenerator) -> Self {
        Self { variables }
    }

    /// Reduce `postfix` into tasks owned by `example_id`.
    ///
    /// A postfix sequence holding a single literal becomes the one task
    /// `0 + literal`, so every expression yields at least one task and a result
    /// variable.
    ///
    /// # Errors
    /// Every [`PlanError`] here means the input did not come from a validated
    /// expression; they are logged at `error` level before being returned.
    ///
    /// # Examples
    /// ```
    /// use calc_planner::engine::{convert, SequentialVariables, TaskGraphBuilder};
    ///
    /// let variables = SequentialVariables::new("v");
    /// let postfix = convert("2+3*4").unwrap();
    /// let plan = TaskGraphBuilder::new(&variables).build(&postfix, "example-1").unwrap();
    ///
    /// assert_eq!(plan.tasks()[0].to_string(), "#0 3 * 4 -> v1");
    /// assert_eq!(plan.tasks()[1].to_string(), "#1 2 + v1 -> v2 (final)");
    /// assert_eq!(plan.final_variable().as_str(), "v2");
    /// ```
    pub fn build(&self, postfix: &Postfix, example_id: &str) -> Result<TaskPlan, PlanError> {
        let mut tasks: Vec<Task> = Vec::with_capacity(postfix.operator_count().max(1));
        let mut operands: Vec<Operand> = Vec::new();

        match postfix.tokens() {
            [] => return Err(PlanError::EmptyPostfix),
            [Token::Number(literal)] => {
                self.emit(
                    &mut tasks,
                    &mut operands,
                    Operand::zero(),
                    Operand::Literal(literal.clone()),
                    Sign::Add,
                    example_id,
                );
            }
            tokens => {
                for (position, token) in tokens.iter().enumerate() {
                    match token {
                        Token::Number(literal) => operands.push(Operand::Literal(literal.clone())),
                        Token::Variable(variable) => {
                            operands.push(Operand::Variable(variable.clone()))
                        }
                        Token::Operator(operator) => {
                            let (num1, num2) = pop_operands(&mut operands, *operator, position)?;
                            self.emit(
                                &mut tasks,
                                &mut operands,
                                num1,
                                num2,
                                operator.sign(),
                                example_id,
                            );
                        }
                    }
                }
            }
        }

        let final_variable = match operands.as_slice() {
            [Operand::Variable(variable)] => variable.clone(),
            [Operand::Literal(literal)] => {
                return Err(PlanError::FinalTaskMissing {
                    value: literal.clone(),
                })
            }
            rest => return Err(PlanError::LeftoverOperands { count: rest.len() }),
        };

        let mut found = false;
        for task in &mut tasks {
            task.is_final = task.variable == final_variable;
            found |= task.is_final;
        }
        if !found {
            return Err(PlanError::FinalTaskMissing {
                value: final_variable.to_string(),
            });
        }

        PlanBuilt {
            example_id,
            task_count: tasks.len(),
            final_variable: final_variable.as_str(),
        }
        .log();

        Ok(TaskPlan::new(example_id.to_string(), tasks, final_variable))
    }

    /// Append a task and push its result variable as the operator's value.
    fn emit(
        &self,
        tasks: &mut Vec<Task>,
        operands: &mut Vec<Operand>,
        num1: Operand,
        num2: Operand,
        sign: Sign,
        example_id: &str,
    ) {
        let variable = self.variables.next_variable();
        tasks.push(Task {
            num1,
            num2,
            sign,
            variable: variable.clone(),
            example_id: example_id.to_string(),
            index: tasks.len(),
            is_final: false,
        });
        operands.push(Operand::Variable(variable));
    }
}

/// Pop the operands of `operator` as `(num1, num2)`.
///
/// For binary operators the topmost value is `num2` so the operands keep the
/// order they had in the infix text. Unary minus reads `0 - operand`.
fn pop_operands(
    operands: &mut Vec<Operand>,
    operator: Operator,
    position: usize,
) -> Result<(Operand, Operand), PlanError> {
    let required = operator.arity();
    let available = operands.len();
    let underflow = || {
        OperandUnderflow {
            operator: operator.symbol(),
            position,
            required,
            available,
        }
        .log();
        PlanError::OperandUnderflow {
            operator: operator.symbol(),
            position,
            required,
            available,
        }
    };

    let num2 = operands.pop().ok_or_else(underflow)?;
    let num1 = match required {
        1 => Operand::zero(),
        _ => operands.pop().ok_or_else(underflow)?,
    };
    Ok((num1, num2))
}
