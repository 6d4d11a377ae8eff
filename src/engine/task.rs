// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Tasks and task plans: the output of the planning pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::operators::Sign;
use super::token::{is_numeric_literal, VariableId};

/// Text of the zero operand used when lowering unary minus and bare literals.
pub const ZERO: &str = "0";

/// One side of a task: a literal or the result of an earlier task.
///
/// On the wire both kinds are plain strings; a string that reads as a decimal
/// literal is a literal, anything else is a variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Operand {
    Literal(String),
    Variable(VariableId),
}

impl Operand {
    pub fn zero() -> Self {
        Operand::Literal(ZERO.to_string())
    }

    pub fn as_variable(&self) -> Option<&VariableId> {
        match self {
            Operand::Variable(variable) => Some(variable),
            Operand::Literal(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Operand::Literal(text) => text,
            Operand::Variable(variable) => variable.as_str(),
        }
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        if is_numeric_literal(&text) {
            Operand::Literal(text)
        } else {
            Operand::Variable(VariableId::new(text))
        }
    }
}

impl From<Operand> for String {
    fn from(operand: Operand) -> Self {
        match operand {
            Operand::Literal(text) => text,
            Operand::Variable(variable) => variable.into(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unit of distributable work: `num1 sign num2`, published under `variable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub num1: Operand,
    pub num2: Operand,
    pub sign: Sign,
    pub variable: VariableId,
    #[serde(rename = "exampleID")]
    pub example_id: String,
    pub index: usize,
    #[serde(rename = "isFinal")]
    pub is_final: bool,
}

impl Task {
    /// Variables this task reads, i.e. the tasks that must finish before it runs.
    pub fn dependencies(&self) -> impl Iterator<Item = &VariableId> {
        [&self.num1, &self.num2]
            .into_iter()
            .filter_map(Operand::as_variable)
    }

    /// Whether both operands are literals, so the task can run immediately.
    pub fn is_ready(&self) -> bool {
        self.dependencies().next().is_none()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {} -> {}",
            self.index, self.num1, self.sign, self.num2, self.variable
        )?;
        if self.is_final {
            write!(f, " (final)")?;
        }
        Ok(())
    }
}

/// Ordered tasks of one expression plus the variable holding its answer.
///
/// Built once by the task graph builder and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPlan {
    example_id: String,
    tasks: Vec<Task>,
    final_variable: VariableId,
}

impl TaskPlan {
    pub(crate) fn new(example_id: String, tasks: Vec<Task>, final_variable: VariableId) -> Self {
        Self {
            example_id,
            tasks,
            final_variable,
        }
    }

    pub fn example_id(&self) -> &str {
        &self.example_id
    }

    /// Tasks in emission order; `tasks()[i].index == i`.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn final_variable(&self) -> &VariableId {
        &self.final_variable
    }

    /// The task publishing the final variable.
    pub fn final_task(&self) -> Option<&Task> {
        self.tasks.iter().find(|task| task.is_final)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Hand the tasks and the final variable over to the caller.
    pub fn into_parts(self) -> (Vec<Task>, VariableId) {
        (self.tasks, self.final_variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            num1: Operand::Literal("2".to_string()),
            num2: Operand::Variable(VariableId::new("v1")),
            sign: Sign::Add,
            variable: VariableId::new("v2"),
            example_id: "example-1".to_string(),
            index: 1,
            is_final: true,
        }
    }

    #[test]
    fn test_operand_classification() {
        assert_eq!(Operand::from("3.5".to_string()), Operand::Literal("3.5".to_string()));
        assert_eq!(
            Operand::from("v7".to_string()),
            Operand::Variable(VariableId::new("v7"))
        );
        assert_eq!(Operand::zero().as_str(), "0");
    }

    #[test]
    fn test_task_wire_format() {
        let json = serde_json::to_value(task()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "num1": "2",
                "num2": "v1",
                "sign": "+",
                "variable": "v2",
                "exampleID": "example-1",
                "index": 1,
                "isFinal": true,
            })
        );
    }

    #[test]
    fn test_task_decodes_operand_kinds() {
        let json = r#"{"num1":"v3","num2":"0.25","sign":"/","variable":"v4","exampleID":"e","index":3,"isFinal":false}"#;
        let decoded: Task = serde_json::from_str(json).unwrap();

        assert_eq!(decoded.num1, Operand::Variable(VariableId::new("v3")));
        assert_eq!(decoded.num2, Operand::Literal("0.25".to_string()));
        assert_eq!(decoded.sign, Sign::Divide);
        assert!(!decoded.is_final);
    }

    #[test]
    fn test_dependencies_and_display() {
        let task = task();
        let deps: Vec<_> = task.dependencies().map(VariableId::as_str).collect();

        assert_eq!(deps, vec!["v1"]);
        assert!(!task.is_ready());
        assert_eq!(task.to_string(), "#1 2 + v1 -> v2 (final)");
    }
}
