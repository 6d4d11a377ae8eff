// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::engine::{Expression, Task, TaskPlan, VariableId};

/// A calculation request as received from a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl CalculationRequest {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            user_id: None,
        }
    }

    pub fn for_user(expression: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            user_id: Some(user_id.into()),
        }
    }
}

/// The stored form of one submitted expression.
///
/// Exactly one of `error` and `response` is set: a rejected expression keeps the
/// error text and no tasks, a planned one keeps its tasks and the variable the
/// final task publishes. A planned record also keeps the rendered postfix form.
/// `result` stays empty until workers report back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleRecord {
    pub id: String,
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub response: Option<VariableId>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Option<f64>,
}

impl ExampleRecord {
    /// Record for an expression that failed validation.
    pub fn rejected(
        id: impl Into<String>,
        expression: impl Into<String>,
        user_id: Option<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            expression: expression.into(),
            postfix: None,
            user_id,
            tasks: Vec::new(),
            response: None,
            error: Some(error.into()),
            result: None,
        }
    }

    /// Record for a planned expression, taking ownership of its tasks.
    pub fn planned(expression: &Expression, user_id: Option<String>, plan: TaskPlan) -> Self {
        let id = plan.example_id().to_string();
        let (tasks, final_variable) = plan.into_parts();
        Self {
            id,
            expression: expression.infix().to_string(),
            postfix: expression.postfix().map(ToString::to_string),
            user_id,
            tasks,
            response: Some(final_variable),
            error: None,
            result: None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }

    /// Rebuild the plan view of a planned record, e.g. for dependency analysis.
    pub fn plan(&self) -> Option<TaskPlan> {
        let response = self.response.clone()?;
        Some(TaskPlan::new(self.id.clone(), self.tasks.clone(), response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SequentialVariables;

    #[test]
    fn test_planned_record_takes_plan() {
        let variables = SequentialVariables::new("v");
        let mut expression = Expression::new("2+3*4");
        let plan = expression.plan(&variables, "example-1").unwrap();
        let record = ExampleRecord::planned(&expression, Some("alice".to_string()), plan);

        assert_eq!(record.id, "example-1");
        assert_eq!(record.expression, "2+3*4");
        assert_eq!(record.postfix.as_deref(), Some("2 3 4 * +"));
        assert_eq!(record.tasks.len(), 2);
        assert_eq!(record.response, Some(VariableId::new("v2")));
        assert!(!record.is_rejected());
        assert_eq!(record.result, None);
        assert_eq!(record.plan().unwrap().dependency_levels(), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_rejected_record_has_no_tasks() {
        let record = ExampleRecord::rejected("example-2", "2++3", None, "bad");

        assert!(record.is_rejected());
        assert!(record.tasks.is_empty());
        assert_eq!(record.response, None);
        assert_eq!(record.postfix, None);
        assert!(record.plan().is_none());
    }

    #[test]
    fn test_request_user_is_optional_in_json() {
        let request: CalculationRequest = serde_json::from_str(r#"{"expression":"1+1"}"#).unwrap();

        assert_eq!(request, CalculationRequest::new("1+1"));
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"expression":"1+1"}"#
        );
    }
}
