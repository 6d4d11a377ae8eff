// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use super::record::{CalculationRequest, ExampleRecord};
use crate::config::Config;
use crate::engine::{verify_plan, Expression, TaskPlan};
use crate::errors::{PlanningError, ServiceError, MALFORMED_EXPRESSION};
use crate::observability::messages::service::{
    CalculationReceived, DispatchCompleted, DispatchFailed, ExampleRejected, ResultRecorded,
    TaskDispatched,
};
use crate::observability::messages::validation::PlanVerificationFailed;
use crate::observability::messages::StructuredLog;
use crate::traits::{ExampleRepository, TaskQueue, VariableGenerator};

/// Front door of the calculator: plans expressions, stores them and hands their
/// tasks to workers.
///
/// The planning itself is pure; this type only adds identifiers, persistence and
/// dispatch around it. Clone it freely, the collaborators are shared.
#[derive(Clone)]
pub struct CalculatorService {
    repository: Arc<dyn ExampleRepository>,
    queue: Arc<dyn TaskQueue>,
    variables: Arc<dyn VariableGenerator>,
    verify_plans: bool,
}

impl CalculatorService {
    pub fn new(
        repository: Arc<dyn ExampleRepository>,
        queue: Arc<dyn TaskQueue>,
        variables: Arc<dyn VariableGenerator>,
    ) -> Self {
        Self {
            repository,
            queue,
            variables,
            verify_plans: true,
        }
    }

    /// Wire the service with the variable strategy and planner flags from `config`.
    pub fn from_config(
        config: &Config,
        repository: Arc<dyn ExampleRepository>,
        queue: Arc<dyn TaskQueue>,
    ) -> Self {
        Self::new(repository, queue, config.variables.build_generator())
            .with_plan_verification(config.planner.verify_plans)
    }

    /// Toggle re-checking every plan before it is stored.
    pub fn with_plan_verification(mut self, enabled: bool) -> Self {
        self.verify_plans = enabled;
        self
    }

    /// Plan `request.expression`, store the outcome and dispatch its tasks.
    ///
    /// A malformed expression is not an error: the returned record carries the
    /// error text and nothing is queued. Internal planning defects and
    /// collaborator failures are returned as [`ServiceError`]s.
    ///
    /// Tasks are sent in `index` order, after the record is saved. If a send
    /// fails the remaining tasks are not sent.
    pub async fn calculate(
        &self,
        request: CalculationRequest,
    ) -> Result<ExampleRecord, ServiceError> {
        let example_id = Uuid::new_v4().to_string();
        let received = CalculationReceived {
            example_id: &example_id,
            user_id: request.user_id.as_deref(),
            expression: &request.expression,
            variables: self.variables.name(),
        };
        let span = received.span("calculate");
        received.log();

        self.plan_and_dispatch(example_id.clone(), request)
            .instrument(span)
            .await
    }

    async fn plan_and_dispatch(
        &self,
        example_id: String,
        request: CalculationRequest,
    ) -> Result<ExampleRecord, ServiceError> {
        let mut expression = Expression::new(request.expression);
        let plan = match expression.plan(self.variables.as_ref(), &example_id) {
            Ok(plan) => plan,
            Err(PlanningError::Malformed(error)) => {
                ExampleRejected {
                    example_id: &example_id,
                    expression: expression.infix(),
                    error: MALFORMED_EXPRESSION,
                }
                .log();
                let record = ExampleRecord::rejected(
                    example_id,
                    expression.infix(),
                    request.user_id,
                    error.to_string(),
                );
                self.repository.save_example(&record).await?;
                return Ok(record);
            }
            Err(PlanningError::Internal(error)) => return Err(error.into()),
        };

        if self.verify_plans {
            self.verify(&plan)?;
        }

        let record = ExampleRecord::planned(&expression, request.user_id, plan);
        self.repository.save_example(&record).await?;
        self.dispatch(&record).await?;
        Ok(record)
    }

    fn verify(&self, plan: &TaskPlan) -> Result<(), ServiceError> {
        verify_plan(plan).map_err(|violations| {
            PlanVerificationFailed {
                example_id: plan.example_id(),
                violation_count: violations.len(),
            }
            .log();
            ServiceError::Verification(violations)
        })
    }

    async fn dispatch(&self, record: &ExampleRecord) -> Result<(), ServiceError> {
        for task in &record.tasks {
            if let Err(error) = self.queue.send_task(task).await {
                DispatchFailed {
                    example_id: &record.id,
                    index: task.index,
                    queue: self.queue.name(),
                    error: &error,
                }
                .log();
                return Err(error.into());
            }
            TaskDispatched {
                example_id: &record.id,
                index: task.index,
                variable: task.variable.as_str(),
                is_final: task.is_final,
            }
            .log();
        }

        DispatchCompleted {
            example_id: &record.id,
            task_count: record.tasks.len(),
        }
        .log();
        Ok(())
    }

    /// Fetch a stored example.
    pub async fn get_example(&self, example_id: &str) -> Result<ExampleRecord, ServiceError> {
        Ok(self.repository.get_example(example_id).await?)
    }

    /// The resolved value of an example, `None` while workers are still running.
    pub async fn get_result(&self, example_id: &str) -> Result<Option<f64>, ServiceError> {
        Ok(self.repository.get_result(example_id).await?)
    }

    /// Every example a user submitted, oldest first.
    pub async fn examples_by_user(&self, user_id: &str) -> Result<Vec<ExampleRecord>, ServiceError> {
        Ok(self.repository.examples_by_user(user_id).await?)
    }

    /// Store the value workers computed for the final variable of an example.
    pub async fn record_result(&self, example_id: &str, value: f64) -> Result<(), ServiceError> {
        self.repository.set_result(example_id, value).await?;
        ResultRecorded { example_id, value }.log();
        Ok(())
    }
}
