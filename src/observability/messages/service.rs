// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the calculation service.
//!
//! This module contains message types for logging events related to:
//! * Incoming calculation requests
//! * Persisting error-tagged and planned examples
//! * Dispatching tasks to the queue
//! * Recording resolved results

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Calculation request received.
///
/// # Log Level
/// `debug!` - Diagnostic detail
///
/// # Example
/// ```
/// use calc_planner::observability::messages::service::CalculationReceived;
///
/// let msg = CalculationReceived {
///     example_id: "example-1",
///     user_id: Some("user-7"),
///     expression: "2+3*4",
///     variables: "sequential",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct CalculationReceived<'a> {
    pub example_id: &'a str,
    pub user_id: Option<&'a str>,
    pub expression: &'a str,
    /// Name of the variable generator planning the request.
    pub variables: &'a str,
}

impl Display for CalculationReceived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Calculate request received for example '{}': '{}' ({} variables)",
            self.example_id, self.expression, self.variables
        )
    }
}

impl StructuredLog for CalculationReceived<'_> {
    fn log(&self) {
        tracing::debug!(
            example_id = self.example_id,
            user_id = self.user_id,
            expression = self.expression,
            variables = self.variables,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "calculation",
            span_name = name,
            example_id = self.example_id,
            user_id = self.user_id,
        )
    }
}

/// Expression rejected; an error-tagged example is being saved.
///
/// # Log Level
/// `warn!` - User input could not be planned
pub struct ExampleRejected<'a> {
    pub example_id: &'a str,
    pub expression: &'a str,
    pub error: &'a str,
}

impl Display for ExampleRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Saving example '{}' with error: {}",
            self.example_id, self.error
        )
    }
}

impl StructuredLog for ExampleRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            example_id = self.example_id,
            expression = self.expression,
            error = self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "example_rejected",
            span_name = name,
            example_id = self.example_id,
        )
    }
}

/// Task handed to the queue.
///
/// # Log Level
/// `trace!` - Per-task detail
pub struct TaskDispatched<'a> {
    pub example_id: &'a str,
    pub index: usize,
    pub variable: &'a str,
    pub is_final: bool,
}

impl Display for TaskDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatched task {} of example '{}' -> '{}'{}",
            self.index,
            self.example_id,
            self.variable,
            if self.is_final { " (final)" } else { "" }
        )
    }
}

impl StructuredLog for TaskDispatched<'_> {
    fn log(&self) {
        tracing::trace!(
            example_id = self.example_id,
            index = self.index,
            variable = self.variable,
            is_final = self.is_final,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "task_dispatched",
            span_name = name,
            example_id = self.example_id,
            index = self.index,
        )
    }
}

/// Every task of an example is on the queue.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use calc_planner::observability::messages::service::DispatchCompleted;
///
/// let msg = DispatchCompleted {
///     example_id: "example-1",
///     task_count: 4,
/// };
///
/// assert!(msg.to_string().contains("4 tasks"));
/// ```
pub struct DispatchCompleted<'a> {
    pub example_id: &'a str,
    pub task_count: usize,
}

impl Display for DispatchCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Example '{}' saved and {} tasks sent to the queue",
            self.example_id, self.task_count
        )
    }
}

impl StructuredLog for DispatchCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            example_id = self.example_id,
            task_count = self.task_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "dispatch_completed",
            span_name = name,
            example_id = self.example_id,
            task_count = self.task_count,
        )
    }
}

/// The queue refused a task.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DispatchFailed<'a> {
    pub example_id: &'a str,
    pub index: usize,
    /// Name of the queue backend that refused the task.
    pub queue: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for DispatchFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to send task {} of example '{}' to queue '{}': {}",
            self.index, self.example_id, self.queue, self.error
        )
    }
}

impl StructuredLog for DispatchFailed<'_> {
    fn log(&self) {
        tracing::error!(
            example_id = self.example_id,
            index = self.index,
            queue = self.queue,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "dispatch_failed",
            span_name = name,
            example_id = self.example_id,
            index = self.index,
        )
    }
}

/// A resolved numeric result was stored for an example.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ResultRecorded<'a> {
    pub example_id: &'a str,
    pub value: f64,
}

impl Display for ResultRecorded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Result {} recorded for example '{}'", self.value, self.example_id)
    }
}

impl StructuredLog for ResultRecorded<'_> {
    fn log(&self) {
        tracing::info!(
            example_id = self.example_id,
            value = self.value,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "result_recorded",
            span_name = name,
            example_id = self.example_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::QueueError;

    #[test]
    fn test_calculation_received_names_generator() {
        let msg = CalculationReceived {
            example_id: "example-1",
            user_id: None,
            expression: "2+3",
            variables: "uuid",
        };

        assert_eq!(
            msg.to_string(),
            "Calculate request received for example 'example-1': '2+3' (uuid variables)"
        );
    }

    #[test]
    fn test_dispatch_failed_names_queue() {
        let error = QueueError::Closed;
        let msg = DispatchFailed {
            example_id: "example-1",
            index: 3,
            queue: "in_memory",
            error: &error,
        };

        assert_eq!(
            msg.to_string(),
            "Failed to send task 3 of example 'example-1' to queue 'in_memory': queue is closed"
        );
    }
}
