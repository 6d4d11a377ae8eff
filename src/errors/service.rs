// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for the orchestration layer and its collaborators.

use thiserror::Error;

use super::{PlanError, PlanValidationError};

/// Failures reported by an example repository.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("example not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Failures reported by a task queue.
#[derive(Error, Debug)]
pub enum QueueError {
    #[error("queue is closed")]
    Closed,

    #[error("failed to encode task: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode task: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Errors surfaced by `CalculatorService`.
///
/// A malformed expression is not an error at this level: it is stored on the
/// returned record instead.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("internal planning defect: {0}")]
    Planning(#[from] PlanError),

    #[error("plan failed verification: {}", format_violations(.0))]
    Verification(Vec<PlanValidationError>),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("failed to send task to queue: {0}")]
    Queue(#[from] QueueError),
}

fn format_violations(violations: &[PlanValidationError]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
