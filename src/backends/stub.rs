// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::engine::Task;
use crate::errors::{QueueError, RepositoryError};
use crate::service::ExampleRecord;
use crate::traits::{ExampleRepository, TaskQueue};

/// A queue that refuses every task, for dispatch failure tests
pub struct FailingTaskQueue;

#[async_trait]
impl TaskQueue for FailingTaskQueue {
    async fn send_task(&self, _task: &Task) -> Result<(), QueueError> {
        Err(QueueError::Closed)
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// A repository whose writes always fail and which never finds anything
pub struct FailingRepository;

#[async_trait]
impl ExampleRepository for FailingRepository {
    async fn save_example(&self, _record: &ExampleRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Storage("simulated storage failure".to_string()))
    }

    async fn get_example(&self, example_id: &str) -> Result<ExampleRecord, RepositoryError> {
        Err(RepositoryError::NotFound(example_id.to_string()))
    }

    async fn set_result(&self, _example_id: &str, _value: f64) -> Result<(), RepositoryError> {
        Err(RepositoryError::Storage("simulated storage failure".to_string()))
    }

    async fn get_result(&self, example_id: &str) -> Result<Option<f64>, RepositoryError> {
        Err(RepositoryError::NotFound(example_id.to_string()))
    }

    async fn examples_by_user(&self, _user_id: &str) -> Result<Vec<ExampleRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}
