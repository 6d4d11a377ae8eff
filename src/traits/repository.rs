// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::RepositoryError;
use crate::service::ExampleRecord;

/// Persistence for submitted expressions.
///
/// One record per example id, holding either the error text or the task list and
/// final variable. The record is updated with the numeric result once workers finish.
#[async_trait]
pub trait ExampleRepository: Send + Sync {
    /// Insert or replace the record keyed by `record.id`.
    async fn save_example(&self, record: &ExampleRecord) -> Result<(), RepositoryError>;

    /// Fetch a record by example id.
    async fn get_example(&self, example_id: &str) -> Result<ExampleRecord, RepositoryError>;

    /// Store the resolved result of an example.
    async fn set_result(&self, example_id: &str, value: f64) -> Result<(), RepositoryError>;

    /// Resolved result, `None` while workers are still running.
    async fn get_result(&self, example_id: &str) -> Result<Option<f64>, RepositoryError>;

    /// Every record submitted by a user, in submission order.
    async fn examples_by_user(&self, user_id: &str) -> Result<Vec<ExampleRecord>, RepositoryError>;
}
