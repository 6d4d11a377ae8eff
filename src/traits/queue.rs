// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::engine::Task;
use crate::errors::QueueError;

/// Outbound queue that carries tasks to workers.
///
/// The queue must preserve the relative order of tasks sharing an example id.
/// Sending in `index` order is then enough for workers to find every operand
/// already published when they pick a task up.
#[async_trait]
pub trait TaskQueue: Send + Sync {
    /// Send one task.
    async fn send_task(&self, task: &Task) -> Result<(), QueueError>;

    /// Name of the backend, reported when a send fails.
    fn name(&self) -> &'static str;
}
