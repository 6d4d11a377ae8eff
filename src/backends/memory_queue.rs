// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use crate::engine::Task;
use crate::errors::QueueError;
use crate::traits::TaskQueue;

/// Task queue backed by an in-process channel.
///
/// Each task travels as its JSON encoding, the same bytes a broker would carry,
/// so workers reading from [`TaskReceiver`] see exactly the wire format.
/// Channel order preserves `index` order per example.
#[derive(Debug, Clone)]
pub struct InMemoryTaskQueue {
    sender: UnboundedSender<Vec<u8>>,
}

impl InMemoryTaskQueue {
    /// Create a queue and the receiver that drains it.
    pub fn channel() -> (Self, TaskReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, TaskReceiver { receiver })
    }
}

#[async_trait]
impl TaskQueue for InMemoryTaskQueue {
    async fn send_task(&self, task: &Task) -> Result<(), QueueError> {
        let payload = serde_json::to_vec(task).map_err(QueueError::Encode)?;
        self.sender.send(payload).map_err(|_| QueueError::Closed)
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}

/// Consumer end of an [`InMemoryTaskQueue`].
#[derive(Debug)]
pub struct TaskReceiver {
    receiver: UnboundedReceiver<Vec<u8>>,
}

impl TaskReceiver {
    /// Wait for the next task; `None` once every queue handle is dropped and the
    /// channel is drained.
    pub async fn recv(&mut self) -> Option<Result<Task, QueueError>> {
        let payload = self.receiver.recv().await?;
        Some(decode(&payload))
    }

    /// Next task if one is already waiting.
    pub fn try_recv(&mut self) -> Option<Result<Task, QueueError>> {
        match self.receiver.try_recv() {
            Ok(payload) => Some(decode(&payload)),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Every task currently waiting, in send order.
    pub fn drain(&mut self) -> Result<Vec<Task>, QueueError> {
        let mut tasks = Vec::new();
        while let Some(task) = self.try_recv() {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Stop accepting new tasks; those already sent can still be received.
    pub fn close(&mut self) {
        self.receiver.close();
    }
}

fn decode(payload: &[u8]) -> Result<Task, QueueError> {
    serde_json::from_slice(payload).map_err(QueueError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{plan_expression, SequentialVariables};

    #[tokio::test]
    async fn test_tasks_arrive_in_send_order() {
        let (queue, mut receiver) = InMemoryTaskQueue::channel();
        let variables = SequentialVariables::new("v");
        let plan = plan_expression("(1+2)*(3+4)", "example-1", &variables).unwrap();

        for task in plan.tasks() {
            queue.send_task(task).await.unwrap();
        }

        let received = receiver.drain().unwrap();
        assert_eq!(received, plan.tasks());
    }

    #[tokio::test]
    async fn test_recv_returns_none_after_queue_dropped() {
        let (queue, mut receiver) = InMemoryTaskQueue::channel();
        let variables = SequentialVariables::new("v");
        let plan = plan_expression("42", "example-1", &variables).unwrap();

        queue.send_task(&plan.tasks()[0]).await.unwrap();
        drop(queue);

        assert!(receiver.recv().await.unwrap().is_ok());
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_send_after_close_fails() {
        let (queue, mut receiver) = InMemoryTaskQueue::channel();
        let variables = SequentialVariables::new("v");
        let plan = plan_expression("42", "example-1", &variables).unwrap();

        receiver.close();
        let result = queue.send_task(&plan.tasks()[0]).await;

        assert!(matches!(result, Err(QueueError::Closed)));
        assert_eq!(queue.name(), "in_memory");
    }

    #[test]
    fn test_undecodable_payload_is_reported() {
        assert!(matches!(decode(b"not json"), Err(QueueError::Decode(_))));
    }
}
