// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reference backends for the calculator service's collaborators.
//!
//! The service only talks to storage and to the task queue through the
//! [`ExampleRepository`](crate::traits::ExampleRepository) and
//! [`TaskQueue`](crate::traits::TaskQueue) traits. The backends here keep
//! everything in process:
//!
//! - **InMemoryExampleRepository**: examples in a map behind a `tokio` lock
//! - **InMemoryTaskQueue**: tasks encoded as JSON onto an unbounded channel,
//!   decoded again by the paired [`TaskReceiver`]
//!
//! ## Stub Backend (Test-Only)
//! - **FailingTaskQueue**: refuses every task
//! - **FailingRepository**: refuses every write
//!
//! ```text
//! CalculatorService ──save──► ExampleRepository
//!        │
//!        └──send_task──► TaskQueue ──JSON──► TaskReceiver (workers)
//! ```
//!
//! # Examples
//! ```rust
//! use calc_planner::backends::InMemoryTaskQueue;
//! use calc_planner::engine::{plan_expression, SequentialVariables};
//! use calc_planner::traits::TaskQueue;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (queue, mut receiver) = InMemoryTaskQueue::channel();
//! let plan = plan_expression("2+3", "example-1", &SequentialVariables::new("v")).unwrap();
//!
//! queue.send_task(&plan.tasks()[0]).await.unwrap();
//! let task = receiver.recv().await.unwrap().unwrap();
//! assert_eq!(task.to_string(), "#0 2 + 3 -> v1 (final)");
//! # }
//! ```

mod memory_queue;
mod memory_repository;
#[cfg(test)]
pub mod stub;

pub use memory_queue::{InMemoryTaskQueue, TaskReceiver};
pub use memory_repository::InMemoryExampleRepository;
