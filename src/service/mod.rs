// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Orchestration around the planning engine.
//!
//! [`CalculatorService`] turns a [`CalculationRequest`] into a stored
//! [`ExampleRecord`] and a stream of tasks on the queue:
//!
//! ```text
//! request ─► plan_expression ─┬─ malformed ─► save error record
//!                             └─ plan ─► verify ─► save record ─► send tasks (index order)
//! ```
//!
//! # Examples
//! ```rust
//! use std::sync::Arc;
//! use calc_planner::backends::{InMemoryExampleRepository, InMemoryTaskQueue};
//! use calc_planner::engine::SequentialVariables;
//! use calc_planner::service::{CalculationRequest, CalculatorService};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (queue, mut receiver) = InMemoryTaskQueue::channel();
//! let service = CalculatorService::new(
//!     Arc::new(InMemoryExampleRepository::new()),
//!     Arc::new(queue),
//!     Arc::new(SequentialVariables::new("v")),
//! );
//!
//! let record = service.calculate(CalculationRequest::new("2+3*4")).await.unwrap();
//! assert_eq!(record.tasks.len(), 2);
//! assert_eq!(receiver.drain().unwrap(), record.tasks);
//! # }
//! ```

mod calculator;
mod record;


pub use calculator::CalculatorService;
pub use record::{CalculationRequest, ExampleRecord};
