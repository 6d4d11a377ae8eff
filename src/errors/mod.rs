// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod expression;
mod plan;
mod service;

pub use config::{ConfigError, ConfigValidationError};
pub use expression::{ExpressionError, MALFORMED_EXPRESSION};
pub use plan::{PlanError, PlanValidationError, PlanningError};
pub use service::{QueueError, RepositoryError, ServiceError};
