// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout the planner. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep field names identical between the log line and the structured fields
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - validation, conversion and task graph construction
//! * `messages::service` - calculation requests, persistence and dispatch
//! * `messages::validation` - plan verification and configuration checks
//!
//! # Usage
//!
//! ```rust
//! use calc_planner::observability::messages::engine::PlanBuilt;
//! use calc_planner::observability::messages::StructuredLog;
//!
//! let msg = PlanBuilt {
//!     example_id: "example-1",
//!     task_count: 2,
//!     final_variable: "v2",
//! };
//!
//! msg.log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured filter when it is set. Calling this twice
/// is harmless: the second installation attempt is ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter.as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(false)
        .try_init();
}
