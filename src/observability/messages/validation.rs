// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for plan verification and configuration validation.
//!
//! This module contains message types for logging events related to:
//! * Plan invariant verification before dispatch
//! * Configuration loading and validation

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A built plan broke one or more structural invariants.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use calc_planner::observability::messages::validation::PlanVerificationFailed;
///
/// let msg = PlanVerificationFailed {
///     example_id: "example-1",
///     violation_count: 2,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct PlanVerificationFailed<'a> {
    pub example_id: &'a str,
    pub violation_count: usize,
}

impl Display for PlanVerificationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Plan for example '{}' failed verification with {} violations",
            self.example_id, self.violation_count
        )
    }
}

impl StructuredLog for PlanVerificationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            example_id = self.example_id,
            violation_count = self.violation_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "plan_verification_failed",
            span_name = name,
            example_id = self.example_id,
            violation_count = self.violation_count,
        )
    }
}

/// Configuration loaded from disk.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub service_name: &'a str,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded configuration '{}' for service '{}'",
            self.path, self.service_name
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            service_name = self.service_name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
        )
    }
}

/// Configuration validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConfigValidationFailed {
    pub error_count: usize,
}

impl Display for ConfigValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration validation failed with {} errors",
            self.error_count
        )
    }
}

impl StructuredLog for ConfigValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "config_validation_failed",
            span_name = name,
            error_count = self.error_count,
        )
    }
}
