// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_LOG_FILTER, DEFAULT_SERVICE_NAME, DEFAULT_VARIABLE_PREFIX};
use crate::engine::{SequentialVariables, UuidVariables};
use crate::errors::ConfigError;
use crate::observability::messages::validation::{ConfigLoaded, ConfigValidationFailed};
use crate::observability::messages::StructuredLog;
use crate::traits::VariableGenerator;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Main configuration structure for the calculation planner.
///
/// Every section is optional; an empty document yields the built-in defaults.
///
/// # Fields
/// * `service_name` - Name reported in logs
/// * `variables` - How result identifiers are generated
/// * `logging` - Subscriber filter and output options
/// * `planner` - Planning behavior toggles
///
/// # Example
/// ```yaml
/// service_name: distributed_calculator
/// variables:
///   strategy: sequential
///   prefix: "v"
/// logging:
///   filter: "calc_planner=debug"
///   ansi: false
/// planner:
///   verify_plans: true
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default)]
    pub variables: VariableConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            variables: VariableConfig::default(),
            logging: LoggingConfig::default(),
            planner: PlannerConfig::default(),
        }
    }
}

/// Strategy for generating variable identifiers.
///
/// # Variants
/// * `Uuid` - Random v4 UUIDs, unique across processes sharing a result store
/// * `Sequential` - `prefix` followed by a counter, unique per generator instance
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VariableStrategy {
    #[default]
    Uuid,
    Sequential,
}

/// Variable identifier options.
#[derive(Debug, Clone, Deserialize)]
pub struct VariableConfig {
    #[serde(default)]
    pub strategy: VariableStrategy,
    #[serde(default = "default_variable_prefix")]
    pub prefix: String,
}

impl Default for VariableConfig {
    fn default() -> Self {
        Self {
            strategy: VariableStrategy::default(),
            prefix: default_variable_prefix(),
        }
    }
}

impl VariableConfig {
    /// Build the generator this section describes.
    pub fn build_generator(&self) -> Arc<dyn VariableGenerator> {
        match self.strategy {
            VariableStrategy::Uuid => Arc::new(UuidVariables),
            VariableStrategy::Sequential => Arc::new(SequentialVariables::new(self.prefix.clone())),
        }
    }
}

/// Logging options handed to `observability::init_tracing`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            ansi: true,
        }
    }
}

/// Planning behavior toggles.
///
/// # Fields
/// * `verify_plans` - Re-check every plan's invariants before it is saved and dispatched
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_true")]
    pub verify_plans: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { verify_plans: true }
    }
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_variable_prefix() -> String {
    DEFAULT_VARIABLE_PREFIX.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_true() -> bool {
    true
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// Every validation problem is reported at once in [`ConfigError::Invalid`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(&path)?;
    check_config(cfg, path)
}

/// Validate a config already loaded from `path`, logging the outcome.
///
/// Split from [`load_and_validate_config`] so a caller can install its
/// subscriber from the loaded logging section before the outcome is logged.
pub fn check_config<P: AsRef<Path>>(cfg: Config, path: P) -> Result<Config, ConfigError> {
    if let Err(errors) = crate::config::validate_config(&cfg) {
        ConfigValidationFailed {
            error_count: errors.len(),
        }
        .log();
        return Err(ConfigError::Invalid(errors));
    }

    ConfigLoaded {
        path: &path.as_ref().display().to_string(),
        service_name: &cfg.service_name,
    }
    .log();

    Ok(cfg)
}
