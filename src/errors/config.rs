// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration validation failed:\n{}", format_errors(.0))]
    Invalid(Vec<ConfigValidationError>),
}

/// A single semantic problem in an otherwise well-formed configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("service_name must not be empty")]
    EmptyServiceName,

    #[error("logging.filter must not be empty")]
    EmptyLogFilter,

    /// Identifiers built from this prefix could be read back as numeric literals.
    #[error("variables.prefix '{prefix}' must contain a character other than digits and '.'")]
    NumericVariablePrefix { prefix: String },
}

fn format_errors(errors: &[ConfigValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
