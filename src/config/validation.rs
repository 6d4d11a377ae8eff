// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Semantic validation for a parsed [`Config`].
//!
//! Parsing only guarantees the document has the right shape. These checks catch
//! values that parse fine but would break the planner at runtime, and accumulate
//! every problem so the operator can fix them in one pass.

use crate::config::{Config, VariableStrategy};
use crate::engine::is_numeric_literal;
use crate::errors::ConfigValidationError;

/// Validates a configuration, returning every problem found.
///
/// # Checks
///
/// 1. **Service name** - must not be empty or whitespace
/// 2. **Log filter** - must not be empty or whitespace
/// 3. **Variable prefix** - with the sequential strategy, the prefix must contain at
///    least one character that is not a digit or `.`; otherwise `12` + `3` would be
///    indistinguishable from the literal `123`
///
/// # Examples
///
/// ```rust
/// use calc_planner::config::{validate_config, Config};
///
/// let config = Config::default();
/// assert!(validate_config(&config).is_ok());
/// ```
pub fn validate_config(config: &Config) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();

    if config.service_name.trim().is_empty() {
        errors.push(ConfigValidationError::EmptyServiceName);
    }

    if config.logging.filter.trim().is_empty() {
        errors.push(ConfigValidationError::EmptyLogFilter);
    }

    if config.variables.strategy == VariableStrategy::Sequential
        && !is_safe_prefix(&config.variables.prefix)
    {
        errors.push(ConfigValidationError::NumericVariablePrefix {
            prefix: config.variables.prefix.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_safe_prefix(prefix: &str) -> bool {
    // Counter digits are appended, so the empty prefix is as bad as "12".
    !prefix.is_empty() && !is_numeric_literal(&format!("{prefix}0"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential(prefix: &str) -> Config {
        let mut config = Config::default();
        config.variables.strategy = VariableStrategy::Sequential;
        config.variables.prefix = prefix.to_string();
        config
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_service_name() {
        let mut config = Config::default();
        config.service_name = "  ".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ConfigValidationError::EmptyServiceName]);
    }

    #[test]
    fn test_numeric_prefixes_are_rejected() {
        for prefix in ["", "1", "2.", "."] {
            let errors = validate_config(&sequential(prefix)).unwrap_err();
            assert_eq!(
                errors,
                vec![ConfigValidationError::NumericVariablePrefix {
                    prefix: prefix.to_string()
                }],
                "prefix {prefix:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_prefix_ignored_for_uuid_strategy() {
        let mut config = Config::default();
        config.variables.prefix = "123".to_string();

        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_all_errors_are_accumulated() {
        let mut config = sequential("9");
        config.service_name.clear();
        config.logging.filter.clear();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
