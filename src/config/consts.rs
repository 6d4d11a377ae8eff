// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Service name used when the configuration does not set one
pub const DEFAULT_SERVICE_NAME: &str = "distributed_calculator";
/// Prefix for sequential variable identifiers (`v1`, `v2`, ...)
pub const DEFAULT_VARIABLE_PREFIX: &str = "v";
/// Log filter used when neither the config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_FILTER: &str = "info";
