// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::VariableId;

/// Source of fresh result identifiers for the task graph builder.
///
/// Implementations must never hand out the same identifier twice, and no
/// identifier may read as a numeric literal. Generators are shared between
/// concurrent requests, so `next_variable` takes `&self`.
pub trait VariableGenerator: Send + Sync {
    /// Produce an identifier that has not been produced before.
    fn next_variable(&self) -> VariableId;

    /// Short name, reported with each calculation request.
    fn name(&self) -> &'static str;
}
