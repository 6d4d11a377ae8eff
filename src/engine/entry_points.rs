// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::token::VariableId;

/// A type-safe wrapper for plan entry points - tasks whose operands are all literals.
///
/// Entry points can be handed to workers immediately; every other task waits for
/// at least one result. They are listed in task index order.
///
/// # Examples
///
/// ```
/// use calc_planner::engine::{plan_expression, SequentialVariables};
///
/// let variables = SequentialVariables::new("v");
/// let plan = plan_expression("(1+2)*(3+4)", "example-1", &variables).unwrap();
///
/// let entry_points = plan.entry_points();
/// let ready: Vec<&str> = entry_points.iter().map(|v| v.as_str()).collect();
/// assert_eq!(ready, vec!["v1", "v2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPoints(pub Vec<VariableId>);

impl EntryPoints {
    /// Get iterator over entry points
    pub fn iter(&self) -> impl Iterator<Item = &VariableId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<VariableId>> for EntryPoints {
    fn from(entry_points: Vec<VariableId>) -> Self {
        Self(entry_points)
    }
}
