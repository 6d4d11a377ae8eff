// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use super::token::VariableId;

/// Newtype wrapper for the producer -> consumers relation between tasks.
///
/// Keys are the variables tasks publish; values are the variables of the tasks
/// that read them. Every task of a plan has a key, possibly with no dependents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph(pub HashMap<VariableId, Vec<VariableId>>);

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Register a task with no dependents yet
    pub fn add_task(&mut self, variable: VariableId) {
        self.0.entry(variable).or_default();
    }

    /// Record that `consumer` reads the result of `producer`
    pub fn add_dependent(&mut self, producer: VariableId, consumer: VariableId) {
        self.0.entry(producer).or_default().push(consumer);
    }

    /// Get dependents for a task
    pub fn get_dependents(&self, variable: &VariableId) -> Option<&Vec<VariableId>> {
        self.0.get(variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(text: &str) -> VariableId {
        VariableId::new(text)
    }

    #[test]
    fn test_dependents_are_recorded_per_producer() {
        let mut graph = DependencyGraph::new();
        graph.add_task(id("v1"));
        graph.add_task(id("v2"));
        graph.add_task(id("v3"));
        graph.add_dependent(id("v1"), id("v3"));
        graph.add_dependent(id("v2"), id("v3"));

        assert_eq!(graph.get_dependents(&id("v1")), Some(&vec![id("v3")]));
        assert_eq!(graph.get_dependents(&id("v3")), Some(&vec![]));
        assert_eq!(graph.get_dependents(&id("v9")), None);
    }
}
