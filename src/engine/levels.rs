// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dependency analysis over a finished [`TaskPlan`].
//!
//! Dispatching in `index` order is always safe but serial. Consumers that want to
//! run independent sub-expressions side by side can group tasks into topological
//! levels instead: every task in a level reads only results from earlier levels.
//!
//! ```text
//! (1+2)*(3+4)-5
//!
//! level 0:  #0 1 + 2 -> v1    #1 3 + 4 -> v2
//! level 1:  #2 v1 * v2 -> v3
//! level 2:  #3 v3 - 5 -> v4
//! ```
//!
//! Levels are computed with Kahn's algorithm in O(V + E).

use std::collections::HashMap;

use super::dependency_graph::DependencyGraph;
use super::entry_points::EntryPoints;
use super::task::TaskPlan;
use super::token::VariableId;

impl TaskPlan {
    /// Producer -> consumers graph over the plan's variables.
    pub fn dependency_graph(&self) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for task in self.tasks() {
            graph.add_task(task.variable.clone());
            for producer in task.dependencies() {
                graph.add_dependent(producer.clone(), task.variable.clone());
            }
        }
        graph
    }

    /// Tasks that read no variables, in index order.
    pub fn entry_points(&self) -> EntryPoints {
        self.tasks()
            .iter()
            .filter(|task| task.is_ready())
            .map(|task| task.variable.clone())
            .collect::<Vec<_>>()
            .into()
    }

    /// Task positions grouped into topological levels, ascending within a level.
    ///
    /// A variable operand that no task in the plan produces is treated as already
    /// available.
    pub fn dependency_levels(&self) -> Vec<Vec<usize>> {
        let graph = self.dependency_graph();
        let positions: HashMap<&VariableId, usize> = self
            .tasks()
            .iter()
            .enumerate()
            .map(|(position, task)| (&task.variable, position))
            .collect();

        let mut in_degree: HashMap<&VariableId, usize> = self
            .tasks()
            .iter()
            .map(|task| {
                let waiting = task
                    .dependencies()
                    .filter(|producer| positions.contains_key(producer))
                    .count();
                (&task.variable, waiting)
            })
            .collect();

        let mut current: Vec<&VariableId> = self
            .tasks()
            .iter()
            .filter(|task| in_degree.get(&task.variable) == Some(&0))
            .map(|task| &task.variable)
            .collect();

        let mut levels = Vec::new();
        while !current.is_empty() {
            let mut next = Vec::new();
            for variable in &current {
                let Some(dependents) = graph.get_dependents(variable) else {
                    continue;
                };
                for dependent in dependents {
                    if let Some(waiting) = in_degree.get_mut(dependent) {
                        *waiting = waiting.saturating_sub(1);
                        if *waiting == 0 {
                            next.push(dependent);
                        }
                    }
                }
            }

            let mut level: Vec<usize> = current
                .iter()
                .filter_map(|variable| positions.get(variable).copied())
                .collect();
            level.sort_unstable();
            levels.push(level);
            current = next;
        }
        levels
    }
}
