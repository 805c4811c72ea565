//! Scheduling queries: topological order and ready sets

use std::collections::HashSet;

use super::DependencyGraph;

/// Get a topologically sorted list of sections.
///
/// Derived from the graph's levels so it can never disagree with them: levels
/// in order, sections within a level in their level order.
pub fn topological_sort(graph: &DependencyGraph) -> Vec<String> {
    graph.levels().iter().flatten().cloned().collect()
}

/// Sections that can start now given the set of completed sections.
///
/// A section is ready when it is not completed and every dependency is.
/// Returned in topological order.
pub fn ready_sections<'a>(graph: &'a DependencyGraph, completed: &HashSet<String>) -> Vec<&'a str> {
    graph
        .levels()
        .iter()
        .flatten()
        .filter(|id| !completed.contains(*id))
        .filter(|id| {
            graph
                .get_node(id)
                .is_some_and(|n| n.dependencies.iter().all(|d| completed.contains(d)))
        })
        .map(String::as_str)
        .collect()
}
