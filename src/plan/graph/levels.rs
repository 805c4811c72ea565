//! Level computation by iterative peeling.
//!
//! Level 0 holds sections with no dependencies; each later level holds the
//! sections whose dependencies were all placed in earlier levels. This is
//! Kahn's algorithm taken a whole frontier at a time, so a section's level is
//! the length of its longest dependency chain from a root.

use std::collections::HashSet;

use super::nodes::NodeMap;

/// Compute levels for an acyclic node map.
///
/// Within a level, sections keep their input order. The caller must have
/// rejected cycles first; any sections left unplaceable are dropped rather
/// than looping forever.
pub fn compute_levels(order: &[String], nodes: &NodeMap) -> Vec<Vec<String>> {
    let mut placed: HashSet<&str> = HashSet::with_capacity(order.len());
    let mut levels: Vec<Vec<String>> = Vec::new();

    while placed.len() < order.len() {
        let frontier: Vec<&str> = order
            .iter()
            .map(String::as_str)
            .filter(|id| !placed.contains(id))
            .filter(|id| {
                nodes.get(*id).is_some_and(|node| {
                    node.dependencies
                        .iter()
                        .all(|dep| placed.contains(dep.as_str()))
                })
            })
            .collect();

        if frontier.is_empty() {
            break;
        }

        placed.extend(frontier.iter().copied());
        levels.push(frontier.into_iter().map(String::from).collect());
    }

    levels
}
