//! Dependency graph for managing section dependencies and execution order

mod cycle;
mod impact;
mod levels;
mod nodes;
mod scheduling;


use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::error::PlanError;
use crate::models::section::Section;

pub use cycle::{find_cycles, find_section_cycles};
pub use impact::GraphStats;
pub use nodes::{build_nodes, GraphNode, NodeMap};
pub use scheduling::{ready_sections, topological_sort};

/// Validated, acyclic view over a fixed set of sections.
///
/// The graph is never patched: when sections change, build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyGraph {
    /// Section IDs in input order
    order: Vec<String>,
    /// Map from section ID to its adjacency
    nodes: HashMap<String, GraphNode>,
    /// `levels[k]` holds the sections whose longest dependency chain is `k`
    levels: Vec<Vec<String>>,
}

/// Build a dependency graph from section definitions.
///
/// Fails with `DuplicateSection` on repeated IDs, `MissingDependency` when a
/// dependency names an unknown section, and `CircularDependency` when the
/// relation has a cycle (self-loops included). Referential integrity is
/// checked before cycles, and levels are only computed for acyclic input.
pub fn build_dependency_graph(sections: &[Section]) -> Result<DependencyGraph, PlanError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(sections.len());
    for section in sections {
        if !seen.insert(section.id.as_str()) {
            return Err(PlanError::DuplicateSection(section.id.clone()));
        }
    }

    for section in sections {
        if let Some(dep) = section
            .dependencies
            .iter()
            .find(|d| !seen.contains(d.as_str()))
        {
            return Err(PlanError::MissingDependency {
                section: section.id.clone(),
                dependency: dep.clone(),
            });
        }
    }

    let (order, nodes) = build_nodes(sections);

    if let Some(mut cycles) = find_cycles(&order, &nodes) {
        let cycle = cycles.swap_remove(0);
        debug!(cycle = ?cycle, "rejecting cyclic section graph");
        return Err(PlanError::CircularDependency { cycle });
    }

    let levels = levels::compute_levels(&order, &nodes);
    debug!(
        sections = order.len(),
        levels = levels.len(),
        "built dependency graph"
    );

    Ok(DependencyGraph {
        order,
        nodes,
        levels,
    })
}

impl DependencyGraph {
    /// Build a dependency graph from section definitions
    pub fn from_sections(sections: &[Section]) -> Result<Self, PlanError> {
        build_dependency_graph(sections)
    }

    /// Get a specific node by section ID
    pub fn get_node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// All nodes keyed by section ID
    pub fn nodes(&self) -> &HashMap<String, GraphNode> {
        &self.nodes
    }

    /// Levels, from roots outward
    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }

    /// Level index of a section
    pub fn level_of(&self, id: &str) -> Option<usize> {
        self.levels
            .iter()
            .position(|level| level.iter().any(|s| s == id))
    }

    /// Section IDs in input order
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get a topologically sorted list of sections
    pub fn topological_sort(&self) -> Vec<String> {
        scheduling::topological_sort(self)
    }

    /// Sections whose dependencies are all in `completed`
    pub fn ready_sections(&self, completed: &HashSet<String>) -> Vec<&str> {
        scheduling::ready_sections(self, completed)
    }
}
