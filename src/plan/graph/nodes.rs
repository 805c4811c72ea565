//! Graph node types for the dependency graph

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::section::Section;

/// Adjacency of one section, stored in both directions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Sections this one requires, in declared order
    pub dependencies: Vec<String>,
    /// Sections that require this one, in input order
    pub dependents: Vec<String>,
}

/// Map from section ID to its node
pub type NodeMap = HashMap<String, GraphNode>;

/// Build the ID order and node map for a set of sections.
///
/// Duplicate dependency entries collapse to the first occurrence. Dependencies
/// on IDs outside the input set are kept on the dependent side only, so the
/// map stays usable for diagnostics over unvalidated input.
pub fn build_nodes(sections: &[Section]) -> (Vec<String>, NodeMap) {
    let mut order = Vec::with_capacity(sections.len());
    let mut nodes: NodeMap = HashMap::with_capacity(sections.len());

    // First pass: create all nodes
    for section in sections {
        if nodes.contains_key(&section.id) {
            continue;
        }
        let mut dependencies: Vec<String> = Vec::with_capacity(section.dependencies.len());
        for dep in &section.dependencies {
            if !dependencies.contains(dep) {
                dependencies.push(dep.clone());
            }
        }
        order.push(section.id.clone());
        nodes.insert(
            section.id.clone(),
            GraphNode {
                dependencies,
                dependents: Vec::new(),
            },
        );
    }

    // Second pass: reverse edges
    for id in &order {
        let deps = nodes
            .get(id)
            .map(|n| n.dependencies.clone())
            .unwrap_or_default();
        for dep in deps {
            if let Some(dep_node) = nodes.get_mut(&dep) {
                if !dep_node.dependents.contains(id) {
                    dep_node.dependents.push(id.clone());
                }
            }
        }
    }

    (order, nodes)
}
