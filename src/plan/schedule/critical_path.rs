//! Critical path: the longest dependency chain through the graph

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Estimates;
use crate::plan::graph::DependencyGraph;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalPath {
    /// Section IDs from a root to a leaf
    pub path: Vec<String>,
    /// Section count, or summed minutes for a weighted path
    pub total_duration: u32,
    /// Root of the path; delaying it delays the whole plan
    pub bottleneck: Option<String>,
}

/// Longest chain by section count
pub fn compute_critical_path(graph: &DependencyGraph) -> CriticalPath {
    critical_path_by(graph, |_| 1)
}

/// Longest chain weighted by estimated minutes, using `default_minutes` for
/// sections without an estimate
pub fn compute_weighted_critical_path(
    graph: &DependencyGraph,
    estimates: &Estimates,
    default_minutes: u32,
) -> CriticalPath {
    critical_path_by(graph, |id| {
        estimates.get(id).copied().unwrap_or(default_minutes)
    })
}

/// Longest-path DP over levels.
///
/// Ties between predecessors go to the first dependency in declared order;
/// ties between end sections go to the first in input order.
fn critical_path_by<W>(graph: &DependencyGraph, weight: W) -> CriticalPath
where
    W: Fn(&str) -> u32,
{
    let mut depth: HashMap<&str, u32> = HashMap::with_capacity(graph.len());
    let mut predecessor: HashMap<&str, &str> = HashMap::new();

    for id in graph.levels().iter().flatten() {
        let mut best: Option<(&str, u32)> = None;
        if let Some(node) = graph.get_node(id) {
            for dep in &node.dependencies {
                let dep_depth = depth.get(dep.as_str()).copied().unwrap_or(0);
                if best.is_none_or(|(_, d)| dep_depth > d) {
                    best = Some((dep.as_str(), dep_depth));
                }
            }
        }

        let own = weight(id.as_str());
        let total = match best {
            Some((dep, dep_depth)) => {
                predecessor.insert(id.as_str(), dep);
                dep_depth.saturating_add(own)
            }
            None => own,
        };
        depth.insert(id.as_str(), total);
    }

    let mut end: Option<(&str, u32)> = None;
    for id in graph.section_ids() {
        let d = depth.get(id).copied().unwrap_or(0);
        if end.is_none_or(|(_, best)| d > best) {
            end = Some((id, d));
        }
    }

    let Some((end_id, total_duration)) = end else {
        return CriticalPath {
            path: Vec::new(),
            total_duration: 0,
            bottleneck: None,
        };
    };

    let mut path = vec![end_id.to_string()];
    let mut current = end_id;
    while let Some(&prev) = predecessor.get(current) {
        path.push(prev.to_string());
        current = prev;
    }
    path.reverse();

    CriticalPath {
        bottleneck: path.first().cloned(),
        path,
        total_duration,
    }
}
