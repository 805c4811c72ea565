//! Parallel groups: one schedulable row per graph level

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Estimates;
use crate::plan::graph::DependencyGraph;

/// One row of the execution schedule.
///
/// Sections in a group may run concurrently; a group must not start until
/// every earlier group has fully completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelGroup {
    pub level: usize,
    pub section_ids: Vec<String>,
    pub rationale: String,
    /// Minutes, when estimates were supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
}

/// Convert graph levels into parallel groups
pub fn compute_parallel_groups(graph: &DependencyGraph) -> Vec<ParallelGroup> {
    build_groups(graph, None, |_| true)
}

/// Like [`compute_parallel_groups`], with each group's duration set to its
/// longest section estimate. Sections without an estimate do not contribute;
/// a group with no estimates at all keeps `None`.
pub fn compute_parallel_groups_with_estimates(
    graph: &DependencyGraph,
    estimates: &Estimates,
) -> Vec<ParallelGroup> {
    build_groups(graph, Some(estimates), |_| true)
}

/// Groups still to run once `completed` sections are done.
///
/// Level numbers are preserved, so the caller can resume from the first
/// returned level; levels with nothing left are dropped.
pub fn remaining_groups(graph: &DependencyGraph, completed: &HashSet<String>) -> Vec<ParallelGroup> {
    build_groups(graph, None, |id| !completed.contains(id))
}

/// Share of the plan that runs in parallel.
///
/// `(sections - levels) / (sections - 1)`: 0.0 for a fully sequential chain,
/// 1.0 when every section sits in one level. Empty and single-section graphs
/// score 0.0.
pub fn compute_parallelization_score(graph: &DependencyGraph) -> f64 {
    let total = graph.len();
    if total <= 1 {
        return 0.0;
    }
    let levels = graph.levels().len();
    (total - levels) as f64 / (total - 1) as f64
}

fn build_groups<F>(
    graph: &DependencyGraph,
    estimates: Option<&Estimates>,
    include: F,
) -> Vec<ParallelGroup>
where
    F: Fn(&str) -> bool,
{
    graph
        .levels()
        .iter()
        .enumerate()
        .filter_map(|(level, ids)| {
            let section_ids: Vec<String> = ids
                .iter()
                .filter(|id| include(id.as_str()))
                .cloned()
                .collect();
            if section_ids.is_empty() {
                return None;
            }
            let rationale = rationale(graph, level, &section_ids);
            let estimated_duration = estimates.and_then(|e| {
                section_ids.iter().filter_map(|id| e.get(id)).max().copied()
            });
            Some(ParallelGroup {
                level,
                section_ids,
                rationale,
                estimated_duration,
            })
        })
        .collect()
}

/// Human-readable justification for a group
fn rationale(graph: &DependencyGraph, level: usize, section_ids: &[String]) -> String {
    let count = section_ids.len();
    let noun = if count == 1 { "section" } else { "sections" };

    if level == 0 {
        return format!("{count} independent {noun}");
    }

    let mut deps: Vec<&str> = Vec::new();
    for id in section_ids {
        let Some(node) = graph.get_node(id) else {
            continue;
        };
        for dep in &node.dependencies {
            if graph.contains(dep) && !deps.contains(&dep.as_str()) {
                deps.push(dep);
            }
        }
    }

    format!("{count} {noun} (depends on {})", deps.join(", "))
}
