//! Schedule analysis over a built dependency graph
//!
//! - `groups`: parallel groups, their rationale and the parallelization score
//! - `critical_path`: longest dependency chain and its bottleneck
//!
//! Everything here is a read-only query; nothing mutates the graph.

mod critical_path;
mod groups;


use std::collections::HashMap;

use crate::models::section::Section;

pub use critical_path::{compute_critical_path, compute_weighted_critical_path, CriticalPath};
pub use groups::{
    compute_parallel_groups, compute_parallel_groups_with_estimates,
    compute_parallelization_score, remaining_groups, ParallelGroup,
};

/// Per-section duration estimates in minutes, keyed by section ID
pub type Estimates = HashMap<String, u32>;

/// Collect the estimates carried on the sections themselves
pub fn estimates_from_sections(sections: &[Section]) -> Estimates {
    sections
        .iter()
        .filter_map(|s| s.estimated_minutes.map(|m| (s.id.clone(), m)))
        .collect()
}
