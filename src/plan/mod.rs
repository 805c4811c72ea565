//! Section planning: dependency graph, schedule and file ownership
//!
//! This module handles:
//! - Parsing and validating plan files
//! - Building the section dependency graph
//! - Deriving parallel groups and the critical path
//! - Detecting and resolving file ownership conflicts

pub mod error;
pub mod graph;
pub mod ownership;
pub mod parser;
pub mod schedule;
pub mod validation;

// Re-export commonly used types
pub use error::{format_cycle, Cycle, PlanError};
pub use graph::{build_dependency_graph, find_cycles, topological_sort, DependencyGraph, GraphNode};
pub use ownership::{
    analyze_file_ownership, analyze_file_ownership_with, resolve_ownership_conflicts,
    ConflictSeverity, FileOwnershipConflict, OwnershipReport, Resolution, ResolutionPreference,
};
pub use parser::{parse_plan, parse_plan_content, ParsedPlan, PlanFormat};
pub use schedule::{
    compute_critical_path, compute_parallel_groups, compute_parallelization_score, CriticalPath,
    Estimates, ParallelGroup,
};
pub use validation::{validate, ValidationError};
