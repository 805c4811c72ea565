//! CLI command implementations
//!
//! Each command reads a plan file, runs the planner and prints a report to
//! stdout. Nothing is written back to disk.

pub mod conflicts;
pub mod graph;
pub mod loader;
pub mod schedule;
