//! Integration tests for section planning
//!
//! These tests drive the public API end to end: plan files on disk are
//! parsed, built into a graph, scheduled, and checked for file ownership
//! conflicts before and after resolution.

pub mod conflict_resolution;
pub mod end_to_end;
pub mod helpers;
pub mod resume;
