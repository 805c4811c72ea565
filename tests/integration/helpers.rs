//! Shared test helpers for planning integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use sectionplan::models::section::{FileAction, FileChange, Section};
use sectionplan::plan::graph::{build_dependency_graph, DependencyGraph};

/// Test helper: Build a section with dependencies and modified files
pub fn section(id: &str, deps: &[&str], files: &[&str]) -> Section {
    let mut section = Section::new(id, format!("Section {id}"));
    section.dependencies = deps.iter().map(|d| d.to_string()).collect();
    section.files = files
        .iter()
        .map(|f| FileChange::new(*f, FileAction::Modify))
        .collect();
    section
}

/// Test helper: Build a graph, panicking on invalid input
pub fn build_test_graph(sections: &[Section]) -> DependencyGraph {
    build_dependency_graph(sections).expect("Failed to build dependency graph")
}

/// Test helper: Write a plan file into a temporary directory
pub fn write_plan(file_name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write plan file");
    (temp_dir, path)
}

/// Test helper: Assert every dependency edge goes from an earlier level to a
/// later one
pub fn assert_levels_respect_edges(graph: &DependencyGraph) {
    for id in graph.section_ids() {
        let node = graph.get_node(id).expect("section should have a node");
        let level = graph.level_of(id).expect("section should have a level");
        for dep in &node.dependencies {
            let dep_level = graph.level_of(dep).expect("dependency should have a level");
            assert!(
                dep_level < level,
                "{dep} (level {dep_level}) should precede {id} (level {level})"
            );
        }
    }
}
