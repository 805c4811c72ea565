//! Level tree display for section dependency graphs
//!
//! Renders one block per graph level, with connectors and dependency
//! annotations.

use std::collections::HashMap;

use colored::Colorize;

use crate::models::section::Section;
use crate::plan::graph::DependencyGraph;

use super::indicators::status_indicator;

/// Compute the tree connector prefix based on position
fn compute_connector(index: usize, total: usize) -> &'static str {
    if index == total - 1 {
        "└── "
    } else {
        "├── "
    }
}

/// Format dependency annotation right-aligned
fn format_dep_annotation(deps: &[String], max_width: usize, current_width: usize) -> String {
    if deps.is_empty() {
        return String::new();
    }
    let padding = max_width.saturating_sub(current_width) + 4;
    format!("{:width$}← {}", "", deps.join(", "), width = padding)
}

/// Build a level-by-level tree of the graph
pub fn build_tree_display(graph: &DependencyGraph, sections: &[Section]) -> String {
    if graph.is_empty() {
        return "(no sections found)".to_string();
    }

    let section_map: HashMap<&str, &Section> =
        sections.iter().map(|s| (s.id.as_str(), s)).collect();
    let max_label_width = graph.section_ids().map(|id| id.len()).max().unwrap_or(0);

    let mut output = String::new();

    for (level, ids) in graph.levels().iter().enumerate() {
        output.push_str(&format!("{}\n", format!("Level {level}").bold()));

        for (index, id) in ids.iter().enumerate() {
            let connector = compute_connector(index, ids.len());
            let section = section_map.get(id.as_str());
            let indicator = status_indicator(section.and_then(|s| s.status));
            let name = section
                .map(|s| s.name.as_str())
                .filter(|name| *name != id.as_str())
                .map(|name| format!(" {}", name.dimmed()))
                .unwrap_or_default();
            let deps = graph
                .get_node(id)
                .map(|node| format_dep_annotation(&node.dependencies, max_label_width, id.len()))
                .unwrap_or_default();
            output.push_str(&format!("{connector}{indicator} {}{deps}{name}\n", id.bold()));
        }
    }

    output.push_str(&"─".repeat(50));
    output.push('\n');

    let stats = graph.stats();
    output.push_str(&format!(
        "{} sections, {} dependencies, {} levels\n",
        stats.total_sections, stats.total_dependencies, stats.depth
    ));

    output
}
