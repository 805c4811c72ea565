//! Tests for graph display functionality

use crate::models::section::{Section, SectionStatus};
use crate::plan::graph::build_dependency_graph;

use super::format_cycles_report;
use super::indicators::status_indicator;
use super::tree::build_tree_display;

fn create_test_section(id: &str, name: &str, status: Option<SectionStatus>, deps: Vec<&str>) -> Section {
    let mut section = Section::new(id, name);
    section.status = status;
    section.dependencies = deps.into_iter().map(String::from).collect();
    section
}

#[test]
fn test_status_indicator() {
    // Colored strings include ANSI codes, so check the base character
    assert!(status_indicator(Some(SectionStatus::Completed))
        .to_string()
        .contains('✓'));
    assert!(status_indicator(Some(SectionStatus::InProgress))
        .to_string()
        .contains('●'));
    assert!(status_indicator(Some(SectionStatus::Failed))
        .to_string()
        .contains('✗'));
    assert!(status_indicator(None).to_string().contains('○'));
}

#[test]
fn test_tree_display_empty() {
    let graph = build_dependency_graph(&[]).unwrap();
    assert_eq!(build_tree_display(&graph, &[]), "(no sections found)");
}

#[test]
fn test_tree_display_lists_levels_in_order() {
    let sections = vec![
        create_test_section("db", "Database", Some(SectionStatus::Completed), vec![]),
        create_test_section("api", "API layer", None, vec!["db"]),
        create_test_section("ui", "Frontend", None, vec!["db"]),
    ];
    let graph = build_dependency_graph(&sections).unwrap();

    let output = build_tree_display(&graph, &sections);

    let level0 = output.find("Level 0").unwrap();
    let level1 = output.find("Level 1").unwrap();
    let db = output.find("db").unwrap();
    let api = output.find("api").unwrap();
    let ui = output.find("ui").unwrap();
    assert!(level0 < db && db < level1);
    assert!(level1 < api && api < ui);
    assert!(output.contains("← db"));
    assert!(output.contains("├── "));
    assert!(output.contains("└── "));
    assert!(output.contains("3 sections, 2 dependencies, 2 levels"));
}

#[test]
fn test_cycles_report() {
    let clean = format_cycles_report(None);
    assert!(clean.contains("No circular dependencies"));

    let cycles = vec![vec!["a".to_string(), "b".to_string()]];
    let report = format_cycles_report(Some(&cycles));
    assert!(report.contains("1 circular dependency found"));
    assert!(report.contains("a -> b -> a"));
}
