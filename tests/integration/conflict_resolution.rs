//! Ownership conflicts: detect, resolve, rebuild

use sectionplan::plan::ownership::{
    analyze_file_ownership, analyze_file_ownership_with, resolve_ownership_conflicts,
    ConflictSeverity, Resolution, ResolutionPreference,
};
use sectionplan::plan::schedule::compute_parallel_groups;

use super::helpers::*;

#[test]
fn test_dependency_resolution_serializes_writers() {
    let sections = vec![
        section("S1", &[], &["shared.ts", "a.ts"]),
        section("S2", &[], &["shared.ts", "b.ts"]),
        section("S3", &["S1", "S2"], &["c.ts"]),
    ];

    let report = analyze_file_ownership(&sections);
    assert!(report.has_conflicts);
    assert_eq!(report.conflicts[0].severity, ConflictSeverity::Error);

    let resolved = resolve_ownership_conflicts(&sections, &report.conflicts).unwrap();
    let graph = build_test_graph(&resolved);
    let groups = compute_parallel_groups(&graph);

    let layout: Vec<Vec<String>> = groups.iter().map(|g| g.section_ids.clone()).collect();
    assert_eq!(
        layout,
        vec![
            vec!["S1".to_string()],
            vec!["S2".to_string()],
            vec!["S3".to_string()],
        ]
    );
    assert!(!analyze_file_ownership(&resolved).has_conflicts);
    assert_levels_respect_edges(&graph);
}

#[test]
fn test_extract_resolution_keeps_writers_parallel() {
    let sections = vec![
        section("S1", &[], &["shared.ts", "a.ts"]),
        section("S2", &[], &["shared.ts", "b.ts"]),
    ];

    let report = analyze_file_ownership_with(&sections, ResolutionPreference::Extract);
    assert_eq!(report.conflicts[0].resolution, Resolution::Extract);

    let resolved = resolve_ownership_conflicts(&sections, &report.conflicts).unwrap();
    let graph = build_test_graph(&resolved);
    let groups = compute_parallel_groups(&graph);

    assert_eq!(resolved.len(), 3);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].section_ids, vec!["shared-shared-ts"]);
    assert_eq!(groups[1].section_ids, vec!["S1", "S2"]);
    assert_eq!(groups[1].rationale, "2 sections (depends on shared-shared-ts)");
    assert!(!analyze_file_ownership(&resolved).has_conflicts);
}

#[test]
fn test_many_conflicts_resolve_to_an_acyclic_plan() {
    let sections = vec![
        section("a", &[], &["one.ts", "two.ts", "three.ts"]),
        section("b", &[], &["one.ts", "three.ts"]),
        section("c", &[], &["two.ts", "three.ts"]),
        section("d", &["a"], &["one.ts"]),
    ];

    let report = analyze_file_ownership(&sections);
    let resolved = resolve_ownership_conflicts(&sections, &report.conflicts).unwrap();

    let graph = build_test_graph(&resolved);
    assert_levels_respect_edges(&graph);
    assert!(!analyze_file_ownership(&resolved).has_conflicts);
    // Inputs untouched
    assert!(sections[1].dependencies.is_empty());
}
