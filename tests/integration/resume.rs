//! Resuming a partially executed plan

use std::collections::HashSet;

use sectionplan::models::section::SectionStatus;
use sectionplan::plan::schedule::remaining_groups;

use super::helpers::*;

fn completed(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_ready_sections_advance_with_completions() {
    let sections = vec![
        section("A", &[], &[]),
        section("B", &["A"], &[]),
        section("C", &["A"], &[]),
        section("D", &["B", "C"], &[]),
    ];
    let graph = build_test_graph(&sections);

    assert_eq!(graph.ready_sections(&completed(&[])), vec!["A"]);
    assert_eq!(graph.ready_sections(&completed(&["A"])), vec!["B", "C"]);
    assert_eq!(graph.ready_sections(&completed(&["A", "B"])), vec!["C"]);
    assert_eq!(graph.ready_sections(&completed(&["A", "B", "C"])), vec!["D"]);
    assert!(graph
        .ready_sections(&completed(&["A", "B", "C", "D"]))
        .is_empty());
}

#[test]
fn test_remaining_groups_resume_from_level() {
    let sections = vec![
        section("A", &[], &[]),
        section("B", &["A"], &[]),
        section("C", &["B"], &[]),
    ];
    let graph = build_test_graph(&sections);

    let groups = remaining_groups(&graph, &completed(&["A"]));

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].level, 1);
    assert_eq!(groups[0].section_ids, vec!["B"]);
    assert_eq!(groups[1].level, 2);
}

#[test]
fn test_status_carries_through_to_completed_set() {
    let mut a = section("A", &[], &[]);
    a.status = Some(SectionStatus::Completed);
    let sections = vec![a, section("B", &["A"], &[])];
    let graph = build_test_graph(&sections);

    let done: HashSet<String> = sections
        .iter()
        .filter(|s| s.is_completed())
        .map(|s| s.id.clone())
        .collect();

    assert_eq!(graph.ready_sections(&done), vec!["B"]);
}
