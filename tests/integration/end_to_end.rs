//! Plan file to schedule, end to end

use sectionplan::plan::error::PlanError;
use sectionplan::plan::graph::find_section_cycles;
use sectionplan::plan::parser::parse_plan;
use sectionplan::plan::schedule::{
    compute_critical_path, compute_parallel_groups, compute_parallelization_score,
    compute_weighted_critical_path, estimates_from_sections,
};

use super::helpers::*;

const AUTH_PLAN: &str = r#"
name: Auth feature
sections:
  - id: S1
    name: User model
    files:
      - path: src/models/user.rs
        action: create
    successCriteria:
      - model compiles
    estimatedMinutes: 20
  - id: S2
    name: Session store
    files:
      - path: src/session.rs
        action: create
    estimatedMinutes: 35
  - id: S3
    name: Login endpoint
    dependencies: [S1, S2]
    files:
      - path: src/routes/login.rs
    estimatedMinutes: 25
"#;

#[test]
fn test_plan_file_to_parallel_groups() {
    let (_dir, path) = write_plan("auth.yaml", AUTH_PLAN);

    let plan = parse_plan(&path).expect("plan should parse");
    let graph = build_test_graph(&plan.sections);
    let groups = compute_parallel_groups(&graph);

    assert_eq!(plan.name, "Auth feature");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].section_ids, vec!["S1", "S2"]);
    assert_eq!(groups[0].rationale, "2 independent sections");
    assert_eq!(groups[1].section_ids, vec!["S3"]);
    assert_eq!(groups[1].rationale, "1 section (depends on S1, S2)");
    assert_eq!(compute_parallelization_score(&graph), 0.5);
    assert_eq!(graph.topological_sort(), vec!["S1", "S2", "S3"]);
    assert_levels_respect_edges(&graph);
}

#[test]
fn test_weighted_critical_path_from_plan_estimates() {
    let (_dir, path) = write_plan("auth.yaml", AUTH_PLAN);
    let plan = parse_plan(&path).unwrap();
    let graph = build_test_graph(&plan.sections);

    let unweighted = compute_critical_path(&graph);
    let weighted =
        compute_weighted_critical_path(&graph, &estimates_from_sections(&plan.sections), 30);

    // Both chains have two sections; the first in input order wins
    assert_eq!(unweighted.path, vec!["S1", "S3"]);
    assert_eq!(unweighted.total_duration, 2);
    // S2 is slower than S1
    assert_eq!(weighted.path, vec!["S2", "S3"]);
    assert_eq!(weighted.total_duration, 60);
    assert_eq!(weighted.bottleneck.as_deref(), Some("S2"));
}

#[test]
fn test_json_plan_with_diamond() {
    let json = r#"[
  {"id": "A", "name": "Schema"},
  {"id": "B", "name": "Repo", "dependencies": ["A"]},
  {"id": "C", "name": "Cache", "dependencies": ["A"]},
  {"id": "D", "name": "Service", "dependencies": ["B", "C"]}
]"#;
    let (_dir, path) = write_plan("diamond.json", json);

    let plan = parse_plan(&path).unwrap();
    let graph = build_test_graph(&plan.sections);

    assert_eq!(
        graph.levels(),
        &[
            vec!["A".to_string()],
            vec!["B".to_string(), "C".to_string()],
            vec!["D".to_string()],
        ]
    );
    assert_eq!(graph.transitive_dependents("A"), vec!["B", "C", "D"]);
    assert!(graph.depends_on("D", "A"));

    let critical = compute_critical_path(&graph);
    assert_eq!(critical.path.len(), 3);
    assert_eq!(critical.bottleneck.as_deref(), Some("A"));
}

#[test]
fn test_cyclic_plan_parses_but_graph_rejects_it() {
    let yaml = r#"
- id: a
  name: A
  dependencies: [c]
- id: b
  name: B
  dependencies: [a]
- id: c
  name: C
  dependencies: [b]
"#;
    let (_dir, path) = write_plan("cyclic.yaml", yaml);
    let plan = parse_plan(&path).unwrap();

    let cycles = find_section_cycles(&plan.sections).expect("cycle should be reported");
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0], vec!["a", "c", "b"]);

    let err = sectionplan::plan::graph::build_dependency_graph(&plan.sections).unwrap_err();
    assert!(matches!(err, PlanError::CircularDependency { .. }));
    assert!(err.to_string().contains("a -> c -> b -> a"));
}

#[test]
fn test_unknown_dependency_is_a_typed_error() {
    let (_dir, path) = write_plan(
        "broken.yaml",
        "- id: a\n  name: A\n  dependencies: [ghost]\n",
    );
    let plan = parse_plan(&path).unwrap();

    let err = sectionplan::plan::graph::build_dependency_graph(&plan.sections).unwrap_err();

    assert_eq!(
        err,
        PlanError::MissingDependency {
            section: "a".to_string(),
            dependency: "ghost".to_string(),
        }
    );
}
