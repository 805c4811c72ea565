//! Cycle detection for the dependency graph

use std::collections::HashMap;

use tracing::warn;

use super::nodes::{build_nodes, NodeMap};
use crate::models::section::Section;
use crate::plan::error::Cycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Find dependency cycles using a three-color DFS.
///
/// Roots are visited in `order`, dependencies in declared order. Every back
/// edge to a gray node yields one cycle: the slice of the DFS stack from that
/// node onward. Dependencies on IDs missing from `nodes` are skipped.
///
/// Returns `None` when the graph is acyclic.
pub fn find_cycles(order: &[String], nodes: &NodeMap) -> Option<Vec<Cycle>> {
    let mut colors: HashMap<&str, Color> = nodes
        .keys()
        .map(|id| (id.as_str(), Color::White))
        .collect();
    let mut stack: Vec<&str> = Vec::new();
    let mut cycles: Vec<Cycle> = Vec::new();

    for id in order {
        if colors.get(id.as_str()) == Some(&Color::White) {
            visit(id, nodes, &mut colors, &mut stack, &mut cycles);
        }
    }

    if cycles.is_empty() {
        None
    } else {
        Some(cycles)
    }
}

/// Find cycles directly over raw, possibly invalid sections
pub fn find_section_cycles(sections: &[Section]) -> Option<Vec<Cycle>> {
    let (order, nodes) = build_nodes(sections);
    let cycles = find_cycles(&order, &nodes);
    if let Some(found) = &cycles {
        warn!(count = found.len(), "dependency cycles found");
    }
    cycles
}

/// DFS helper for cycle detection
fn visit<'a>(
    id: &'a str,
    nodes: &'a NodeMap,
    colors: &mut HashMap<&'a str, Color>,
    stack: &mut Vec<&'a str>,
    cycles: &mut Vec<Cycle>,
) {
    colors.insert(id, Color::Gray);
    stack.push(id);

    if let Some(node) = nodes.get(id) {
        for dep in &node.dependencies {
            match colors.get(dep.as_str()).copied() {
                Some(Color::White) => visit(dep, nodes, colors, stack, cycles),
                Some(Color::Gray) => {
                    // Back edge: the cycle is the stack from `dep` onward
                    if let Some(start) = stack.iter().position(|s| *s == dep.as_str()) {
                        cycles.push(stack[start..].iter().map(|s| s.to_string()).collect());
                    }
                }
                // Finished or unknown
                Some(Color::Black) | None => {}
            }
        }
    }

    stack.pop();
    colors.insert(id, Color::Black);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, deps: &[&str]) -> Section {
        let mut s = Section::new(id, id);
        s.dependencies = deps.iter().map(|d| d.to_string()).collect();
        s
    }

    #[test]
    fn test_acyclic_returns_none() {
        let sections = vec![
            section("a", &[]),
            section("b", &["a"]),
            section("c", &["a", "b"]),
        ];
        assert!(find_section_cycles(&sections).is_none());
    }

    #[test]
    fn test_self_loop_is_single_element_cycle() {
        let sections = vec![section("a", &["a"])];
        let cycles = find_section_cycles(&sections).unwrap();
        assert_eq!(cycles, vec![vec!["a".to_string()]]);
    }

    #[test]
    fn test_three_node_cycle_from_stack() {
        let sections = vec![
            section("a", &["c"]),
            section("b", &["a"]),
            section("c", &["b"]),
        ];
        let cycles = find_section_cycles(&sections).unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0], vec!["a", "c", "b"]);
    }

    #[test]
    fn test_multiple_independent_cycles() {
        let sections = vec![
            section("a", &["b"]),
            section("b", &["a"]),
            section("c", &["d"]),
            section("d", &["c"]),
            section("e", &[]),
        ];
        let cycles = find_section_cycles(&sections).unwrap();
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0], vec!["a", "b"]);
        assert_eq!(cycles[1], vec!["c", "d"]);
    }

    #[test]
    fn test_unknown_dependencies_are_ignored() {
        let sections = vec![section("a", &["missing"]), section("b", &["a"])];
        assert!(find_section_cycles(&sections).is_none());
    }

    #[test]
    fn test_cycle_below_acyclic_prefix() {
        // root -> x -> y -> x
        let sections = vec![
            section("root", &["x"]),
            section("x", &["y"]),
            section("y", &["x"]),
        ];
        let cycles = find_section_cycles(&sections).unwrap();
        assert_eq!(cycles, vec![vec!["x".to_string(), "y".to_string()]]);
    }
}
