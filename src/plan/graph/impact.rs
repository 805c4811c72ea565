//! Impact queries: which sections are affected by a change to another

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use super::DependencyGraph;

/// Summary numbers for a dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub total_sections: usize,
    /// Number of dependency edges
    pub total_dependencies: usize,
    /// Number of levels
    pub depth: usize,
    /// Sections with no dependencies (can start immediately)
    pub roots: Vec<String>,
    /// Sections nothing depends on
    pub leaves: Vec<String>,
}

#[derive(Clone, Copy)]
enum Direction {
    Dependencies,
    Dependents,
}

impl DependencyGraph {
    /// Every section that transitively depends on `id`, in topological order
    pub fn transitive_dependents(&self, id: &str) -> Vec<String> {
        self.reachable(id, Direction::Dependents)
    }

    /// Every section `id` transitively depends on, in topological order
    pub fn transitive_dependencies(&self, id: &str) -> Vec<String> {
        self.reachable(id, Direction::Dependencies)
    }

    /// Whether `section` transitively depends on `dependency`
    pub fn depends_on(&self, section: &str, dependency: &str) -> bool {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(section);

        while let Some(current) = queue.pop_front() {
            let Some(node) = self.get_node(current) else {
                continue;
            };
            for dep in &node.dependencies {
                if dep == dependency {
                    return true;
                }
                if visited.insert(dep.as_str()) {
                    queue.push_back(dep.as_str());
                }
            }
        }

        false
    }

    /// Sections with no dependencies, in input order
    pub fn root_sections(&self) -> Vec<&str> {
        self.section_ids()
            .filter(|id| {
                self.get_node(id)
                    .is_some_and(|n| n.dependencies.is_empty())
            })
            .collect()
    }

    /// Sections that no other section depends on, in input order
    pub fn leaf_sections(&self) -> Vec<&str> {
        self.section_ids()
            .filter(|id| self.get_node(id).is_some_and(|n| n.dependents.is_empty()))
            .collect()
    }

    /// Get statistics about the graph
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_sections: self.len(),
            total_dependencies: self
                .section_ids()
                .filter_map(|id| self.get_node(id))
                .map(|n| n.dependencies.len())
                .sum(),
            depth: self.levels().len(),
            roots: self.root_sections().into_iter().map(String::from).collect(),
            leaves: self.leaf_sections().into_iter().map(String::from).collect(),
        }
    }

    fn reachable(&self, id: &str, direction: Direction) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(id);

        while let Some(current) = queue.pop_front() {
            let Some(node) = self.get_node(current) else {
                continue;
            };
            let next = match direction {
                Direction::Dependencies => &node.dependencies,
                Direction::Dependents => &node.dependents,
            };
            for other in next {
                if seen.insert(other.as_str()) {
                    queue.push_back(other.as_str());
                }
            }
        }

        self.levels()
            .iter()
            .flatten()
            .filter(|s| seen.contains(s.as_str()))
            .cloned()
            .collect()
    }
}
