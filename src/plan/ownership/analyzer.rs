//! File ownership analysis: which sections race on the same file

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use super::resolution::{Resolution, ResolutionPreference};
use crate::models::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictSeverity {
    /// None of the conflicting writers are ordered relative to each other
    Error,
    /// Some of the writers are ordered, but at least one pair is not
    Warning,
}

impl std::fmt::Display for ConflictSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictSeverity::Error => write!(f, "error"),
            ConflictSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// A file written by sections with no enforced order between them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOwnershipConflict {
    pub file: String,
    /// Writers involved in at least one unordered pair, in input order
    pub sections: Vec<String>,
    pub severity: ConflictSeverity,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipReport {
    pub has_conflicts: bool,
    pub conflicts: Vec<FileOwnershipConflict>,
}

/// Detect files declared by sections that could run concurrently
pub fn analyze_file_ownership(sections: &[Section]) -> OwnershipReport {
    analyze_file_ownership_with(sections, ResolutionPreference::default())
}

/// Detect ownership conflicts, suggesting resolutions per `preference`.
///
/// Ordering is checked over the raw `dependencies` of the input, so this
/// also works on sections that have not been through graph validation.
/// Suggested dependency edges never close a cycle, including together with
/// the edges suggested for earlier conflicts in the same report.
pub fn analyze_file_ownership_with(
    sections: &[Section],
    preference: ResolutionPreference,
) -> OwnershipReport {
    let writers = writers_by_file(sections);
    let mut ancestry = Ancestry::new(sections);
    let mut conflicts = Vec::new();

    for (file, ids) in writers {
        if ids.len() < 2 {
            continue;
        }

        let mut unordered: HashSet<&str> = HashSet::new();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                if !ancestry.ordered(a, b) {
                    unordered.insert(a);
                    unordered.insert(b);
                }
            }
        }
        if unordered.is_empty() {
            debug!(file, writers = ids.len(), "shared file is written in order");
            continue;
        }

        let conflicting: Vec<&str> = ids
            .iter()
            .copied()
            .filter(|id| unordered.contains(id))
            .collect();

        let mut any_ordered = false;
        for (i, &a) in conflicting.iter().enumerate() {
            for &b in &conflicting[i + 1..] {
                any_ordered |= ancestry.ordered(a, b);
            }
        }
        let severity = if any_ordered {
            ConflictSeverity::Warning
        } else {
            ConflictSeverity::Error
        };

        let resolution = match (conflicting.as_slice(), preference) {
            (&[first, second], ResolutionPreference::Dependency) => {
                ancestry.suggest_edge(first, second)
            }
            _ => Resolution::Extract,
        };

        warn!(
            file,
            sections = ?conflicting,
            %severity,
            %resolution,
            "file ownership conflict"
        );

        conflicts.push(FileOwnershipConflict {
            file: file.to_string(),
            sections: conflicting.into_iter().map(String::from).collect(),
            severity,
            resolution,
        });
    }

    OwnershipReport {
        has_conflicts: !conflicts.is_empty(),
        conflicts,
    }
}

/// File path -> declaring sections, both in first-seen order
fn writers_by_file(sections: &[Section]) -> Vec<(&str, Vec<&str>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut writers: Vec<(&str, Vec<&str>)> = Vec::new();

    for section in sections {
        for file in &section.files {
            let slot = *index.entry(file.path.as_str()).or_insert_with(|| {
                writers.push((file.path.as_str(), Vec::new()));
                writers.len() - 1
            });
            let ids = &mut writers[slot].1;
            if !ids.contains(&section.id.as_str()) {
                ids.push(section.id.as_str());
            }
        }
    }

    writers
}

/// Transitive dependency lookups over raw section dependencies, plus the
/// edges suggested so far
struct Ancestry<'a> {
    declared: HashMap<&'a str, Vec<&'a str>>,
    suggested: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Ancestry<'a> {
    fn new(sections: &'a [Section]) -> Self {
        let declared = sections
            .iter()
            .map(|s| {
                (
                    s.id.as_str(),
                    s.dependencies.iter().map(String::as_str).collect(),
                )
            })
            .collect();
        Self {
            declared,
            suggested: HashMap::new(),
        }
    }

    /// Whether one section transitively depends on the other, by declared
    /// dependencies only
    fn ordered(&self, a: &str, b: &str) -> bool {
        self.reaches(a, b, false) || self.reaches(b, a, false)
    }

    /// Pick a dependency edge between two unordered writers that keeps the
    /// declared plus suggested edges acyclic, and record it
    fn suggest_edge(&mut self, first: &'a str, second: &'a str) -> Resolution {
        let (section, depends_on) = if self.reaches(first, second, true) {
            (first, second)
        } else {
            (second, first)
        };
        self.suggested.entry(section).or_default().push(depends_on);
        Resolution::AddDependency {
            section: section.to_string(),
            depends_on: depends_on.to_string(),
        }
    }

    /// DFS from `from` along dependency edges looking for `to`
    fn reaches(&self, from: &str, to: &str, with_suggested: bool) -> bool {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![from];

        while let Some(current) = stack.pop() {
            let declared = self.declared.get(current).into_iter().flatten();
            let suggested = self
                .suggested
                .get(current)
                .filter(|_| with_suggested)
                .into_iter()
                .flatten();
            for &next in declared.chain(suggested) {
                if next == to {
                    return true;
                }
                if visited.insert(next) {
                    stack.push(next);
                }
            }
        }

        false
    }
}
