//! Errors raised while building or mutating a section graph

use thiserror::Error;

/// A dependency cycle, listed in dependency order starting from the section
/// where the cycle was entered. A self-loop is a one-element cycle.
pub type Cycle = Vec<String>;

/// Render a cycle as `a -> b -> a`
pub fn format_cycle(cycle: &[String]) -> String {
    match cycle.first() {
        Some(first) => {
            let mut parts: Vec<&str> = cycle.iter().map(String::as_str).collect();
            parts.push(first);
            parts.join(" -> ")
        }
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Duplicate section ID: '{0}'")]
    DuplicateSection(String),

    #[error("Section '{section}' depends on unknown section '{dependency}'")]
    MissingDependency { section: String, dependency: String },

    #[error("Circular dependency detected: {}", format_cycle(.cycle))]
    CircularDependency { cycle: Cycle },

    #[error("Section not found: {0}")]
    UnknownSection(String),

    #[error("Resolution '{directive}' would create a circular dependency: {}", format_cycle(.cycle))]
    CyclicResolution { directive: String, cycle: Cycle },

    #[error("Invalid resolution directive: '{0}'")]
    InvalidResolution(String),
}
