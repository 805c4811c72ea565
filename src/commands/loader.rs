//! Plan loading shared by all commands

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::models::section::Section;
use crate::plan::graph::{build_dependency_graph, DependencyGraph};
use crate::plan::parser::parse_plan;

/// A parsed plan and the graph built from it
pub struct LoadedPlan {
    pub name: String,
    pub sections: Vec<Section>,
    pub graph: DependencyGraph,
}

/// Parse a plan file without building the graph
pub fn load_sections(path: &Path) -> Result<(String, Vec<Section>)> {
    let plan = parse_plan(path)?;
    debug!(plan = %plan.name, sections = plan.sections.len(), "parsed plan file");
    Ok((plan.name, plan.sections))
}

/// Parse a plan file and build its dependency graph
pub fn load_plan(path: &Path) -> Result<LoadedPlan> {
    let (name, sections) = load_sections(path)?;
    let graph = build_dependency_graph(&sections)
        .with_context(|| format!("Invalid dependency graph in {}", path.display()))?;
    Ok(LoadedPlan {
        name,
        sections,
        graph,
    })
}
