//! Dependency graph reports
//!
//! Usage: sectionplan [graph|order|cycles] <PLAN>
//!
//! - `tree`: level-by-level tree rendering
//! - `indicators`: status symbols

mod indicators;
mod tree;

#[cfg(test)]
mod tests;

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::loader::{load_plan, load_sections};
use crate::plan::error::format_cycle;
use crate::plan::graph::find_section_cycles;

pub use indicators::status_indicator;
pub use tree::build_tree_display;

/// Show the dependency graph as a level tree
pub fn show(plan: &Path) -> Result<()> {
    let loaded = load_plan(plan)?;

    println!();
    println!("{} {}", "Dependency Graph:".bold(), loaded.name);
    println!("=================");
    println!();
    print!("{}", build_tree_display(&loaded.graph, &loaded.sections));

    println!();
    print!("Legend: ");
    print!("{} ", "✓".green().bold());
    print!("completed  ");
    print!("{} ", "●".blue().bold());
    print!("in progress  ");
    print!("{} ", "○".white().dimmed());
    print!("pending  ");
    print!("{} ", "✗".red().bold());
    print!("failed  ");
    print!("{} ", "⊘".yellow().bold());
    println!("blocked");
    println!();

    Ok(())
}

/// Print the topological order, one section ID per line
pub fn order(plan: &Path) -> Result<()> {
    let loaded = load_plan(plan)?;
    for id in loaded.graph.topological_sort() {
        println!("{id}");
    }
    Ok(())
}

/// Render the cycle listing for `cycles`
pub fn format_cycles_report(cycles: Option<&[Vec<String>]>) -> String {
    match cycles {
        None => format!("{} No circular dependencies\n", "✓".green().bold()),
        Some(cycles) => {
            let mut output = format!(
                "{} {} circular dependenc{} found\n",
                "✗".red().bold(),
                cycles.len(),
                if cycles.len() == 1 { "y" } else { "ies" }
            );
            for cycle in cycles {
                output.push_str(&format!("  {}\n", format_cycle(cycle)));
            }
            output
        }
    }
}

/// List every cycle in the plan. Diagnostic only: a cyclic plan is reported,
/// not treated as a failure.
pub fn cycles(plan: &Path) -> Result<()> {
    let (_, sections) = load_sections(plan)?;
    let found = find_section_cycles(&sections);
    print!("{}", format_cycles_report(found.as_deref()));
    Ok(())
}
