//! File ownership reports and resolution
//!
//! Usage: sectionplan [conflicts|resolve] <PLAN>

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use super::loader::load_sections;
use crate::config::Config;
use crate::models::section::Section;
use crate::plan::graph::build_dependency_graph;
use crate::plan::ownership::{
    analyze_file_ownership_with, resolve_ownership_conflicts, ConflictSeverity, OwnershipReport,
};

/// Output format for resolved sections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Render an ownership report for the terminal
pub fn format_report(report: &OwnershipReport) -> String {
    if !report.has_conflicts {
        return format!("{} No file ownership conflicts\n", "✓".green().bold());
    }

    let mut output = String::new();
    for conflict in &report.conflicts {
        let severity = match conflict.severity {
            ConflictSeverity::Error => "error".red().bold(),
            ConflictSeverity::Warning => "warning".yellow().bold(),
        };
        output.push_str(&format!("{severity} {}\n", conflict.file.bold()));
        output.push_str(&format!("  sections:   {}\n", conflict.sections.join(", ")));
        output.push_str(&format!("  resolution: {}\n", conflict.resolution));
    }
    output.push_str(&format!(
        "{} conflict(s) found\n",
        report.conflicts.len()
    ));
    output
}

/// Serialize sections in the requested format
pub fn render_sections(sections: &[Section], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(sections).context("Failed to serialize sections as YAML")?
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(sections)
                .context("Failed to serialize sections as JSON")?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// Report files written by unordered sections
pub fn conflicts(plan: &Path, json: bool, config: &Config) -> Result<()> {
    let (_, sections) = load_sections(plan)?;
    let report = analyze_file_ownership_with(&sections, config.planner.resolution);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

/// Apply the suggested resolutions and print the resulting sections.
///
/// The result is rebuilt into a graph before printing, so a plan that comes
/// out invalid is reported instead of emitted.
pub fn resolve(plan: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let (_, sections) = load_sections(plan)?;
    let report = analyze_file_ownership_with(&sections, config.planner.resolution);
    let resolved = resolve_ownership_conflicts(&sections, &report.conflicts)
        .context("Failed to apply ownership resolutions")?;

    build_dependency_graph(&resolved).context("Resolved plan is not a valid dependency graph")?;
    info!(
        conflicts = report.conflicts.len(),
        sections = resolved.len(),
        "resolved file ownership conflicts"
    );

    print!("{}", render_sections(&resolved, format)?);
    Ok(())
}
