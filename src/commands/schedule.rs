//! Schedule reports: parallel groups, critical path and resume planning
//!
//! Usage: sectionplan [groups|critical-path|ready] <PLAN>

use anyhow::{bail, Result};
use colored::Colorize;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use super::loader::load_plan;
use crate::config::Config;
use crate::plan::schedule::{
    compute_critical_path, compute_parallel_groups_with_estimates, compute_parallelization_score,
    compute_weighted_critical_path, estimates_from_sections, remaining_groups, CriticalPath,
    ParallelGroup,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupsReport<'a> {
    groups: &'a [ParallelGroup],
    parallelization_score: f64,
}

/// Render parallel groups for the terminal
pub fn format_groups(groups: &[ParallelGroup], score: f64) -> String {
    let mut output = String::new();

    for group in groups {
        let duration = group
            .estimated_duration
            .map(|m| format!(" ~{m}m"))
            .unwrap_or_default();
        output.push_str(&format!(
            "{} {}{}\n",
            format!("Group {}", group.level).bold(),
            group.rationale.dimmed(),
            duration.cyan()
        ));
        for id in &group.section_ids {
            output.push_str(&format!("  • {id}\n"));
        }
    }

    output.push_str(&format!("Parallelization score: {score:.2}\n"));
    output
}

/// Render a critical path for the terminal
pub fn format_critical_path(critical: &CriticalPath, unit: &str) -> String {
    if critical.path.is_empty() {
        return "(no sections found)\n".to_string();
    }

    let mut output = format!("{}\n", critical.path.join(" → ").bold());
    output.push_str(&format!("Length: {} section(s)\n", critical.path.len()));
    output.push_str(&format!("Total:  {} {unit}\n", critical.total_duration));
    if let Some(bottleneck) = &critical.bottleneck {
        output.push_str(&format!("{} Bottleneck: {bottleneck}\n", "⚠".yellow().bold()));
    }
    output
}

/// Show parallel groups and the parallelization score
pub fn groups(plan: &Path, json: bool) -> Result<()> {
    let loaded = load_plan(plan)?;
    let estimates = estimates_from_sections(&loaded.sections);
    let groups = compute_parallel_groups_with_estimates(&loaded.graph, &estimates);
    let score = compute_parallelization_score(&loaded.graph);

    if json {
        let report = GroupsReport {
            groups: &groups,
            parallelization_score: score,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_groups(&groups, score));
    }
    Ok(())
}

/// Show the critical path, by section count or by estimated minutes
pub fn critical_path(plan: &Path, weighted: bool, config: &Config) -> Result<()> {
    let loaded = load_plan(plan)?;

    let (critical, unit) = if weighted {
        let estimates = estimates_from_sections(&loaded.sections);
        let critical = compute_weighted_critical_path(
            &loaded.graph,
            &estimates,
            config.planner.default_section_minutes,
        );
        (critical, "minutes")
    } else {
        (compute_critical_path(&loaded.graph), "sections")
    };

    print!("{}", format_critical_path(&critical, unit));
    Ok(())
}

/// Show what can run next and the schedule left after `completed`.
///
/// Sections whose status is already `completed` in the plan count as done.
pub fn ready(plan: &Path, completed: Vec<String>) -> Result<()> {
    let loaded = load_plan(plan)?;

    for id in &completed {
        if !loaded.graph.contains(id) {
            bail!("Unknown section in --completed: '{id}'");
        }
    }

    let mut done: HashSet<String> = completed.into_iter().collect();
    done.extend(
        loaded
            .sections
            .iter()
            .filter(|s| s.is_completed())
            .map(|s| s.id.clone()),
    );

    let ready = loaded.graph.ready_sections(&done);
    if ready.is_empty() {
        println!("{} Nothing left to run", "✓".green().bold());
        return Ok(());
    }

    println!("{} {}", "Ready:".bold(), ready.join(", "));
    println!();
    let remaining = remaining_groups(&loaded.graph, &done);
    let score = compute_parallelization_score(&loaded.graph);
    print!("{}", format_groups(&remaining, score));
    Ok(())
}
