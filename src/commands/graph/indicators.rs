//! Status indicators for graph display

use colored::{ColoredString, Colorize};

use crate::models::section::SectionStatus;

/// Status indicator with color for display. Sections without a status are
/// shown as pending.
pub fn status_indicator(status: Option<SectionStatus>) -> ColoredString {
    match status {
        Some(SectionStatus::Completed) => "✓".green().bold(),
        Some(SectionStatus::InProgress) => "●".blue().bold(),
        Some(SectionStatus::Failed) => "✗".red().bold(),
        Some(SectionStatus::Blocked) => "⊘".yellow().bold(),
        Some(SectionStatus::Pending) | None => "○".white().dimmed(),
    }
}
