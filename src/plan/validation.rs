//! Plan document schema validation
//!
//! Structural checks on parsed sections. Graph-level integrity (duplicate
//! IDs, unknown dependencies, cycles) is left to `build_dependency_graph`,
//! which reports it as a typed `PlanError`.

use std::collections::HashSet;

use crate::models::section::Section;
use crate::validation::{validate_description, validate_file_path, validate_id};

/// Maximum length of a single success criterion
pub const MAX_CRITERION_LENGTH: usize = 1024;

/// Validation error for plan documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub section_id: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(id) = &self.section_id {
            write!(f, "Section '{}': {}", id, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a single success criterion
///
/// Success criteria must:
/// - Not be empty or whitespace-only
/// - Not contain control characters (except whitespace)
/// - Have a reasonable length (max 1024 chars)
pub(crate) fn validate_success_criterion(criterion: &str) -> Result<(), String> {
    if criterion.trim().is_empty() {
        return Err("success criterion cannot be empty".to_string());
    }

    if criterion.len() > MAX_CRITERION_LENGTH {
        return Err(format!(
            "success criterion too long ({} chars, max {MAX_CRITERION_LENGTH})",
            criterion.len()
        ));
    }

    for (idx, ch) in criterion.chars().enumerate() {
        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            return Err(format!(
                "success criterion contains control character at position {idx}"
            ));
        }
    }

    Ok(())
}

/// Validate parsed sections, collecting every problem found
pub fn validate(sections: &[Section]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for section in sections {
        let error = |message: String| ValidationError {
            message,
            section_id: Some(section.id.clone()),
        };

        if let Err(e) = validate_id(&section.id) {
            errors.push(ValidationError {
                message: format!("Invalid section ID: {e}"),
                section_id: (!section.id.is_empty()).then(|| section.id.clone()),
            });
            continue;
        }

        if section.name.trim().is_empty() {
            errors.push(error("Section name cannot be empty".to_string()));
        }

        if let Some(description) = &section.description {
            if let Err(e) = validate_description(description) {
                errors.push(error(e.to_string()));
            }
        }

        if let Some(progress) = section.progress {
            if progress > 100 {
                errors.push(error(format!("progress must be 0-100, got {progress}")));
            }
        }

        for dep in &section.dependencies {
            if let Err(e) = validate_id(dep) {
                errors.push(error(format!("Invalid dependency ID '{dep}': {e}")));
            }
        }

        let mut seen_paths: HashSet<&str> = HashSet::new();
        for file in &section.files {
            if let Err(e) = validate_file_path(&file.path) {
                errors.push(error(e.to_string()));
            } else if !seen_paths.insert(file.path.as_str()) {
                errors.push(error(format!("file '{}' is declared twice", file.path)));
            }
        }

        for (idx, criterion) in section.success_criteria.iter().enumerate() {
            if let Err(e) = validate_success_criterion(criterion) {
                errors.push(error(format!(
                    "Invalid success criterion #{}: {e}",
                    idx + 1
                )));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
