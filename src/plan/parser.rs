//! Plan file parser
//!
//! A plan file is YAML (`.yaml`/`.yml`) or JSON (`.json`) holding either a
//! bare list of sections or a document with a `sections` key. Other
//! extensions are parsed as YAML, which also accepts JSON input.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use super::validation::validate;
use crate::models::section::Section;

/// Result of parsing a plan file
#[derive(Debug, Clone)]
pub struct ParsedPlan {
    /// Plan name from the document, or the file stem
    pub name: String,
    pub source_path: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    Yaml,
    Json,
}

impl PlanFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => PlanFormat::Json,
            _ => PlanFormat::Yaml,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PlanDocument {
    List(Vec<Section>),
    Document {
        #[serde(default)]
        name: Option<String>,
        sections: Vec<Section>,
    },
}

/// Read, parse and validate a plan file
pub fn parse_plan(path: &Path) -> Result<ParsedPlan> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file: {}", path.display()))?;

    parse_plan_content(&content, path)
}

/// Parse plan content (for testing without file system)
pub fn parse_plan_content(content: &str, source_path: &Path) -> Result<ParsedPlan> {
    let format = PlanFormat::from_path(source_path);
    let document: PlanDocument = match format {
        PlanFormat::Json => serde_json::from_str(content)
            .with_context(|| format!("Failed to parse JSON plan: {}", source_path.display()))?,
        PlanFormat::Yaml => serde_yaml::from_str(content)
            .with_context(|| format!("Failed to parse YAML plan: {}", source_path.display()))?,
    };

    let (name, sections) = match document {
        PlanDocument::List(sections) => (None, sections),
        PlanDocument::Document { name, sections } => (name, sections),
    };

    if let Err(errors) = validate(&sections) {
        let error_messages: Vec<_> = errors.iter().map(|e| e.to_string()).collect();
        bail!("Validation errors:\n  - {}", error_messages.join("\n  - "));
    }

    let name = name.unwrap_or_else(|| {
        source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("plan")
            .to_string()
    });

    Ok(ParsedPlan {
        name,
        source_path: source_path.to_string_lossy().to_string(),
        sections,
    })
}
