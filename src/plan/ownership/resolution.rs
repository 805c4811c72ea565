//! Resolution directives attached to ownership conflicts

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::plan::error::PlanError;

static ADD_DEPENDENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Add dependency: (\S+) depends on (\S+)$").expect("Invalid regex pattern")
});

const EXTRACT: &str = "extract";

/// How to make a shared file safe to write.
///
/// Rendered as `Add dependency: X depends on Y` or the literal `extract`, and
/// parsed back from the same text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Resolution {
    /// Order the writers: `section` waits for `depends_on`
    AddDependency { section: String, depends_on: String },
    /// Move the shared file into a new section both writers depend on
    Extract,
}

/// Which directive the analyzer suggests for two-way conflicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionPreference {
    #[default]
    Dependency,
    Extract,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::AddDependency {
                section,
                depends_on,
            } => write!(f, "Add dependency: {section} depends on {depends_on}"),
            Resolution::Extract => write!(f, "{EXTRACT}"),
        }
    }
}

impl std::str::FromStr for Resolution {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == EXTRACT {
            return Ok(Resolution::Extract);
        }
        let caps = ADD_DEPENDENCY
            .captures(trimmed)
            .ok_or_else(|| PlanError::InvalidResolution(s.to_string()))?;
        Ok(Resolution::AddDependency {
            section: caps[1].to_string(),
            depends_on: caps[2].to_string(),
        })
    }
}

impl TryFrom<String> for Resolution {
    type Error = PlanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Resolution> for String {
    fn from(value: Resolution) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for ResolutionPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionPreference::Dependency => write!(f, "dependency"),
            ResolutionPreference::Extract => write!(f, "extract"),
        }
    }
}

impl std::str::FromStr for ResolutionPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dependency" => Ok(ResolutionPreference::Dependency),
            "extract" => Ok(ResolutionPreference::Extract),
            other => Err(format!(
                "unknown resolution preference '{other}' (expected 'dependency' or 'extract')"
            )),
        }
    }
}
