//! Input validation for section plans.
//!
//! Section IDs end up in generated section IDs, branch names and log lines of
//! the execution engine, and file paths are handed to agents as write
//! targets, so both are checked before a plan is accepted.

use anyhow::{bail, Result};
use std::path::{Component, Path};

/// Maximum allowed length for section IDs.
pub const MAX_ID_LENGTH: usize = 128;

/// Maximum allowed length for section descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;

/// Reserved names that cannot be used as IDs (case-insensitive).
const RESERVED_NAMES: &[&str] = &[
    ".", "..", "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7",
    "com8", "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Validates that a section ID is safe to use as an identifier downstream.
///
/// An ID is valid if:
/// - It is not empty
/// - It is no longer than MAX_ID_LENGTH characters
/// - It contains only alphanumeric characters, dashes, and underscores
/// - It does not use reserved system names
///
/// # Examples
///
/// ```
/// use sectionplan::validation::validate_id;
///
/// assert!(validate_id("auth-api").is_ok());
/// assert!(validate_id("section_2").is_ok());
/// assert!(validate_id("").is_err());
/// assert!(validate_id("../etc/passwd").is_err());
/// ```
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("ID cannot be empty");
    }

    if id.len() > MAX_ID_LENGTH {
        bail!(
            "ID too long: {} characters (max {})",
            id.len(),
            MAX_ID_LENGTH
        );
    }

    let valid_chars = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_chars {
        bail!("ID '{id}' contains invalid characters. Use only alphanumeric characters, dashes (-), and underscores (_)");
    }

    let id_lower = id.to_lowercase();
    if RESERVED_NAMES.contains(&id_lower.as_str()) {
        bail!("ID '{id}' uses a reserved name");
    }

    Ok(())
}

/// Validates that a description is within acceptable length limits.
pub fn validate_description(description: &str) -> Result<()> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        bail!(
            "Description too long: {} characters (max {})",
            description.len(),
            MAX_DESCRIPTION_LENGTH
        );
    }

    Ok(())
}

/// Validates a file path declared by a section.
///
/// Paths are relative to the project root and may not escape it.
pub fn validate_file_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        bail!("file path cannot be empty");
    }

    let parsed = Path::new(path);
    if parsed.is_absolute() || path.starts_with('/') {
        bail!("file path '{path}' must be relative");
    }

    if parsed
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        bail!("file path '{path}' cannot contain path traversal (..)");
    }

    Ok(())
}

/// Clap value parser for validating ID arguments.
///
/// ```ignore
/// #[arg(value_parser = clap_id_validator)]
/// id: String,
/// ```
pub fn clap_id_validator(s: &str) -> Result<String, String> {
    validate_id(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id_valid() {
        assert!(validate_id("auth-api").is_ok());
        assert!(validate_id("section_2024").is_ok());
        assert!(validate_id("S1").is_ok());
        assert!(validate_id("a").is_ok());
    }

    #[test]
    fn test_validate_id_empty() {
        let result = validate_id("");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validate_id_too_long() {
        let long_id = "a".repeat(MAX_ID_LENGTH + 1);
        let result = validate_id(&long_id);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_validate_id_invalid_chars() {
        assert!(validate_id("api/v1").is_err());
        assert!(validate_id("../passwd").is_err());
        assert!(validate_id("auth api").is_err());
        assert!(validate_id("section.md").is_err());
    }

    #[test]
    fn test_validate_id_reserved_names() {
        assert!(validate_id("CON").is_err());
        assert!(validate_id("nul").is_err());
    }

    #[test]
    fn test_validate_description_too_long() {
        assert!(validate_description("").is_ok());
        let long_desc = "a".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert!(validate_description(&long_desc).is_err());
    }

    #[test]
    fn test_validate_file_path() {
        assert!(validate_file_path("src/lib.rs").is_ok());
        assert!(validate_file_path("./README.md").is_ok());
        assert!(validate_file_path("").is_err());
        assert!(validate_file_path("   ").is_err());
        assert!(validate_file_path("/etc/passwd").is_err());
        assert!(validate_file_path("src/../../secret").is_err());
    }

    #[test]
    fn test_clap_id_validator() {
        assert!(clap_id_validator("valid-id").is_ok());
        assert!(clap_id_validator("../invalid").is_err());
    }
}
