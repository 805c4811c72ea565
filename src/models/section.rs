//! Section model: the unit of work handed to a single agent

use serde::{Deserialize, Serialize};

/// What a section does to a file it declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    Create,
    #[default]
    Modify,
    Delete,
}

impl std::fmt::Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileAction::Create => write!(f, "create"),
            FileAction::Modify => write!(f, "modify"),
            FileAction::Delete => write!(f, "delete"),
        }
    }
}

/// Progress of a single file change, as reported by the execution engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    #[default]
    Pending,
    InProgress,
    Done,
    Failed,
}

/// A file declared as an output of a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub path: String,
    #[serde(default)]
    pub action: FileAction,
    #[serde(default)]
    pub status: FileStatus,
}

impl FileChange {
    pub fn new(path: impl Into<String>, action: FileAction) -> Self {
        Self {
            path: path.into(),
            action,
            status: FileStatus::Pending,
        }
    }
}

/// Lifecycle status of a section.
///
/// Owned by the execution engine; the planner only carries it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
    Blocked,
}

impl std::fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionStatus::Pending => write!(f, "pending"),
            SectionStatus::InProgress => write!(f, "in_progress"),
            SectionStatus::Completed => write!(f, "completed"),
            SectionStatus::Failed => write!(f, "failed"),
            SectionStatus::Blocked => write!(f, "blocked"),
        }
    }
}

/// Section definition as produced by the planning conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub files: Vec<FileChange>,
    /// Sections that must complete before this one starts
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Sections that require this one. Derived from `dependencies`; never
    /// read back as input.
    #[serde(default)]
    pub dependents: Vec<String>,
    #[serde(default)]
    pub success_criteria: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SectionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<u32>,
    /// Duration estimate in minutes, supplied by a collaborator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
}

impl Section {
    /// Create a section with no files or dependencies
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            files: Vec::new(),
            dependencies: Vec::new(),
            dependents: Vec::new(),
            success_criteria: Vec::new(),
            status: None,
            progress: None,
            retry_count: None,
            estimated_minutes: None,
        }
    }

    /// Add a dependency if not already declared
    pub fn add_dependency(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.dependencies.contains(&id) {
            self.dependencies.push(id);
        }
    }

    /// Record a dependent if not already present
    pub fn add_dependent(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.dependents.contains(&id) {
            self.dependents.push(id);
        }
    }

    /// Whether this section declares `path` among its files
    pub fn touches(&self, path: &str) -> bool {
        self.files.iter().any(|f| f.path == path)
    }

    pub fn is_completed(&self) -> bool {
        self.status == Some(SectionStatus::Completed)
    }
}
