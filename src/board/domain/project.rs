//! Project record, its creation draft, and partial updates.

use super::{BoardDomainError, Entity, EntityKind, ProjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Accent colour assigned to projects created without one.
pub const DEFAULT_PROJECT_COLOR: &str = "#6366f1";

/// A named group of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredProject")]
pub struct Project {
    id: ProjectId,
    name: String,
    color: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredProject {
    id: ProjectId,
    name: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<StoredProject> for Project {
    type Error = BoardDomainError;

    fn try_from(stored: StoredProject) -> Result<Self, Self::Error> {
        Ok(Self::from_persisted(PersistedProjectData {
            id: stored.id,
            name: normalize_name(stored.name)?,
            color: stored.color,
            description: stored.description,
            created_at: stored.created_at,
        }))
    }
}

/// Parameter object for reconstructing a project read back from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Stored identifier.
    pub id: ProjectId,
    /// Stored name.
    pub name: String,
    /// Stored colour; blank values fall back to [`DEFAULT_PROJECT_COLOR`].
    pub color: String,
    /// Stored description, if any.
    pub description: Option<String>,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Reconstructs a project from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            color: normalize_color(data.color),
            description: data.description,
            created_at: data.created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accent colour.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Overwrites the fields present in `update`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyProjectName`] when the update sets a
    /// blank name. The project is left unchanged in that case.
    pub fn apply_update(&mut self, update: ProjectUpdate) -> Result<(), BoardDomainError> {
        if let Some(name) = update.name {
            self.name = normalize_name(name)?;
        }
        if let Some(color) = update.color {
            self.color = normalize_color(color);
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }
}

impl Entity for Project {
    type Id = ProjectId;
    type Draft = ProjectDraft;

    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> ProjectId {
        self.id
    }

    fn from_draft(id: ProjectId, draft: ProjectDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            description: draft.description,
            created_at,
        }
    }
}

fn normalize_name(name: String) -> Result<String, BoardDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyProjectName);
    }
    Ok(trimmed.to_owned())
}

fn normalize_color(color: String) -> String {
    let trimmed = color.trim();
    if trimmed.is_empty() {
        DEFAULT_PROJECT_COLOR.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Caller-supplied fields for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    name: String,
    color: String,
    description: Option<String>,
}

impl ProjectDraft {
    /// Creates a draft with the required name and the default colour.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyProjectName`] when the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, BoardDomainError> {
        Ok(Self {
            name: normalize_name(name.into())?,
            color: DEFAULT_PROJECT_COLOR.to_owned(),
            description: None,
        })
    }

    /// Sets the accent colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = normalize_color(color.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accent colour.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Partial project update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectUpdate {
    name: Option<String>,
    color: Option<String>,
    description: Option<Option<String>>,
}

impl ProjectUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the accent colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }
}
