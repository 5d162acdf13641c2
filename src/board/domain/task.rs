//! Task record, its creation draft, and partial updates.

use super::{
    BoardDomainError, Entity, EntityKind, Priority, ProjectId, RecurringPattern, TaskId,
    TaskStatus,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work on the board.
///
/// Deserialization goes through [`Task::from_persisted`], so decoded records
/// obey the same title and completion-stamp rules as stored ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredTask")]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: Priority,
    status: TaskStatus,
    project_id: Option<ProjectId>,
    #[serde(rename = "recurringPattern")]
    recurrence: Option<RecurringPattern>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Serialized task shape accepted before the domain rules are applied.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    status: TaskStatus,
    #[serde(default)]
    project_id: Option<ProjectId>,
    #[serde(default, rename = "recurringPattern")]
    recurrence: Option<RecurringPattern>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
}

impl TryFrom<StoredTask> for Task {
    type Error = BoardDomainError;

    fn try_from(stored: StoredTask) -> Result<Self, Self::Error> {
        Ok(Self::from_persisted(PersistedTaskData {
            id: stored.id,
            title: normalize_title(stored.title)?,
            description: stored.description,
            due_date: stored.due_date,
            priority: stored.priority,
            status: stored.status,
            project_id: stored.project_id,
            recurrence: stored.recurrence,
            created_at: stored.created_at,
            completed_at: stored.completed_at,
        }))
    }
}

/// Parameter object for reconstructing a task read back from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored identifier.
    pub id: TaskId,
    /// Stored title.
    pub title: String,
    /// Stored description, if any.
    pub description: Option<String>,
    /// Stored due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Stored priority.
    pub priority: Priority,
    /// Stored status.
    pub status: TaskStatus,
    /// Stored project reference, if any.
    pub project_id: Option<ProjectId>,
    /// Stored recurrence, if the task repeats.
    pub recurrence: Option<RecurringPattern>,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Stored completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Reconstructs a task from stored data.
    ///
    /// The completion timestamp is dropped when the status is not
    /// [`TaskStatus::Completed`] and backfilled from the creation time when a
    /// completed task arrives without one.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let completed_at = if data.status.is_completed() {
            Some(data.completed_at.unwrap_or(data.created_at))
        } else {
            None
        };

        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            priority: data.priority,
            status: data.status,
            project_id: data.project_id,
            recurrence: data.recurrence,
            created_at: data.created_at,
            completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the owning project, if any.
    ///
    /// The reference is advisory and may point at a deleted project.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns the recurrence pattern, if the task repeats.
    #[must_use]
    pub const fn recurrence(&self) -> Option<RecurringPattern> {
        self.recurrence
    }

    /// Returns `true` when the task repeats.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp; present only while completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns `true` when the task is past due at `now` and not completed.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.status.is_completed() && self.due_date.is_some_and(|due| due < now)
    }

    /// Overwrites the fields present in `update`.
    ///
    /// The completion timestamp follows the resulting status: an explicit
    /// change to [`TaskStatus::Completed`] stamps the current clock time, a
    /// completed task untouched by the update keeps its original stamp, and
    /// any other status clears it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the update sets a
    /// blank title. The task is left unchanged in that case.
    pub fn apply_update(
        &mut self,
        update: TaskUpdate,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        if let Some(title) = update.title {
            self.title = normalize_title(title)?;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(project_id) = update.project_id {
            self.project_id = project_id;
        }
        if let Some(recurrence) = update.recurrence {
            self.recurrence = recurrence;
        }

        let status_set = update.status.is_some();
        if let Some(status) = update.status {
            self.status = status;
        }
        self.completed_at = match (self.status.is_completed(), status_set) {
            (true, true) => Some(clock.utc()),
            (true, false) => Some(self.completed_at.unwrap_or_else(|| clock.utc())),
            (false, _) => None,
        };
        Ok(())
    }
}

impl Entity for Task {
    type Id = TaskId;
    type Draft = TaskDraft;

    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> TaskId {
        self.id
    }

    fn from_draft(id: TaskId, draft: TaskDraft, created_at: DateTime<Utc>) -> Self {
        let completed_at = draft.status.is_completed().then_some(created_at);
        Self {
            id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            status: draft.status,
            project_id: draft.project_id,
            recurrence: draft.recurrence,
            created_at,
            completed_at,
        }
    }
}

fn normalize_title(title: String) -> Result<String, BoardDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyTaskTitle);
    }
    Ok(trimmed.to_owned())
}

/// Caller-supplied fields for a new task, merged over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: Priority,
    status: TaskStatus,
    project_id: Option<ProjectId>,
    recurrence: Option<RecurringPattern>,
}

impl TaskDraft {
    /// Creates a draft with the required title and default priority and
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, BoardDomainError> {
        Ok(Self {
            title: normalize_title(title.into())?,
            description: None,
            due_date: None,
            priority: Priority::default(),
            status: TaskStatus::default(),
            project_id: None,
            recurrence: None,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Assigns the task to a project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Makes the task recurring.
    #[must_use]
    pub const fn with_recurrence(mut self, pattern: RecurringPattern) -> Self {
        self.recurrence = Some(pattern);
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the project reference, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns the recurrence pattern, if any.
    #[must_use]
    pub const fn recurrence(&self) -> Option<RecurringPattern> {
        self.recurrence
    }
}

/// Partial task update; absent fields are left untouched.
///
/// Optional task fields use a nested `Option`: `Some(None)` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    title: Option<String>,
    description: Option<Option<String>>,
    due_date: Option<Option<DateTime<Utc>>>,
    priority: Option<Priority>,
    status: Option<TaskStatus>,
    project_id: Option<Option<ProjectId>>,
    recurrence: Option<Option<RecurringPattern>>,
}

impl TaskUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Removes the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Moves the task to a project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(Some(project_id));
        self
    }

    /// Detaches the task from its project.
    #[must_use]
    pub const fn clear_project(mut self) -> Self {
        self.project_id = Some(None);
        self
    }

    /// Makes the task recurring with the given pattern.
    #[must_use]
    pub const fn with_recurrence(mut self, pattern: RecurringPattern) -> Self {
        self.recurrence = Some(Some(pattern));
        self
    }

    /// Stops the task from recurring.
    #[must_use]
    pub const fn clear_recurrence(mut self) -> Self {
        self.recurrence = Some(None);
        self
    }

    /// Returns the status carried by the update, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }
}
