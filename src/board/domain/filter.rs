//! Task list filtering.

use super::{Priority, ProjectId, Task, TaskStatus};

/// Conjunction of optional task criteria.
///
/// Unset criteria match every task. The free-text search is a
/// case-insensitive substring match over the title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    search: Option<String>,
    priority: Option<Priority>,
    status: Option<TaskStatus>,
    project_id: Option<ProjectId>,
}

impl TaskFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to tasks mentioning `search`.
    ///
    /// The term is matched as typed, whitespace included. An empty term
    /// leaves the filter unrestricted.
    #[must_use]
    pub fn with_search(mut self, search: impl AsRef<str>) -> Self {
        let needle = search.as_ref().to_lowercase();
        self.search = (!needle.is_empty()).then_some(needle);
        self
    }

    /// Restricts results to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts results to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to one project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Returns `true` when no criterion is set.
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        self.search.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.project_id.is_none()
    }

    /// Returns `true` when `task` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.priority.is_none_or(|priority| task.priority() == priority)
            && self.status.is_none_or(|status| task.status() == status)
            && self
                .project_id
                .is_none_or(|project_id| task.project_id() == Some(project_id))
    }

    /// Returns the matching tasks in collection order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: impl IntoIterator<Item = &'a Task>) -> Vec<Task> {
        tasks
            .into_iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect()
    }

    fn matches_search(&self, task: &Task) -> bool {
        let Some(needle) = self.search.as_deref() else {
            return true;
        };
        task.title().to_lowercase().contains(needle)
            || task
                .description()
                .is_some_and(|description| description.to_lowercase().contains(needle))
    }
}
