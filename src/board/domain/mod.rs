//! Domain model for the task board.
//!
//! Tasks and projects are plain records with store-allocated integer
//! identifiers. Filtering, kanban grouping, and dashboard statistics are pure
//! functions over snapshots of those records; nothing in this module touches
//! a backend.

mod entity;
mod error;
mod filter;
mod ids;
mod kanban;
mod project;
mod stats;
mod status;
mod task;

pub use entity::{Entity, EntityKind};
pub use error::{
    BoardDomainError, ParseIdError, ParsePriorityError, ParseRecurringPatternError,
    ParseTaskStatusError,
};
pub use filter::TaskFilter;
pub use ids::{EntityId, ProjectId, TaskId};
pub use kanban::{KanbanBoard, KanbanColumn, KanbanDrop};
pub use project::{
    DEFAULT_PROJECT_COLOR, PersistedProjectData, Project, ProjectDraft, ProjectUpdate,
};
pub use stats::{
    DashboardStats, DayWindow, ProjectSummary, StatusBreakdown, TODAYS_TASKS_LIMIT,
    summarize_projects, todays_tasks,
};
pub use status::{Priority, RecurringPattern, TaskStatus};
pub use task::{PersistedTaskData, Task, TaskDraft, TaskUpdate};
