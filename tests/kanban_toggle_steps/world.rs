//! Shared world state for kanban status BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryRepository,
    domain::Task,
    services::{BoardServiceResult, TaskService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryRepository<Task>, DefaultClock>;

/// Scenario world for kanban behaviour tests.
pub struct KanbanWorld {
    pub service: TestTaskService,
    pub task: Option<Task>,
    pub last_move: Option<BoardServiceResult<Option<Task>>>,
}

impl KanbanWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: TaskService::new(Arc::new(InMemoryRepository::new()), Arc::new(DefaultClock)),
            task: None,
            last_move: None,
        }
    }

    /// Returns the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn current_task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for KanbanWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KanbanWorld {
    KanbanWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a status label used in a feature file.
///
/// # Errors
///
/// Returns an error when the label names no status.
pub fn parse_status(label: &str) -> Result<taskboard::board::domain::TaskStatus, eyre::Report> {
    taskboard::board::domain::TaskStatus::try_from(label)
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}
