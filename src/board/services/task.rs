//! Task-specific operations: updates with completion stamping, the status
//! toggle, kanban moves, and filtered views.

use super::{BoardServiceResult, EntityService};
use crate::board::{
    domain::{KanbanBoard, KanbanDrop, Task, TaskFilter, TaskId, TaskUpdate},
    ports::EntityRepository,
};
use mockable::Clock;

/// Task CRUD facade.
pub type TaskService<R, C> = EntityService<Task, R, C>;

impl<R, C> EntityService<Task, R, C>
where
    R: EntityRepository<Task> + ?Sized,
    C: Clock + Send + Sync,
{
    /// Overwrites the fields present in `update` and recomputes the
    /// completion timestamp.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the task does not exist, a domain error
    /// when the update sets a blank title, or a repository error when the
    /// backend fails.
    #[tracing::instrument(skip(self, update))]
    pub async fn update(&self, id: TaskId, update: TaskUpdate) -> BoardServiceResult<Task> {
        self.update_with(id, |task, clock| task.apply_update(update, clock))
            .await
    }

    /// Advances the task one step around the status cycle.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the task does not exist or a repository
    /// error when the backend fails.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_status(&self, id: TaskId) -> BoardServiceResult<Task> {
        self.update_with(id, |task, clock| {
            let next = task.status().next();
            task.apply_update(TaskUpdate::new().with_status(next), clock)
        })
        .await
    }

    /// Applies a kanban drop.
    ///
    /// Returns `Ok(None)` without touching the backend when the drop does not
    /// change the task's column.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the task does not exist or a repository
    /// error when the backend fails.
    #[tracing::instrument(skip(self))]
    pub async fn move_to_column(
        &self,
        id: TaskId,
        drop: KanbanDrop,
    ) -> BoardServiceResult<Option<Task>> {
        let Some(status) = drop.target_status() else {
            tracing::debug!("drop does not change the column; ignoring");
            return Ok(None);
        };
        self.update(id, TaskUpdate::new().with_status(status))
            .await
            .map(Some)
    }

    /// Returns the tasks matching `filter` in collection order.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the backend fails.
    pub async fn find_matching(&self, filter: &TaskFilter) -> BoardServiceResult<Vec<Task>> {
        let tasks = self.get_all().await?;
        Ok(filter.apply(&tasks))
    }

    /// Returns the tasks matching `filter` grouped into kanban columns.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the backend fails.
    pub async fn board(&self, filter: &TaskFilter) -> BoardServiceResult<KanbanBoard> {
        let tasks = self.find_matching(filter).await?;
        Ok(KanbanBoard::from_tasks(&tasks))
    }
}
