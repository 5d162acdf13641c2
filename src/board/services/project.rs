//! Project-specific operations.

use super::{BoardServiceResult, EntityService};
use crate::board::{
    domain::{Project, ProjectId, ProjectUpdate},
    ports::EntityRepository,
};
use mockable::Clock;

/// Project CRUD facade.
pub type ProjectService<R, C> = EntityService<Project, R, C>;

impl<R, C> EntityService<Project, R, C>
where
    R: EntityRepository<Project> + ?Sized,
    C: Clock + Send + Sync,
{
    /// Overwrites the fields present in `update`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the project does not exist, a domain
    /// error when the update sets a blank name, or a repository error when
    /// the backend fails.
    #[tracing::instrument(skip(self, update))]
    pub async fn update(&self, id: ProjectId, update: ProjectUpdate) -> BoardServiceResult<Project> {
        self.update_with(id, |project, _| project.apply_update(update))
            .await
    }
}
