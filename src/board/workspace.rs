//! Composition root wiring one backend into the board services.

use crate::{
    board::{
        adapters::{
            memory::{FixtureError, InMemoryRepository, SimulatedLatency, fixtures},
            remote::{HttpRecordStore, RemoteRepository},
        },
        domain::{Project, Task},
        ports::{EntityRepository, RecordStore},
        services::{DashboardService, ProjectService, TaskService},
    },
    config::{Backend, ConfigError, Settings},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Task repository chosen at composition time.
pub type DynTaskRepository = dyn EntityRepository<Task>;

/// Project repository chosen at composition time.
pub type DynProjectRepository = dyn EntityRepository<Project>;

/// Errors raised while assembling a workspace.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// Settings were invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Bundled fixtures could not be decoded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

/// The set of services backing one dashboard session.
pub struct Workspace<C>
where
    C: Clock + Send + Sync,
{
    tasks: TaskService<DynTaskRepository, C>,
    projects: ProjectService<DynProjectRepository, C>,
    dashboard: DashboardService<DynTaskRepository, DynProjectRepository, C>,
}

impl<C> Workspace<C>
where
    C: Clock + Send + Sync,
{
    /// Wires services around explicit repositories.
    #[must_use]
    pub fn from_repositories(
        tasks: Arc<DynTaskRepository>,
        projects: Arc<DynProjectRepository>,
        clock: Arc<C>,
    ) -> Self {
        let task_service = TaskService::new(tasks, Arc::clone(&clock));
        let project_service = ProjectService::new(projects, clock);
        let dashboard = DashboardService::new(task_service.clone(), project_service.clone());
        Self {
            tasks: task_service,
            projects: project_service,
            dashboard,
        }
    }

    /// Builds a workspace backed by in-memory collections.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] when `seed_fixtures` is set and the bundled
    /// data cannot be decoded.
    pub fn local(
        latency: SimulatedLatency,
        seed_fixtures: bool,
        clock: Arc<C>,
    ) -> Result<Self, FixtureError> {
        let (tasks, projects) = if seed_fixtures {
            (fixtures::tasks()?, fixtures::projects()?)
        } else {
            (Vec::new(), Vec::new())
        };
        tracing::info!(
            tasks = tasks.len(),
            projects = projects.len(),
            "using in-memory backend"
        );
        Ok(Self::from_repositories(
            Arc::new(InMemoryRepository::seeded(tasks).with_latency(latency)),
            Arc::new(InMemoryRepository::seeded(projects).with_latency(latency)),
            clock,
        ))
    }

    /// Builds a workspace backed by a record store.
    #[must_use]
    pub fn remote<S>(store: Arc<S>, clock: Arc<C>) -> Self
    where
        S: RecordStore + 'static,
    {
        Self::from_repositories(
            Arc::new(RemoteRepository::<Task, S>::new(Arc::clone(&store))),
            Arc::new(RemoteRepository::<Project, S>::new(store)),
            clock,
        )
    }

    /// Builds the workspace selected by `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError`] when the settings are invalid or the local
    /// fixtures cannot be decoded.
    pub fn from_settings(settings: &Settings, clock: Arc<C>) -> Result<Self, WorkspaceError> {
        match settings.backend()? {
            Backend::Local(local) => Ok(Self::local(local.latency(), local.seed_fixtures, clock)?),
            Backend::Remote(remote) => {
                tracing::info!(base_url = %remote.base_url, "using hosted record store");
                let store =
                    HttpRecordStore::new(remote.base_url, remote.project_id, remote.public_key);
                Ok(Self::remote(Arc::new(store), clock))
            }
        }
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService<DynTaskRepository, C> {
        &self.tasks
    }

    /// Returns the project service.
    #[must_use]
    pub const fn projects(&self) -> &ProjectService<DynProjectRepository, C> {
        &self.projects
    }

    /// Returns the dashboard service.
    #[must_use]
    pub const fn dashboard(&self) -> &DashboardService<DynTaskRepository, DynProjectRepository, C> {
        &self.dashboard
    }
}
