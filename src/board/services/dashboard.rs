//! Read-only dashboard views joining the task and project collections.

use super::{BoardServiceResult, ProjectService, TaskService};
use crate::board::{
    domain::{
        DashboardStats, Project, ProjectSummary, StatusBreakdown, TODAYS_TASKS_LIMIT, Task,
        summarize_projects, todays_tasks,
    },
    ports::EntityRepository,
};
use chrono::{DateTime, TimeZone};
use mockable::Clock;

/// Everything the dashboard page renders about tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    /// Headline counters.
    pub stats: DashboardStats,
    /// Per-status counts for the status chart.
    pub breakdown: StatusBreakdown,
    /// Tasks due today, capped at [`TODAYS_TASKS_LIMIT`].
    pub todays_tasks: Vec<Task>,
}

impl DashboardSnapshot {
    /// Computes the snapshot relative to the day containing `now`, in
    /// `now`'s time zone.
    #[must_use]
    pub fn compute<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Self {
        Self {
            stats: DashboardStats::compute(tasks, now),
            breakdown: StatusBreakdown::compute(tasks),
            todays_tasks: todays_tasks(tasks, now, TODAYS_TASKS_LIMIT),
        }
    }
}

/// Dashboard view service.
pub struct DashboardService<TR, PR, C>
where
    TR: EntityRepository<Task> + ?Sized,
    PR: EntityRepository<Project> + ?Sized,
    C: Clock + Send + Sync,
{
    tasks: TaskService<TR, C>,
    projects: ProjectService<PR, C>,
}

impl<TR, PR, C> Clone for DashboardService<TR, PR, C>
where
    TR: EntityRepository<Task> + ?Sized,
    PR: EntityRepository<Project> + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            projects: self.projects.clone(),
        }
    }
}

impl<TR, PR, C> DashboardService<TR, PR, C>
where
    TR: EntityRepository<Task> + ?Sized,
    PR: EntityRepository<Project> + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a dashboard over the given services.
    #[must_use]
    pub const fn new(tasks: TaskService<TR, C>, projects: ProjectService<PR, C>) -> Self {
        Self { tasks, projects }
    }

    /// Computes the dashboard for the current local day.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the task backend fails.
    pub async fn snapshot(&self) -> BoardServiceResult<DashboardSnapshot> {
        let tasks = self.tasks.get_all().await?;
        Ok(DashboardSnapshot::compute(&tasks, &self.tasks.clock().local()))
    }

    /// Returns every project with its task counts.
    ///
    /// # Errors
    ///
    /// Returns a repository error when either backend fails.
    pub async fn project_summaries(&self) -> BoardServiceResult<Vec<ProjectSummary>> {
        let (projects, tasks) = tokio::try_join!(self.projects.get_all(), self.tasks.get_all())?;
        Ok(summarize_projects(&projects, &tasks))
    }
}
