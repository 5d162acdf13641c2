//! Dashboard statistics derived from the task and project collections.

use super::{Project, Task, TaskStatus};
use chrono::{DateTime, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Utc};

/// Number of due-today tasks shown on the dashboard.
pub const TODAYS_TASKS_LIMIT: usize = 5;

/// Half-open calendar day `[start, end)` containing a reference instant.
///
/// The day boundaries follow the time zone of the reference instant and are
/// stored as UTC instants for comparison with due dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
}

impl DayWindow {
    /// Returns the calendar day containing `now` in `now`'s own time zone.
    ///
    /// When local midnight does not exist (a daylight-saving gap), the
    /// boundary falls back to `now`'s current offset.
    #[must_use]
    pub fn containing<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let zone = now.timezone();
        let offset = now.offset().fix();
        let date = now.date_naive();
        let boundary =
            |day: NaiveDate| midnight(&zone, day).or_else(|| midnight(&offset, day));
        let start = boundary(date).unwrap_or_else(|| now.with_timezone(&Utc));
        let end = date
            .succ_opt()
            .and_then(boundary)
            .or_else(|| start.checked_add_signed(TimeDelta::days(1)));
        Self { start, end }
    }

    /// Returns midnight at the start of the day.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns `true` when `instant` falls inside the day.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && self.end.is_none_or(|end| instant < end)
    }
}

fn midnight<Tz: TimeZone>(zone: &Tz, day: NaiveDate) -> Option<DateTime<Utc>> {
    zone.from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Headline counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Open tasks due during the current day.
    pub due_today: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Tasks in progress.
    pub in_progress: usize,
    /// Open tasks due before the current day.
    pub overdue: usize,
}

impl DashboardStats {
    /// Computes the counters relative to the day containing `now`.
    #[must_use]
    pub fn compute<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Self {
        let today = DayWindow::containing(now);
        tasks.iter().fold(Self::default(), |mut stats, task| {
            match task.status() {
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::NotStarted => {}
            }
            let open_due_date = task
                .due_date()
                .filter(|_| !task.status().is_completed());
            if let Some(due) = open_due_date {
                if today.contains(due) {
                    stats.due_today += 1;
                } else if due < today.start() {
                    stats.overdue += 1;
                }
            }
            stats
        })
    }
}

/// Task counts per status, in kanban order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    /// Tasks not started.
    pub not_started: usize,
    /// Tasks in progress.
    pub in_progress: usize,
    /// Tasks completed.
    pub completed: usize,
}

impl StatusBreakdown {
    /// Counts tasks by status.
    #[must_use]
    pub fn compute(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut breakdown, task| {
            match task.status() {
                TaskStatus::NotStarted => breakdown.not_started += 1,
                TaskStatus::InProgress => breakdown.in_progress += 1,
                TaskStatus::Completed => breakdown.completed += 1,
            }
            breakdown
        })
    }

    /// Returns `(status, count)` pairs in kanban order, ready for charting.
    #[must_use]
    pub const fn series(&self) -> [(TaskStatus, usize); 3] {
        [
            (TaskStatus::NotStarted, self.not_started),
            (TaskStatus::InProgress, self.in_progress),
            (TaskStatus::Completed, self.completed),
        ]
    }

    /// Returns the total number of tasks counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.not_started + self.in_progress + self.completed
    }
}

/// Returns up to `limit` tasks due during the day containing `now`, in
/// collection order and regardless of status.
#[must_use]
pub fn todays_tasks<Tz: TimeZone>(
    tasks: &[Task],
    now: &DateTime<Tz>,
    limit: usize,
) -> Vec<Task> {
    let today = DayWindow::containing(now);
    tasks
        .iter()
        .filter(|task| task.due_date().is_some_and(|due| today.contains(due)))
        .take(limit)
        .cloned()
        .collect()
}

/// A project joined with the counts of its tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    /// The summarized project.
    pub project: Project,
    /// Tasks referencing the project.
    pub task_count: usize,
    /// Completed tasks referencing the project.
    pub completed_count: usize,
}

impl ProjectSummary {
    /// Returns the share of completed tasks rounded to the nearest whole
    /// percentage, halves rounding up.
    ///
    /// A project without tasks reports `0`.
    #[must_use]
    pub fn completion_percent(&self) -> usize {
        let numerator = self
            .completed_count
            .checked_mul(200)
            .and_then(|scaled| scaled.checked_add(self.task_count));
        let denominator = self.task_count.checked_mul(2);
        numerator
            .zip(denominator)
            .and_then(|(num, den)| num.checked_div(den))
            .unwrap_or_default()
    }
}

/// Joins projects with tasks on the task's project reference.
///
/// Tasks pointing at unknown projects are ignored.
#[must_use]
pub fn summarize_projects(projects: &[Project], tasks: &[Task]) -> Vec<ProjectSummary> {
    projects
        .iter()
        .map(|project| {
            let (task_count, completed_count) = tasks
                .iter()
                .filter(|task| task.project_id() == Some(project.id()))
                .fold((0, 0), |(total, completed), task| {
                    (
                        total + 1,
                        completed + usize::from(task.status().is_completed()),
                    )
                });
            ProjectSummary {
                project: project.clone(),
                task_count,
                completed_count,
            }
        })
        .collect()
}
