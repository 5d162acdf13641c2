//! In-memory integration tests for the dashboard views.

use super::helpers::{TestWorkspace, empty_workspace, seeded_workspace};
use rstest::rstest;
use taskboard::board::domain::{TaskId, TaskStatus, TaskUpdate};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_snapshot_counts(seeded_workspace: TestWorkspace) -> eyre::Result<()> {
    let snapshot = seeded_workspace.dashboard().snapshot().await?;

    eyre::ensure!(snapshot.stats.due_today == 1, "{:?}", snapshot.stats);
    eyre::ensure!(snapshot.stats.overdue == 1, "{:?}", snapshot.stats);
    eyre::ensure!(snapshot.stats.completed == 2, "{:?}", snapshot.stats);
    eyre::ensure!(snapshot.stats.in_progress == 2, "{:?}", snapshot.stats);
    eyre::ensure!(snapshot.breakdown.not_started == 4, "{:?}", snapshot.breakdown);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_overdue_task_clears_the_counter(
    seeded_workspace: TestWorkspace,
) -> eyre::Result<()> {
    seeded_workspace
        .tasks()
        .update(
            TaskId::new(7),
            TaskUpdate::new().with_status(TaskStatus::Completed),
        )
        .await?;

    let snapshot = seeded_workspace.dashboard().snapshot().await?;

    eyre::ensure!(snapshot.stats.overdue == 0, "{:?}", snapshot.stats);
    eyre::ensure!(snapshot.stats.completed == 3, "{:?}", snapshot.stats);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_summaries_report_completion(
    seeded_workspace: TestWorkspace,
) -> eyre::Result<()> {
    let summaries = seeded_workspace.dashboard().project_summaries().await?;

    let percents: Vec<usize> = summaries
        .iter()
        .map(|summary| summary.completion_percent())
        .collect();
    eyre::ensure!(percents == vec![50, 0, 50], "percents {percents:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_workspace_has_zeroed_dashboard(empty_workspace: TestWorkspace) -> eyre::Result<()> {
    let snapshot = empty_workspace.dashboard().snapshot().await?;

    eyre::ensure!(snapshot.breakdown.total() == 0, "no tasks");
    eyre::ensure!(snapshot.todays_tasks.is_empty(), "nothing due");
    eyre::ensure!(
        empty_workspace.dashboard().project_summaries().await?.is_empty(),
        "no projects"
    );
    Ok(())
}
