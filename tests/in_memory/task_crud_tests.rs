//! In-memory integration tests for task operations.

use super::helpers::{TestWorkspace, empty_workspace, seeded_workspace, test_now};
use rstest::rstest;
use taskboard::board::domain::{
    KanbanDrop, Priority, ProjectId, RecurringPattern, TaskDraft, TaskFilter, TaskId, TaskStatus,
    TaskUpdate,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_get_sequential_ids(empty_workspace: TestWorkspace) -> eyre::Result<()> {
    let tasks = empty_workspace.tasks();

    let first = tasks.create(TaskDraft::new("First")?).await?;
    let second = tasks
        .create(
            TaskDraft::new("Second")?
                .with_priority(Priority::Low)
                .with_recurrence(RecurringPattern::Daily),
        )
        .await?;

    eyre::ensure!(first.id() == TaskId::new(1), "first id {}", first.id());
    eyre::ensure!(second.id() == TaskId::new(2), "second id {}", second.id());
    eyre::ensure!(second.is_recurring(), "recurrence kept");
    eyre::ensure!(first.created_at() == test_now(), "clock used");
    eyre::ensure!(tasks.get_all().await? == vec![first, second], "list order");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_tasks_continue_numbering(seeded_workspace: TestWorkspace) -> eyre::Result<()> {
    let created = seeded_workspace
        .tasks()
        .create(TaskDraft::new("After the fixtures")?)
        .await?;

    eyre::ensure!(created.id() == TaskId::new(9), "allocated {}", created.id());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_only_touches_given_fields(seeded_workspace: TestWorkspace) -> eyre::Result<()> {
    let tasks = seeded_workspace.tasks();
    let before = tasks.get_by_id(TaskId::new(4)).await?;

    let after = tasks
        .update(
            TaskId::new(4),
            TaskUpdate::new()
                .with_priority(Priority::High)
                .clear_project(),
        )
        .await?;

    eyre::ensure!(after.priority() == Priority::High, "priority replaced");
    eyre::ensure!(after.project_id().is_none(), "project cleared");
    eyre::ensure!(after.title() == before.title(), "title untouched");
    eyre::ensure!(after.created_at() == before.created_at(), "created untouched");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_a_seeded_completed_task_clears_stamp(
    seeded_workspace: TestWorkspace,
) -> eyre::Result<()> {
    let tasks = seeded_workspace.tasks();

    let reopened = tasks.toggle_status(TaskId::new(1)).await?;

    eyre::ensure!(reopened.status() == TaskStatus::NotStarted, "cycled to start");
    eyre::ensure!(reopened.completed_at().is_none(), "stamp cleared");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn kanban_move_updates_the_board(seeded_workspace: TestWorkspace) -> eyre::Result<()> {
    let tasks = seeded_workspace.tasks();

    let moved = tasks
        .move_to_column(
            TaskId::new(3),
            KanbanDrop::new(TaskStatus::NotStarted, Some(TaskStatus::InProgress)),
        )
        .await?;
    let board = tasks.board(&TaskFilter::new()).await?;

    eyre::ensure!(moved.is_some(), "drop across columns updates");
    let in_progress: Vec<u64> = board
        .column(TaskStatus::InProgress)
        .map(|column| column.tasks().iter().map(|task| task.id().get()).collect())
        .unwrap_or_default();
    eyre::ensure!(in_progress == vec![2, 3, 7], "in progress {in_progress:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filters_combine_search_and_project(seeded_workspace: TestWorkspace) -> eyre::Result<()> {
    let found = seeded_workspace
        .tasks()
        .find_matching(
            &TaskFilter::new()
                .with_search("RELEASE")
                .with_project(ProjectId::new(2)),
        )
        .await?;

    let ids: Vec<u64> = found.iter().map(|task| task.id().get()).collect();
    eyre::ensure!(ids == vec![4], "found {ids:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_is_gone(seeded_workspace: TestWorkspace) -> eyre::Result<()> {
    let tasks = seeded_workspace.tasks();

    let deleted = tasks.delete(TaskId::new(8)).await?;
    let lookup = tasks.get_by_id(TaskId::new(8)).await;

    eyre::ensure!(deleted.id() == TaskId::new(8), "ack id");
    eyre::ensure!(
        lookup.as_ref().is_err_and(|err| err.is_not_found()),
        "unexpected lookup {lookup:?}"
    );
    eyre::ensure!(tasks.get_all().await?.len() == 7, "one task removed");
    Ok(())
}
