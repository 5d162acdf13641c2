//! Then steps for kanban status BDD scenarios.

use super::world::{KanbanWorld, parse_status, run_async};
use rstest_bdd_macros::then;
use taskboard::board::domain::TaskFilter;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &KanbanWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let task = world.current_task()?;
    let stored = run_async(world.service.get_by_id(task.id()))?;

    eyre::ensure!(
        stored.status() == expected,
        "expected status {expected}, found {}",
        stored.status()
    );
    Ok(())
}

#[then("the task has a completion timestamp")]
fn has_completion_timestamp(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let task = world.current_task()?;
    eyre::ensure!(
        task.completed_at().is_some(),
        "expected a completion timestamp on task {}",
        task.id()
    );
    Ok(())
}

#[then("the task has no completion timestamp")]
fn has_no_completion_timestamp(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let task = world.current_task()?;
    eyre::ensure!(
        task.completed_at().is_none(),
        "unexpected completion timestamp on task {}",
        task.id()
    );
    Ok(())
}

#[then(r#"the "{title}" column holds the task"#)]
fn column_holds_task(world: &KanbanWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.current_task()?;
    let board = run_async(world.service.board(&TaskFilter::new()))?;
    let column = board
        .columns()
        .iter()
        .find(|column| column.title() == title)
        .ok_or_else(|| eyre::eyre!("no column titled {title}"))?;

    eyre::ensure!(
        column.tasks().iter().any(|card| card.id() == task.id()),
        "task {} is not in the {title} column",
        task.id()
    );
    Ok(())
}

#[then("no update was made")]
fn no_update_was_made(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;

    eyre::ensure!(
        matches!(result, Ok(None)),
        "expected an ignored drop, got {result:?}"
    );
    Ok(())
}
