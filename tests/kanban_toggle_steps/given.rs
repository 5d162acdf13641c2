//! Given steps for kanban status BDD scenarios.

use super::world::{KanbanWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::{TaskDraft, TaskStatus};

#[given(r#"a board with a task titled "{title}""#)]
fn board_with_task(world: &mut KanbanWorld, title: String) -> Result<(), eyre::Report> {
    let draft = TaskDraft::new(title).wrap_err("build task draft")?;
    let created = run_async(world.service.create(draft)).wrap_err("create scenario task")?;
    world.task = Some(created);
    Ok(())
}

#[given(r#"a board with a completed task titled "{title}""#)]
fn board_with_completed_task(world: &mut KanbanWorld, title: String) -> Result<(), eyre::Report> {
    let draft = TaskDraft::new(title)
        .wrap_err("build task draft")?
        .with_status(TaskStatus::Completed);
    let created = run_async(world.service.create(draft)).wrap_err("create scenario task")?;
    world.task = Some(created);
    Ok(())
}
