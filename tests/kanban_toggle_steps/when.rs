//! When steps for kanban status BDD scenarios.

use super::world::{KanbanWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::domain::KanbanDrop;

#[when("the task status is toggled")]
fn toggle_task(world: &mut KanbanWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    let toggled = run_async(world.service.toggle_status(id)).wrap_err("toggle task status")?;
    world.task = Some(toggled);
    Ok(())
}

#[when(r#"the card is dragged from "{source}" to "{destination}""#)]
fn drag_card(
    world: &mut KanbanWorld,
    source: String,
    destination: String,
) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    let drop = KanbanDrop::new(parse_status(&source)?, Some(parse_status(&destination)?));

    let result = run_async(world.service.move_to_column(id, drop));
    if let Ok(Some(ref moved)) = result {
        world.task = Some(moved.clone());
    }
    world.last_move = Some(result);
    Ok(())
}
