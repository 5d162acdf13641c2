//! In-memory integration tests for project operations.

use super::helpers::{TestWorkspace, empty_workspace, seeded_workspace};
use rstest::rstest;
use taskboard::board::domain::{
    DEFAULT_PROJECT_COLOR, ProjectDraft, ProjectId, ProjectUpdate, TaskDraft, TaskFilter,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_lifecycle(empty_workspace: TestWorkspace) -> eyre::Result<()> {
    let projects = empty_workspace.projects();

    let created = projects
        .create(ProjectDraft::new("Garden")?.with_description("Vegetable beds"))
        .await?;
    let updated = projects
        .update(
            created.id(),
            ProjectUpdate::new().with_color("#10b981").clear_description(),
        )
        .await?;
    projects.delete(created.id()).await?;

    eyre::ensure!(created.id() == ProjectId::new(1), "first id");
    eyre::ensure!(created.color() == DEFAULT_PROJECT_COLOR, "default colour");
    eyre::ensure!(updated.color() == "#10b981", "colour replaced");
    eyre::ensure!(updated.description().is_none(), "description cleared");
    eyre::ensure!(projects.get_all().await?.is_empty(), "project deleted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_name_is_rejected(seeded_workspace: TestWorkspace) -> eyre::Result<()> {
    let result = seeded_workspace
        .projects()
        .update(ProjectId::new(2), ProjectUpdate::new().with_name(" "))
        .await;

    eyre::ensure!(result.is_err(), "blank name accepted");
    let stored = seeded_workspace.projects().get_by_id(ProjectId::new(2)).await?;
    eyre::ensure!(stored.name() == "Mobile App", "name kept");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_may_reference_missing_projects(
    empty_workspace: TestWorkspace,
) -> eyre::Result<()> {
    let task = empty_workspace
        .tasks()
        .create(TaskDraft::new("Orphan")?.with_project(ProjectId::new(40)))
        .await?;

    let members = empty_workspace
        .tasks()
        .find_matching(&TaskFilter::new().with_project(ProjectId::new(40)))
        .await?;

    eyre::ensure!(members == vec![task], "advisory reference is kept");
    Ok(())
}
