//! Integration tests for assembling a workspace from settings.

use super::helpers::clock;
use mockable::MockClock;
use rstest::rstest;
use std::sync::Arc;
use taskboard::{
    board::{Workspace, WorkspaceError},
    config::{ConfigError, Settings},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn local_settings_build_a_seeded_workspace(clock: Arc<MockClock>) -> eyre::Result<()> {
    let settings = Settings::from_toml(
        "[backend.local]\nlatency_min_ms = 0\nlatency_max_ms = 0\n",
    )?;

    let workspace = Workspace::from_settings(&settings, clock)?;

    eyre::ensure!(workspace.tasks().get_all().await?.len() == 8, "seeded tasks");
    eyre::ensure!(workspace.projects().get_all().await?.len() == 3, "seeded projects");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unseeded_local_settings_start_empty(clock: Arc<MockClock>) -> eyre::Result<()> {
    let settings = Settings::from_toml(
        "[backend.local]\nlatency_min_ms = 0\nlatency_max_ms = 0\nseed_fixtures = false\n",
    )?;

    let workspace = Workspace::from_settings(&settings, clock)?;

    eyre::ensure!(workspace.tasks().get_all().await?.is_empty(), "no tasks");
    Ok(())
}

#[rstest]
fn remote_mode_without_details_fails(clock: Arc<MockClock>) -> eyre::Result<()> {
    let settings = Settings::from_toml("[backend]\nmode = 'remote'\n")?;

    let result = Workspace::from_settings(&settings, clock);

    eyre::ensure!(
        matches!(
            result,
            Err(WorkspaceError::Config(ConfigError::MissingRemoteSettings))
        ),
        "remote mode without details should fail"
    );
    Ok(())
}

#[rstest]
fn remote_settings_build_without_connecting(clock: Arc<MockClock>) -> eyre::Result<()> {
    let settings = Settings::from_toml(
        "[backend]\nmode = 'remote'\n[backend.remote]\nbase_url = 'http://127.0.0.1:9/api'\nproject_id = 'p'\npublic_key = 'k'\n",
    )?;

    Workspace::from_settings(&settings, clock)?;
    Ok(())
}
