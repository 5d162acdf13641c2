//! Static demo data used to seed the in-memory backend.

use crate::board::domain::{Project, Task};
use thiserror::Error;

const TASKS_JSON: &str = include_str!("fixtures/tasks.json");
const PROJECTS_JSON: &str = include_str!("fixtures/projects.json");

/// Error returned when bundled fixture data cannot be decoded.
#[derive(Debug, Error)]
#[error("invalid {collection} fixture data: {source}")]
pub struct FixtureError {
    collection: &'static str,
    #[source]
    source: serde_json::Error,
}

/// Returns the bundled demo tasks.
///
/// # Errors
///
/// Returns [`FixtureError`] if the bundled JSON does not describe tasks.
pub fn tasks() -> Result<Vec<Task>, FixtureError> {
    serde_json::from_str(TASKS_JSON).map_err(|source| FixtureError {
        collection: "task",
        source,
    })
}

/// Returns the bundled demo projects.
///
/// # Errors
///
/// Returns [`FixtureError`] if the bundled JSON does not describe projects.
pub fn projects() -> Result<Vec<Project>, FixtureError> {
    serde_json::from_str(PROJECTS_JSON).map_err(|source| FixtureError {
        collection: "project",
        source,
    })
}
