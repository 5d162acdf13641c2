//! Application services for the task board.
//!
//! [`TaskService`] and [`ProjectService`] are the CRUD facade consumed by
//! the presentation layer; both are instantiations of [`EntityService`].
//! [`DashboardService`] derives read-only views from the two collections.

mod dashboard;
mod entity;
mod project;
mod task;

pub use dashboard::{DashboardService, DashboardSnapshot};
pub use entity::{BoardServiceError, BoardServiceResult, Deleted, EntityService};
pub use project::ProjectService;
pub use task::TaskService;
