//! Step definitions for kanban status scenarios.

mod given;
mod then;
mod when;
pub mod world;
