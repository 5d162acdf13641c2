//! Task and project management for the dashboard.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! [`Workspace`] wires exactly one backend, in-memory or hosted, into the
//! services.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
mod workspace;

pub use workspace::{DynProjectRepository, DynTaskRepository, Workspace, WorkspaceError};

#[cfg(test)]
mod tests;
