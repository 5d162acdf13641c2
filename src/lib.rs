//! Taskboard: the data-service core of a task and project dashboard.
//!
//! This crate provides CRUD services for tasks and projects, kanban status
//! transitions, task filtering, and the statistics shown on the dashboard.
//! Presentation is left to the caller.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store,
//!   hosted record store)
//!
//! # Modules
//!
//! - [`board`]: Tasks, projects, and the services operating on them
//! - [`config`]: Backend selection and its settings

pub mod board;
pub mod config;
