//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The largest identifier is already taken.
    #[error("identifier space exhausted")]
    IdentifiersExhausted,
}

/// Error returned while coercing an identifier from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid identifier '{0}', expected a positive integer")]
pub struct ParseIdError(pub String);

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing recurrence patterns.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown recurring pattern: {0}")]
pub struct ParseRecurringPatternError(pub String);
