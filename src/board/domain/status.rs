//! Enumerations describing task workflow, urgency, and recurrence.

use super::{ParsePriorityError, ParseRecurringPatternError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Folds separators and case so `"In Progress"`, `"in_progress"`, and
/// `"IN-PROGRESS"` compare equal.
fn normalize_label(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter_map(|ch| match ch {
            ' ' | '_' | '-' => None,
            other => Some(other.to_ascii_lowercase()),
        })
        .collect()
}

/// Task workflow status, doubling as the kanban column identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not begun.
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Work is underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    /// Every status in kanban column order.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    /// Returns the display and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Returns the status reached by one toggle of the status control.
    ///
    /// The cycle is `NotStarted -> InProgress -> Completed -> NotStarted`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::NotStarted,
        }
    }

    /// Returns `true` for [`TaskStatus::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize_label(value).as_str() {
            "notstarted" => Ok(Self::NotStarted),
            "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the display and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize_label(value).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repetition cadence of a recurring task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecurringPattern {
    /// Repeats every day.
    Daily,
    /// Repeats every week.
    Weekly,
    /// Repeats every month.
    Monthly,
}

impl RecurringPattern {
    /// Returns the display and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl TryFrom<&str> for RecurringPattern {
    type Error = ParseRecurringPatternError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize_label(value).as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(ParseRecurringPatternError(value.to_owned())),
        }
    }
}

impl fmt::Display for RecurringPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
