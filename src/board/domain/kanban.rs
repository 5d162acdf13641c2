//! Kanban board grouping and drag-and-drop resolution.

use super::{Task, TaskStatus};

/// Outcome of dropping a card on the board.
///
/// `destination` is `None` when the card was released outside every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanbanDrop {
    /// Column the card was dragged from.
    pub source: TaskStatus,
    /// Column the card was released over, if any.
    pub destination: Option<TaskStatus>,
}

impl KanbanDrop {
    /// Creates a drop between two columns.
    #[must_use]
    pub const fn new(source: TaskStatus, destination: Option<TaskStatus>) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Returns the status the dropped task should take.
    ///
    /// Reordering within a column and drops outside the board resolve to
    /// `None`; ordering inside a column is not persisted.
    #[must_use]
    pub fn target_status(self) -> Option<TaskStatus> {
        self.destination
            .filter(|destination| *destination != self.source)
    }
}

/// One status column of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanbanColumn {
    status: TaskStatus,
    tasks: Vec<Task>,
}

impl KanbanColumn {
    /// Returns the status this column collects.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.status {
            TaskStatus::NotStarted => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Done",
        }
    }

    /// Returns the tasks in the column, in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of cards in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Tasks grouped into one column per status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanbanBoard {
    columns: Vec<KanbanColumn>,
}

impl KanbanBoard {
    /// Groups tasks by status, preserving their relative order.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut columns: Vec<KanbanColumn> = TaskStatus::ALL
            .into_iter()
            .map(|status| KanbanColumn {
                status,
                tasks: Vec::new(),
            })
            .collect();

        for task in tasks {
            if let Some(column) = columns
                .iter_mut()
                .find(|column| column.status == task.status())
            {
                column.tasks.push(task.clone());
            }
        }

        Self { columns }
    }

    /// Returns the columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[KanbanColumn] {
        &self.columns
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&KanbanColumn> {
        self.columns.iter().find(|column| column.status == status)
    }
}
