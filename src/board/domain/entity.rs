//! The shape shared by every record type managed through an entity service.

use super::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity collection discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// The task collection.
    Task,
    /// The project collection.
    Project,
}

impl EntityKind {
    /// Returns the collection name used by record stores.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record with a store-allocated identifier.
///
/// New records are described by a [`Entity::Draft`] and only become entities
/// once a backend has allocated their identifier.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Identifier type of the collection.
    type Id: EntityId;

    /// Caller-supplied fields for a record that does not exist yet.
    type Draft: Clone + fmt::Debug + Send + Sync + 'static;

    /// Collection this entity belongs to.
    const KIND: EntityKind;

    /// Returns the record identifier.
    fn id(&self) -> Self::Id;

    /// Materializes a draft under an allocated identifier.
    fn from_draft(id: Self::Id, draft: Self::Draft, created_at: DateTime<Utc>) -> Self;
}
