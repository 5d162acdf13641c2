//! Repository port shared by every entity collection.

use crate::board::domain::{Entity, EntityId, EntityKind};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for entity repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence contract for one entity collection.
///
/// Implementations own identifier allocation; callers never choose ids.
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Returns a snapshot of every entity in collection order.
    async fn list(&self) -> RepositoryResult<Vec<E>>;

    /// Finds an entity by identifier.
    ///
    /// Returns `None` when the entity does not exist.
    async fn find_by_id(&self, id: E::Id) -> RepositoryResult<Option<E>>;

    /// Stores a new entity built from `draft` and returns the stored copy.
    async fn create(&self, draft: E::Draft, created_at: DateTime<Utc>) -> RepositoryResult<E>;

    /// Replaces an existing entity and returns the stored copy.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the entity does not exist.
    async fn update(&self, entity: &E) -> RepositoryResult<E>;

    /// Removes an entity.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the entity does not exist.
    async fn delete(&self, id: E::Id) -> RepositoryResult<()>;
}

/// Errors returned by entity repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// No entity has the requested identifier.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Collection that was searched.
        kind: EntityKind,
        /// Identifier that was requested.
        id: u64,
    },

    /// The record store reported a failure for the request or one of its
    /// records.
    #[error("record store failure: {0}")]
    RemoteFailure(String),

    /// The record store could not be reached or answered unintelligibly.
    #[error("network fault: {0}")]
    NetworkFault(Arc<dyn std::error::Error + Send + Sync>),

    /// Local persistence failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Builds a not-found error for an entity identifier.
    pub fn not_found<E: Entity>(id: E::Id) -> Self {
        Self::NotFound {
            kind: E::KIND,
            id: id.value(),
        }
    }

    /// Wraps a transport error.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::NetworkFault(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` for [`RepositoryError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
