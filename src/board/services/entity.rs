//! CRUD facade shared by the task and project services.

use crate::board::{
    domain::{BoardDomainError, Entity},
    ports::{EntityRepository, RepositoryError},
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl BoardServiceError {
    /// Returns `true` when the requested entity does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound { .. }))
    }
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Acknowledgement returned by a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deleted<I> {
    id: I,
    success: bool,
}

impl<I: Copy> Deleted<I> {
    const fn new(id: I) -> Self {
        Self { id, success: true }
    }

    /// Returns the identifier of the removed entity.
    #[must_use]
    pub const fn id(&self) -> I {
        self.id
    }

    /// Always `true`; failures are reported as errors instead.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }
}

/// Generic entity service over one repository and a clock.
///
/// The repository may be a concrete adapter or a trait object, which is how
/// the backend is chosen at composition time.
pub struct EntityService<E, R, C>
where
    E: Entity,
    R: EntityRepository<E> + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    entity: std::marker::PhantomData<fn() -> E>,
}

impl<E, R, C> Clone for EntityService<E, R, C>
where
    E: Entity,
    R: EntityRepository<E> + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            entity: std::marker::PhantomData,
        }
    }
}

impl<E, R, C> EntityService<E, R, C>
where
    E: Entity,
    R: EntityRepository<E> + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            entity: std::marker::PhantomData,
        }
    }

    /// Returns the clock used for timestamps.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns a snapshot of every entity in collection order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the backend fails.
    #[tracing::instrument(skip(self), fields(entity = %E::KIND))]
    pub async fn get_all(&self) -> BoardServiceResult<Vec<E>> {
        let entities = self
            .repository
            .list()
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to fetch {}s", E::KIND))?;
        Ok(entities)
    }

    /// Returns the entity with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] (wrapped) when no entity has the
    /// identifier, or another repository error when the backend fails.
    #[tracing::instrument(skip(self), fields(entity = %E::KIND))]
    pub async fn get_by_id(&self, id: E::Id) -> BoardServiceResult<E> {
        let found = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|err| tracing::error!(error = %err, %id, "failed to fetch {}", E::KIND))?;
        found.ok_or_else(|| {
            tracing::error!(%id, "{} not found", E::KIND);
            RepositoryError::not_found::<E>(id).into()
        })
    }

    /// Stores a new entity stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the backend rejects the
    /// record.
    #[tracing::instrument(skip(self, draft), fields(entity = %E::KIND))]
    pub async fn create(&self, draft: E::Draft) -> BoardServiceResult<E> {
        let created_at = self.clock.utc();
        let created = self
            .repository
            .create(draft, created_at)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to create {}", E::KIND))?;
        tracing::debug!(id = %created.id(), "created {}", E::KIND);
        Ok(created)
    }

    /// Removes the entity with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] (wrapped) when no entity has the
    /// identifier, or another repository error when the backend fails.
    #[tracing::instrument(skip(self), fields(entity = %E::KIND))]
    pub async fn delete(&self, id: E::Id) -> BoardServiceResult<Deleted<E::Id>> {
        self.repository
            .delete(id)
            .await
            .inspect_err(|err| tracing::error!(error = %err, %id, "failed to delete {}", E::KIND))?;
        tracing::debug!(%id, "deleted {}", E::KIND);
        Ok(Deleted::new(id))
    }

    /// Loads an entity, mutates it with `apply`, and stores the result.
    pub(super) async fn update_with<F>(&self, id: E::Id, apply: F) -> BoardServiceResult<E>
    where
        F: FnOnce(&mut E, &C) -> Result<(), BoardDomainError> + Send,
    {
        let mut entity = self.get_by_id(id).await?;
        apply(&mut entity, self.clock.as_ref())
            .inspect_err(|err| tracing::error!(error = %err, %id, "rejected {} update", E::KIND))?;
        let stored = self
            .repository
            .update(&entity)
            .await
            .inspect_err(|err| tracing::error!(error = %err, %id, "failed to update {}", E::KIND))?;
        tracing::debug!(%id, "updated {}", E::KIND);
        Ok(stored)
    }
}
