//! Ordered in-memory entity collection.

use super::SimulatedLatency;
use crate::board::{
    domain::{Entity, EntityId},
    ports::{EntityRepository, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe in-memory repository keeping entities in insertion order.
///
/// Clones share the same collection, so a repository can be handed to
/// several services while tests still get full isolation by constructing a
/// fresh instance.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    entities: Arc<RwLock<Vec<E>>>,
    latency: SimulatedLatency,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Creates an empty repository without simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Creates a repository holding `entities` in the given order.
    #[must_use]
    pub fn seeded(entities: impl IntoIterator<Item = E>) -> Self {
        Self {
            entities: Arc::new(RwLock::new(entities.into_iter().collect())),
            latency: SimulatedLatency::none(),
        }
    }

    /// Applies a simulated round-trip delay to every operation.
    #[must_use]
    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Returns the configured latency.
    #[must_use]
    pub const fn latency(&self) -> SimulatedLatency {
        self.latency
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<E>>> {
        self.entities
            .read()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<E>>> {
        self.entities
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn position_of<E: Entity>(entities: &[E], id: E::Id) -> RepositoryResult<usize> {
    entities
        .iter()
        .position(|entity| entity.id() == id)
        .ok_or_else(|| RepositoryError::not_found::<E>(id))
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for InMemoryRepository<E> {
    async fn list(&self) -> RepositoryResult<Vec<E>> {
        self.latency.wait().await;
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: E::Id) -> RepositoryResult<Option<E>> {
        self.latency.wait().await;
        let entities = self.read()?;
        Ok(entities.iter().find(|entity| entity.id() == id).cloned())
    }

    async fn create(&self, draft: E::Draft, created_at: DateTime<Utc>) -> RepositoryResult<E> {
        self.latency.wait().await;
        let mut entities = self.write()?;
        let id = E::Id::allocate(entities.iter().map(Entity::id))
            .map_err(RepositoryError::persistence)?;
        let entity = E::from_draft(id, draft, created_at);
        entities.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: &E) -> RepositoryResult<E> {
        self.latency.wait().await;
        let mut entities = self.write()?;
        let index = position_of(&entities, entity.id())?;
        if let Some(slot) = entities.get_mut(index) {
            *slot = entity.clone();
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: E::Id) -> RepositoryResult<()> {
        self.latency.wait().await;
        let mut entities = self.write()?;
        let index = position_of(&entities, id)?;
        entities.remove(index);
        Ok(())
    }
}
