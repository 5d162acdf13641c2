//! Entity repository backed by the hosted record store.

use super::{CodecError, RecordCodec};
use crate::board::{
    domain::{Entity, EntityId},
    ports::{
        EntityRepository, FetchParams, RecordEnvelope, RecordOutcome, RecordStore,
        RepositoryError, RepositoryResult,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Repository translating CRUD verbs into record store calls.
///
/// Every envelope is checked before its payload is read: a store-level
/// failure or any failed record in a batch becomes
/// [`RepositoryError::RemoteFailure`], and transport problems become
/// [`RepositoryError::NetworkFault`].
pub struct RemoteRepository<E, S: ?Sized> {
    store: Arc<S>,
    params: FetchParams,
    entity: PhantomData<fn() -> E>,
}

impl<E: RecordCodec, S: RecordStore + ?Sized> RemoteRepository<E, S> {
    /// Creates a repository over a shared record store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            params: FetchParams::for_fields(E::FIELDS.iter().copied()),
            entity: PhantomData,
        }
    }
}

impl<E, S: ?Sized> Clone for RemoteRepository<E, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            params: self.params.clone(),
            entity: PhantomData,
        }
    }
}

impl<E: Entity, S: ?Sized> fmt::Debug for RemoteRepository<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteRepository")
            .field("entity", &E::KIND)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

fn network_fault(err: impl std::error::Error + Send + Sync + 'static) -> RepositoryError {
    RepositoryError::network(err)
}

fn decode_failure<E: Entity>(err: &CodecError) -> RepositoryError {
    RepositoryError::RemoteFailure(format!("malformed {} record: {err}", E::KIND))
}

/// Rejects envelopes that report failure for the whole request.
fn ensure_success(envelope: RecordEnvelope) -> RepositoryResult<RecordEnvelope> {
    if envelope.success {
        return Ok(envelope);
    }
    let message = envelope
        .message
        .unwrap_or_else(|| "record store reported failure".to_owned());
    tracing::error!(%message, "record store request failed");
    Err(RepositoryError::RemoteFailure(message))
}

/// Rejects batches in which any record failed and returns the successful
/// outcomes.
fn successful_outcomes<E: Entity>(
    results: Vec<RecordOutcome>,
    verb: &str,
) -> RepositoryResult<Vec<RecordOutcome>> {
    let (succeeded, failed): (Vec<_>, Vec<_>) =
        results.into_iter().partition(|outcome| outcome.success);
    if failed.is_empty() {
        return Ok(succeeded);
    }
    let messages: Vec<&str> = failed
        .iter()
        .filter_map(|outcome| outcome.message.as_deref())
        .collect();
    tracing::error!(
        entity = %E::KIND,
        verb,
        failed = failed.len(),
        ?messages,
        "record store rejected batch records"
    );
    Err(RepositoryError::RemoteFailure(format!(
        "failed to {verb} {} {} record(s): {}",
        failed.len(),
        E::KIND,
        messages.join("; ")
    )))
}

/// Extracts the stored row of a single-record batch.
fn single_record<E: Entity>(envelope: RecordEnvelope, verb: &str) -> RepositoryResult<Option<Value>> {
    let envelope = ensure_success(envelope)?;
    match envelope.results {
        Some(results) => Ok(successful_outcomes::<E>(results, verb)?
            .into_iter()
            .find_map(|outcome| outcome.data)),
        None => Ok(envelope.data),
    }
}

#[async_trait]
impl<E, S> EntityRepository<E> for RemoteRepository<E, S>
where
    E: RecordCodec,
    S: RecordStore + ?Sized,
{
    async fn list(&self) -> RepositoryResult<Vec<E>> {
        let envelope = self
            .store
            .fetch_records(E::KIND, &self.params)
            .await
            .map_err(network_fault)?;
        match ensure_success(envelope)?.data {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(rows)) => rows
                .iter()
                .map(|row| E::from_record(row).map_err(|err| decode_failure::<E>(&err)))
                .collect(),
            Some(other) => Err(RepositoryError::RemoteFailure(format!(
                "expected a list of {} records, found {other}",
                E::KIND
            ))),
        }
    }

    async fn find_by_id(&self, id: E::Id) -> RepositoryResult<Option<E>> {
        let envelope = self
            .store
            .get_record_by_id(E::KIND, id.value(), &self.params)
            .await
            .map_err(network_fault)?;
        match ensure_success(envelope)?.data {
            None | Some(Value::Null) => Ok(None),
            Some(row) => E::from_record(&row)
                .map(Some)
                .map_err(|err| decode_failure::<E>(&err)),
        }
    }

    async fn create(&self, draft: E::Draft, created_at: DateTime<Utc>) -> RepositoryResult<E> {
        let record = E::draft_to_record(&draft, created_at);
        let envelope = self
            .store
            .create_records(E::KIND, vec![record])
            .await
            .map_err(network_fault)?;
        let row = single_record::<E>(envelope, "create")?.ok_or_else(|| {
            RepositoryError::RemoteFailure(format!(
                "record store returned no created {} record",
                E::KIND
            ))
        })?;
        E::from_record(&row).map_err(|err| decode_failure::<E>(&err))
    }

    async fn update(&self, entity: &E) -> RepositoryResult<E> {
        let envelope = self
            .store
            .update_records(E::KIND, vec![entity.to_record()])
            .await
            .map_err(network_fault)?;
        match single_record::<E>(envelope, "update")? {
            Some(row) => E::from_record(&row).map_err(|err| decode_failure::<E>(&err)),
            None => Ok(entity.clone()),
        }
    }

    async fn delete(&self, id: E::Id) -> RepositoryResult<()> {
        let envelope = self
            .store
            .delete_records(E::KIND, vec![id.value()])
            .await
            .map_err(network_fault)?;
        let envelope = ensure_success(envelope)?;
        if let Some(results) = envelope.results {
            successful_outcomes::<E>(results, "delete")?;
        }
        Ok(())
    }
}
