//! Port for the hosted, record-oriented backend used in live mode.
//!
//! The store speaks in untyped JSON records grouped by entity name. Every
//! call answers with a [`RecordEnvelope`]; batch calls additionally report a
//! per-record [`RecordOutcome`].

use crate::board::domain::EntityKind;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

/// A single untyped record keyed by storage field name.
pub type Record = Map<String, Value>;

/// Result type for record store calls.
pub type RecordStoreResult<T> = Result<T, RecordStoreError>;

/// Record-oriented backend contract.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetches every record of an entity type.
    async fn fetch_records(
        &self,
        entity: EntityKind,
        params: &FetchParams,
    ) -> RecordStoreResult<RecordEnvelope>;

    /// Fetches one record by identifier.
    async fn get_record_by_id(
        &self,
        entity: EntityKind,
        id: u64,
        params: &FetchParams,
    ) -> RecordStoreResult<RecordEnvelope>;

    /// Creates records; the store allocates their identifiers.
    async fn create_records(
        &self,
        entity: EntityKind,
        records: Vec<Record>,
    ) -> RecordStoreResult<RecordEnvelope>;

    /// Updates records identified by their `Id` field.
    async fn update_records(
        &self,
        entity: EntityKind,
        records: Vec<Record>,
    ) -> RecordStoreResult<RecordEnvelope>;

    /// Deletes records by identifier.
    async fn delete_records(
        &self,
        entity: EntityKind,
        ids: Vec<u64>,
    ) -> RecordStoreResult<RecordEnvelope>;
}

/// Field projection requested from the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchParams {
    fields: Vec<FieldSelector>,
}

/// One projected field, serialized as `{"field": {"Name": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSelector {
    field: FieldName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct FieldName {
    #[serde(rename = "Name")]
    name: String,
}

impl FetchParams {
    /// Requests the given storage fields.
    #[must_use]
    pub fn for_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|name| FieldSelector {
                    field: FieldName {
                        name: name.to_owned(),
                    },
                })
                .collect(),
        }
    }

    /// Returns the requested field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|selector| selector.field.name.as_str())
    }
}

/// Response wrapper returned by every record store call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordEnvelope {
    /// Whether the request as a whole succeeded.
    pub success: bool,
    /// Diagnostic message, usually present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload of fetch calls: a record or an array of records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Per-record outcomes of batch calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<RecordOutcome>>,
}

impl RecordEnvelope {
    /// Builds a successful envelope carrying `data`.
    #[must_use]
    pub fn with_data(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            ..Self::default()
        }
    }

    /// Builds a successful envelope carrying batch outcomes.
    #[must_use]
    pub fn with_results(results: Vec<RecordOutcome>) -> Self {
        Self {
            success: true,
            results: Some(results),
            ..Self::default()
        }
    }

    /// Builds a failed envelope.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Outcome of one record inside a batch call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordOutcome {
    /// Whether this record was processed.
    pub success: bool,
    /// The stored record on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Diagnostic message on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecordOutcome {
    /// Builds a successful outcome carrying the stored record.
    #[must_use]
    pub const fn succeeded(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Builds a failed outcome.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Errors raised below the envelope, before the store could answer.
#[derive(Debug, Clone, Error)]
pub enum RecordStoreError {
    /// The request could not be delivered or the response not received.
    #[error("record store transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The response body was not a record envelope.
    #[error("record store response could not be decoded: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecordStoreError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
