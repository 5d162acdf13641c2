//! JSON-over-HTTP transport for the hosted record store.

use crate::board::{
    domain::EntityKind,
    ports::{FetchParams, Record, RecordEnvelope, RecordStore, RecordStoreError, RecordStoreResult},
};
use async_trait::async_trait;
use serde::Serialize;

/// Header carrying the hosted project identifier.
pub const PROJECT_ID_HEADER: &str = "X-Project-Id";

/// Header carrying the public API key.
pub const PUBLIC_KEY_HEADER: &str = "X-Public-Key";

/// Record store reached over HTTP.
///
/// Every verb is a `POST {base_url}/{entity}/{verb}` with a JSON body; the
/// response body is always a [`RecordEnvelope`], so HTTP status codes are not
/// interpreted beyond transport success.
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    public_key: String,
}

#[derive(Serialize)]
struct GetRecordBody<'a> {
    id: u64,
    #[serde(flatten)]
    params: &'a FetchParams,
}

#[derive(Serialize)]
struct RecordsBody {
    records: Vec<Record>,
}

#[derive(Serialize)]
struct DeleteBody {
    #[serde(rename = "RecordIds")]
    record_ids: Vec<u64>,
}

impl HttpRecordStore {
    /// Creates a store client for one hosted project.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            project_id: project_id.into(),
            public_key: public_key.into(),
        }
    }

    /// Replaces the underlying HTTP client.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, entity: EntityKind, verb: &str) -> String {
        format!("{}/{}/{verb}", self.base_url, entity.as_str())
    }

    async fn post<B>(&self, entity: EntityKind, verb: &str, body: &B) -> RecordStoreResult<RecordEnvelope>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(entity, verb);
        tracing::debug!(%url, "calling record store");
        let response = self
            .client
            .post(&url)
            .header(PROJECT_ID_HEADER, &self.project_id)
            .header(PUBLIC_KEY_HEADER, &self.public_key)
            .json(body)
            .send()
            .await
            .map_err(RecordStoreError::transport)?;
        response
            .json::<RecordEnvelope>()
            .await
            .map_err(RecordStoreError::decode)
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn fetch_records(
        &self,
        entity: EntityKind,
        params: &FetchParams,
    ) -> RecordStoreResult<RecordEnvelope> {
        self.post(entity, "fetch", params).await
    }

    async fn get_record_by_id(
        &self,
        entity: EntityKind,
        id: u64,
        params: &FetchParams,
    ) -> RecordStoreResult<RecordEnvelope> {
        self.post(entity, "get", &GetRecordBody { id, params }).await
    }

    async fn create_records(
        &self,
        entity: EntityKind,
        records: Vec<Record>,
    ) -> RecordStoreResult<RecordEnvelope> {
        self.post(entity, "create", &RecordsBody { records }).await
    }

    async fn update_records(
        &self,
        entity: EntityKind,
        records: Vec<Record>,
    ) -> RecordStoreResult<RecordEnvelope> {
        self.post(entity, "update", &RecordsBody { records }).await
    }

    async fn delete_records(
        &self,
        entity: EntityKind,
        ids: Vec<u64>,
    ) -> RecordStoreResult<RecordEnvelope> {
        self.post(entity, "delete", &DeleteBody { record_ids: ids })
            .await
    }
}
