//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services
//! and implemented by the adapters.

pub mod record_store;
pub mod repository;

pub use record_store::{
    FetchParams, FieldSelector, Record, RecordEnvelope, RecordOutcome, RecordStore,
    RecordStoreError, RecordStoreResult,
};
pub use repository::{EntityRepository, RepositoryError, RepositoryResult};
