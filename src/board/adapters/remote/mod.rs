//! Live-mode backend talking to the hosted record store.
//!
//! [`RemoteRepository`] implements the repository port on top of any
//! [`RecordStore`](crate::board::ports::RecordStore); [`HttpRecordStore`] is
//! the production transport.

mod codec;
mod http;
mod repository;

pub use codec::{CodecError, RecordCodec};
pub use http::{HttpRecordStore, PROJECT_ID_HEADER, PUBLIC_KEY_HEADER};
pub use repository::RemoteRepository;
