//! In-memory backend seeded from bundled fixtures.

pub mod fixtures;
mod latency;
mod repository;

pub use fixtures::FixtureError;
pub use latency::{DEFAULT_MAX_LATENCY_MS, DEFAULT_MIN_LATENCY_MS, SimulatedLatency};
pub use repository::InMemoryRepository;
