//! Shared test helpers for in-memory backend integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::MockClock;
use rstest::fixture;
use std::sync::Arc;
use taskboard::board::{Workspace, adapters::memory::SimulatedLatency};

/// Workspace type used across the in-memory tests.
pub type TestWorkspace = Workspace<MockClock>;

/// The instant every test runs at: Friday 7 June 2024, 12:00 UTC.
///
/// Noon UTC is still 7 June in every local time zone, so the dashboard's
/// local-day counters see the same day wherever the tests run.
#[must_use]
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 7, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Provides a mock clock frozen at [`test_now`].
#[fixture]
pub fn clock() -> Arc<MockClock> {
    let mut clock = MockClock::new();
    clock.expect_utc().return_const(test_now());
    clock
        .expect_local()
        .return_const(test_now().with_timezone(&Local));
    Arc::new(clock)
}

/// Provides a workspace with no data and no simulated latency.
#[fixture]
pub fn empty_workspace(clock: Arc<MockClock>) -> TestWorkspace {
    Workspace::local(SimulatedLatency::none(), false, clock)
        .expect("empty workspace should build")
}

/// Provides a workspace seeded with the bundled demo data and no simulated
/// latency.
#[fixture]
pub fn seeded_workspace(clock: Arc<MockClock>) -> TestWorkspace {
    Workspace::local(SimulatedLatency::none(), true, clock)
        .expect("seeded workspace should build")
}
