//! Shared helpers for board unit tests.

use crate::board::domain::{Entity, Task, TaskDraft, TaskId};
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::MockClock;
use std::sync::{Arc, Mutex};

/// Instant shared by the mock clocks built from it; tests move it forward.
#[derive(Debug, Clone)]
pub struct TestTime(Arc<Mutex<DateTime<Utc>>>);

impl TestTime {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(now)))
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.0.lock().map(|now| *now).unwrap_or_default()
    }

    pub fn advance(&self, delta: TimeDelta) {
        if let Ok(mut now) = self.0.lock() {
            *now += delta;
        }
    }

    /// Builds a mock clock that reads the shared instant on every call.
    pub fn clock(&self) -> MockClock {
        let mut clock = MockClock::new();
        let utc_time = self.clone();
        clock.expect_utc().returning(move || utc_time.now());
        let local_time = self.clone();
        clock
            .expect_local()
            .returning(move || local_time.now().with_timezone(&Local));
        clock
    }
}

/// Builds a mock clock frozen at `now`.
pub fn clock_at(now: DateTime<Utc>) -> MockClock {
    TestTime::at(now).clock()
}

/// Builds a UTC instant, panicking on impossible dates.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid UTC timestamp")
}

/// Materializes a draft as a stored task without going through a backend.
pub fn task_from(id: u64, draft: TaskDraft, created_at: DateTime<Utc>) -> Task {
    Task::from_draft(TaskId::new(id), draft, created_at)
}
