//! Shared fixtures for integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;
use tasklog::task_log::{
    adapters::memory::InMemoryCompletedTaskRepository, ports::FixedUserProvider,
    services::TaskLogService,
};

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// In-memory service type shared by integration tests.
pub type InMemoryService =
    TaskLogService<InMemoryCompletedTaskRepository, FixedUserProvider, FixedClock>;

/// 2026-03-14 at the given time of day, UTC.
///
/// # Panics
///
/// Panics when the time of day is out of range.
#[must_use]
pub fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, hour, minute, second)
        .single()
        .expect("valid fixed timestamp")
}

/// Builds a service for the default owner over `repository` with a clock
/// frozen at `now`.
#[must_use]
pub fn service_over(
    repository: Arc<InMemoryCompletedTaskRepository>,
    now: DateTime<Utc>,
) -> InMemoryService {
    TaskLogService::new(
        repository,
        Arc::new(FixedUserProvider::default()),
        Arc::new(FixedClock(now)),
    )
}

/// Builds a service over empty in-memory storage.
#[must_use]
pub fn in_memory_service(now: DateTime<Utc>) -> InMemoryService {
    service_over(Arc::new(InMemoryCompletedTaskRepository::new()), now)
}
