//! Generators for demonstration task rows.

use super::{CompletedTask, OwnerId, TaskId, TaskLogDomainError};
use chrono::{DateTime, NaiveTime, TimeDelta, Utc};
use rand::Rng;

/// Hours after midnight and the task numbers completed at that hour.
const SCENARIO_LAYOUT: [(i64, [i64; 3]); 3] = [
    (2, [1, 11, 101]),
    (1, [2, 12, 102]),
    (0, [3, 13, 103]),
];

const SECONDS_PER_DAY: i64 = 86_400;

/// Builds the nine demonstration tasks anchored at midnight UTC of `now`'s
/// day: tasks 1, 11, and 101 at 02:00, tasks 2, 12, and 102 at 01:00, and
/// tasks 3, 13, and 103 at 00:00.
///
/// # Errors
///
/// Returns [`TaskLogDomainError`] if a generated task fails validation.
pub fn scenario_tasks(
    owner_id: OwnerId,
    now: DateTime<Utc>,
) -> Result<Vec<CompletedTask>, TaskLogDomainError> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    SCENARIO_LAYOUT
        .iter()
        .flat_map(|(hour, ids)| {
            let completed_at = midnight + TimeDelta::hours(*hour);
            ids.iter().map(move |id| (TaskId::new(*id), completed_at))
        })
        .map(|(id, completed_at)| {
            CompletedTask::new(id, owner_id, completed_at, format!("Task {id}"))
        })
        .collect()
}

/// Builds one task with a random positive 31-bit identifier, completed a
/// random number of seconds (less than a day) before `now`.
///
/// # Errors
///
/// Returns [`TaskLogDomainError`] if the generated task fails validation.
pub fn random_task<R>(
    owner_id: OwnerId,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<CompletedTask, TaskLogDomainError>
where
    R: Rng + ?Sized,
{
    let id = TaskId::new(i64::from(rng.gen_range(1..=i32::MAX)));
    let age = TimeDelta::seconds(rng.gen_range(0..SECONDS_PER_DAY));
    CompletedTask::new(id, owner_id, now - age, format!("Random task {id}"))
}
