//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster, test_runtime};
use chrono::{DateTime, Utc};
use rstest::fixture;
use std::num::NonZeroU32;
use tasklog::task_log::{
    adapters::postgres::{PostgresCompletedTaskRepository, build_pool, ensure_schema},
    domain::{CompletedTask, OwnerId, TaskId},
};
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Drops the per-test database when the test finishes.
pub struct CleanupGuard {
    cluster: PostgresCluster,
    db_name: String,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Err(err) = self.cluster.drop_database(&self.db_name) {
            eprintln!("failed to drop test database {}: {err}", self.db_name);
        }
    }
}

/// Repository over a freshly created, migrated database.
pub struct TaskLogDatabase {
    /// Repository under test.
    pub repo: PostgresCompletedTaskRepository,
    /// Runtime used to drive repository futures.
    pub rt: Runtime,
    _guard: CleanupGuard,
}

/// Creates a migrated database and a repository connected to it.
///
/// # Errors
///
/// Returns an error if database creation, pooling, or migration fails.
pub fn setup_database(cluster: PostgresCluster) -> Result<TaskLogDatabase, BoxError> {
    let db_name = format!("tasklog_test_{}", Uuid::new_v4().simple());
    cluster.create_database(&db_name)?;
    let guard = CleanupGuard {
        cluster,
        db_name: db_name.clone(),
    };
    let pool = build_pool(&cluster.database_url(&db_name), NonZeroU32::MIN)?;
    ensure_schema(&pool)?;
    Ok(TaskLogDatabase {
        repo: PostgresCompletedTaskRepository::new(pool),
        rt: test_runtime()?,
        _guard: guard,
    })
}

/// Fixture providing a migrated database per test.
#[fixture]
pub fn task_log_db(postgres_cluster: PostgresCluster) -> TaskLogDatabase {
    setup_database(postgres_cluster).expect("test database setup")
}

/// Builds a task for `owner` with `Task <id>` content.
pub fn task(owner: i64, id: i64, completed_at: DateTime<Utc>) -> CompletedTask {
    CompletedTask::new(
        TaskId::new(id),
        OwnerId::new(owner).expect("valid owner"),
        completed_at,
        format!("Task {id}"),
    )
    .expect("valid task")
}
