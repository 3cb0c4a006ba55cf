//! Connection pool construction and schema bootstrap.

use super::repository::TaskLogPgPool;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::num::NonZeroU32;

/// SQL creating the completed-task table and its listing index.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_completed_tasks/up.sql");

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`PoolError`] when the initial connections cannot be established.
pub fn build_pool(database_url: &str, max_size: NonZeroU32) -> Result<TaskLogPgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().max_size(max_size.get()).build(manager)
}

/// Creates the completed-task table when it does not exist yet.
///
/// This is a blocking operation that should be called from `spawn_blocking`
/// or a synchronous context.
///
/// # Errors
///
/// Returns an error when no connection is available or the DDL fails.
pub fn ensure_schema(pool: &TaskLogPgPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut connection = pool.get()?;
    connection.batch_execute(CREATE_SCHEMA_SQL)?;
    Ok(())
}
