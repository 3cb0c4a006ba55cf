//! `PostgreSQL` adapters for completed-task persistence.

mod models;
mod pool;
mod repository;
mod schema;

pub use pool::{CREATE_SCHEMA_SQL, build_pool, ensure_schema};
pub use repository::{PostgresCompletedTaskRepository, TaskLogPgPool};
