//! Diesel row models for completed-task persistence.

use super::schema::completed_tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for completed tasks.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = completed_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CompletedTaskRow {
    /// Owning user identifier.
    pub owner_id: i64,
    /// Task number.
    pub task_id: i64,
    /// Completion timestamp.
    pub completed_at: DateTime<Utc>,
    /// Task text.
    pub content: String,
}

/// Insert model for completed tasks.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = completed_tasks)]
pub struct NewCompletedTaskRow {
    /// Owning user identifier.
    pub owner_id: i64,
    /// Task number.
    pub task_id: i64,
    /// Completion timestamp.
    pub completed_at: DateTime<Utc>,
    /// Task text.
    pub content: String,
}
