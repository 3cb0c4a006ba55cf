//! Completed task record.

use super::{OwnerId, TaskId, TaskLogDomainError};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A task the owner has finished, as shown in the task log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTask {
    #[serde(rename = "task_id")]
    id: TaskId,
    owner_id: OwnerId,
    completed_at: DateTime<Utc>,
    content: String,
}

/// Parameter object for reconstructing a persisted completed task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCompletedTask {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub owner_id: OwnerId,
    /// Persisted completion timestamp.
    pub completed_at: DateTime<Utc>,
    /// Persisted task text.
    pub content: String,
}

impl CompletedTask {
    /// Creates a completed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLogDomainError::EmptyContent`] when `content` is blank.
    pub fn new(
        id: TaskId,
        owner_id: OwnerId,
        completed_at: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Result<Self, TaskLogDomainError> {
        let raw_content = content.into();
        if raw_content.trim().is_empty() {
            return Err(TaskLogDomainError::EmptyContent);
        }
        Ok(Self {
            id,
            owner_id,
            completed_at,
            content: raw_content,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCompletedTask) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            completed_at: data.completed_at,
            content: data.content,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the completion timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Returns the task text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
