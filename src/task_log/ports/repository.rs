//! Repository port for completed-task persistence and page lookup.

use crate::task_log::domain::{CompletedTask, OwnerId, PageQuery, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for completed-task repository operations.
pub type CompletedTaskRepositoryResult<T> = Result<T, CompletedTaskRepositoryError>;

/// Completed-task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletedTaskRepository: Send + Sync {
    /// Returns one page of an owner's tasks completed at or before the query
    /// bound.
    ///
    /// Rows are ordered by `completed_at` descending with ties broken by task
    /// identifier ascending; `offset` rows are skipped and at most `limit`
    /// are returned. An offset past the end yields an empty vector.
    async fn find(&self, query: &PageQuery) -> CompletedTaskRepositoryResult<Vec<CompletedTask>>;

    /// Stores a new completed task.
    ///
    /// # Errors
    ///
    /// Returns [`CompletedTaskRepositoryError::DuplicateTask`] when the owner
    /// already has a task with the same identifier.
    async fn insert(&self, task: &CompletedTask) -> CompletedTaskRepositoryResult<()>;

    /// Removes every task belonging to `owner_id` and returns how many were
    /// removed.
    async fn delete_all(&self, owner_id: OwnerId) -> CompletedTaskRepositoryResult<u64>;
}

/// Errors returned by completed-task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CompletedTaskRepositoryError {
    /// The owner already has a task with this identifier.
    #[error("duplicate task {task_id} for owner {owner_id}")]
    DuplicateTask {
        /// Owner of the conflicting task.
        owner_id: OwnerId,
        /// Conflicting task identifier.
        task_id: TaskId,
    },

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CompletedTaskRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
