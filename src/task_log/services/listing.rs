//! Service layer for resolving and listing task log pages.

use crate::task_log::{
    domain::{PaginationCursor, RawCursorParams, TaskLogDomainError, TaskLogPage},
    ports::{CompletedTaskRepository, CompletedTaskRepositoryError, CurrentUserProvider},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for task log operations.
#[derive(Debug, Error)]
pub enum TaskLogServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskLogDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CompletedTaskRepositoryError),
}

/// Result type for task log service operations.
pub type TaskLogServiceResult<T> = Result<T, TaskLogServiceError>;

/// Task log orchestration service.
pub struct TaskLogService<R, U, C>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    pub(super) repository: Arc<R>,
    pub(super) users: Arc<U>,
    pub(super) clock: Arc<C>,
}

impl<R, U, C> Clone for TaskLogService<R, U, C>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            users: Arc::clone(&self.users),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, U, C> TaskLogService<R, U, C>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    /// Creates a new task log service.
    #[must_use]
    pub const fn new(repository: Arc<R>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            repository,
            users,
            clock,
        }
    }

    /// Resolves the cursor carried by `params` and loads the page it selects.
    ///
    /// Missing or malformed parameters never fail the request: the cursor
    /// falls back to the first page bounded by the current time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLogServiceError::Repository`] when the page lookup fails.
    pub async fn list_page(&self, params: &RawCursorParams) -> TaskLogServiceResult<TaskLogPage> {
        let cursor = PaginationCursor::resolve(params, &*self.clock);
        let owner_id = self.users.current_user_id();
        let tasks = self.repository.find(&cursor.page_query(owner_id)).await?;
        debug!(
            owner_id = %owner_id,
            requested_page = ?params.page,
            requested_completed_date = ?params.completed_date,
            page = %cursor.page(),
            watermark = cursor.watermark().epoch_seconds(),
            returned = tasks.len(),
            "loaded task log page"
        );
        Ok(TaskLogPage::new(cursor, tasks))
    }
}
