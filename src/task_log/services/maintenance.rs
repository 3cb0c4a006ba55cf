//! Seeding, random insertion, and reset of the current user's task log.

use super::listing::{TaskLogService, TaskLogServiceResult};
use crate::task_log::{
    domain::{CompletedTask, random_task, scenario_tasks},
    ports::{CompletedTaskRepository, CompletedTaskRepositoryError, CurrentUserProvider},
};
use mockable::Clock;
use tracing::info;

impl<R, U, C> TaskLogService<R, U, C>
where
    R: CompletedTaskRepository,
    U: CurrentUserProvider,
    C: Clock + Send + Sync,
{
    /// Inserts the nine demonstration tasks for the current user, anchored at
    /// midnight UTC of today.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLogServiceError`] when a task already exists or
    /// the repository rejects persistence. Tasks inserted before the failure
    /// are kept.
    pub async fn seed(&self) -> TaskLogServiceResult<Vec<CompletedTask>> {
        let owner_id = self.users.current_user_id();
        let tasks = scenario_tasks(owner_id, self.clock.utc())?;
        for task in &tasks {
            self.repository.insert(task).await?;
        }
        info!(owner_id = %owner_id, inserted = tasks.len(), "seeded task log");
        Ok(tasks)
    }

    /// Inserts whichever demonstration tasks the current user is missing and
    /// returns how many were added. Running it again is a no-op, so it is
    /// safe to call on every start-up.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLogServiceError`] when the repository rejects
    /// persistence for any reason other than an existing task.
    pub async fn ensure_seeded(&self) -> TaskLogServiceResult<usize> {
        let owner_id = self.users.current_user_id();
        let tasks = scenario_tasks(owner_id, self.clock.utc())?;
        let mut inserted = 0_usize;
        for task in &tasks {
            match self.repository.insert(task).await {
                Ok(()) => inserted = inserted.saturating_add(1),
                Err(CompletedTaskRepositoryError::DuplicateTask { .. }) => {}
                Err(err) => return Err(err.into()),
            }
        }
        if inserted == 0 {
            info!(owner_id = %owner_id, "task log already seeded");
        } else {
            info!(owner_id = %owner_id, inserted, "seeded missing demonstration tasks");
        }
        Ok(inserted)
    }

    /// Inserts one task with a random identifier completed within the last
    /// day.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLogServiceError`] when the random identifier is
    /// already taken or the repository rejects persistence.
    pub async fn add_random(&self) -> TaskLogServiceResult<CompletedTask> {
        let owner_id = self.users.current_user_id();
        let task = random_task(owner_id, self.clock.utc(), &mut rand::thread_rng())?;
        self.repository.insert(&task).await?;
        info!(owner_id = %owner_id, task_id = %task.id(), "added random task");
        Ok(task)
    }

    /// Deletes every task of the current user and returns how many were
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLogServiceError::Repository`] when deletion fails.
    pub async fn reset(&self) -> TaskLogServiceResult<u64> {
        let owner_id = self.users.current_user_id();
        let removed = self.repository.delete_all(owner_id).await?;
        info!(owner_id = %owner_id, removed, "reset task log");
        Ok(removed)
    }
}
