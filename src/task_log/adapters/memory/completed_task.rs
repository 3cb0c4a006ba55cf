//! In-memory repository for completed tasks.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task_log::{
    domain::{CompletedTask, OwnerId, PageQuery, TaskId},
    ports::{CompletedTaskRepository, CompletedTaskRepositoryError, CompletedTaskRepositoryResult},
};

/// Thread-safe in-memory completed-task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompletedTaskRepository {
    state: Arc<RwLock<InMemoryCompletedTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryCompletedTaskState {
    tasks: BTreeMap<(OwnerId, TaskId), CompletedTask>,
}

impl InMemoryCompletedTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl ToString) -> CompletedTaskRepositoryError {
    CompletedTaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl CompletedTaskRepository for InMemoryCompletedTaskRepository {
    async fn find(&self, query: &PageQuery) -> CompletedTaskRepositoryResult<Vec<CompletedTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut matching: Vec<&CompletedTask> = state
            .tasks
            .values()
            .filter(|task| task.owner_id() == query.owner_id())
            .filter(|task| task.completed_at() <= query.max_completed_at())
            .collect();
        matching.sort_by_key(|task| (Reverse(task.completed_at()), task.id()));

        let skip = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(query.limit()).unwrap_or(usize::MAX);
        Ok(matching.into_iter().skip(skip).take(take).cloned().collect())
    }

    async fn insert(&self, task: &CompletedTask) -> CompletedTaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let key = (task.owner_id(), task.id());
        if state.tasks.contains_key(&key) {
            return Err(CompletedTaskRepositoryError::DuplicateTask {
                owner_id: task.owner_id(),
                task_id: task.id(),
            });
        }
        state.tasks.insert(key, task.clone());
        Ok(())
    }

    async fn delete_all(&self, owner_id: OwnerId) -> CompletedTaskRepositoryResult<u64> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let before = state.tasks.len();
        state.tasks.retain(|(owner, _), _| *owner != owner_id);
        let removed = before - state.tasks.len();
        u64::try_from(removed).map_err(CompletedTaskRepositoryError::persistence)
    }
}
