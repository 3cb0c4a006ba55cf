//! `PostgreSQL` repository implementation for completed-task storage.

use super::{
    models::{CompletedTaskRow, NewCompletedTaskRow},
    schema::completed_tasks,
};
use crate::task_log::{
    domain::{CompletedTask, OwnerId, PageQuery, PersistedCompletedTask, TaskId},
    ports::{CompletedTaskRepository, CompletedTaskRepositoryError, CompletedTaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task log adapters.
pub type TaskLogPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed completed-task repository.
#[derive(Debug, Clone)]
pub struct PostgresCompletedTaskRepository {
    pool: TaskLogPgPool,
}

impl PostgresCompletedTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskLogPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CompletedTaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CompletedTaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(CompletedTaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CompletedTaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl CompletedTaskRepository for PostgresCompletedTaskRepository {
    async fn find(&self, query: &PageQuery) -> CompletedTaskRepositoryResult<Vec<CompletedTask>> {
        let owner_id = query.owner_id().value();
        let max_completed_at = query.max_completed_at();
        let limit = i64::from(query.limit());
        let offset =
            i64::try_from(query.offset()).map_err(CompletedTaskRepositoryError::persistence)?;

        self.run_blocking(move |connection| {
            let rows = completed_tasks::table
                .filter(completed_tasks::owner_id.eq(owner_id))
                .filter(completed_tasks::completed_at.le(max_completed_at))
                .order((
                    completed_tasks::completed_at.desc(),
                    completed_tasks::task_id.asc(),
                ))
                .limit(limit)
                .offset(offset)
                .select(CompletedTaskRow::as_select())
                .load::<CompletedTaskRow>(connection)
                .map_err(CompletedTaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn insert(&self, task: &CompletedTask) -> CompletedTaskRepositoryResult<()> {
        let owner_id = task.owner_id();
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(completed_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CompletedTaskRepositoryError::DuplicateTask { owner_id, task_id }
                    }
                    _ => CompletedTaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn delete_all(&self, owner_id: OwnerId) -> CompletedTaskRepositoryResult<u64> {
        let owner_value = owner_id.value();
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(
                completed_tasks::table.filter(completed_tasks::owner_id.eq(owner_value)),
            )
            .execute(connection)
            .map_err(CompletedTaskRepositoryError::persistence)?;
            u64::try_from(deleted).map_err(CompletedTaskRepositoryError::persistence)
        })
        .await
    }
}

fn to_new_row(task: &CompletedTask) -> NewCompletedTaskRow {
    NewCompletedTaskRow {
        owner_id: task.owner_id().value(),
        task_id: task.id().value(),
        completed_at: task.completed_at(),
        content: task.content().to_owned(),
    }
}

fn row_to_task(row: CompletedTaskRow) -> CompletedTaskRepositoryResult<CompletedTask> {
    let CompletedTaskRow {
        owner_id,
        task_id,
        completed_at,
        content,
    } = row;

    let parsed_owner =
        OwnerId::new(owner_id).map_err(CompletedTaskRepositoryError::invalid_persisted_data)?;
    let data = PersistedCompletedTask {
        id: TaskId::new(task_id),
        owner_id: parsed_owner,
        completed_at,
        content,
    };
    Ok(CompletedTask::from_persisted(data))
}
