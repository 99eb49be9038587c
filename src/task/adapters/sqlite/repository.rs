//! `SQLite` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::{CREATE_TASKS_TABLE, tasks},
};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult, ensure_description_fits},
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::result::Error as DieselError;
use diesel::sqlite::SqliteConnection;
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// `SQLite` connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

const IN_MEMORY_DATABASE: &str = ":memory:";

/// `SQLite`-backed task repository.
#[derive(Clone)]
pub struct SqliteTaskRepository {
    pool: TaskSqlitePool,
    clock: Arc<dyn Clock + Send + Sync>,
}

/// Applies per-connection pragmas when the pool hands out a connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute("PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

impl SqliteTaskRepository {
    /// Opens (creating if needed) the database at `database_url` with up to
    /// `pool_size` pooled connections and ensures the task table exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the pool cannot be
    /// built or the table cannot be created.
    pub fn open(database_url: &str, pool_size: u32) -> TaskRepositoryResult<Self> {
        let pool = Pool::builder()
            .max_size(pool_size.max(1))
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(ConnectionManager::<SqliteConnection>::new(database_url))
            .map_err(TaskRepositoryError::persistence)?;
        debug!(database_url, pool_size, "opened sqlite task store");
        Self::from_pool(pool)
    }

    /// Opens a private in-memory database.
    ///
    /// Every `SQLite` connection to `:memory:` sees its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the database cannot
    /// be initialized.
    pub fn in_memory() -> TaskRepositoryResult<Self> {
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(ConnectionManager::<SqliteConnection>::new(IN_MEMORY_DATABASE))
            .map_err(TaskRepositoryError::persistence)?;
        Self::from_pool(pool)
    }

    /// Wraps an existing pool and ensures the task table exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the table cannot be
    /// created.
    pub fn from_pool(pool: TaskSqlitePool) -> TaskRepositoryResult<Self> {
        let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
        connection
            .batch_execute(CREATE_TASKS_TABLE)
            .map_err(TaskRepositoryError::persistence)?;
        Ok(Self {
            pool,
            clock: Arc::new(DefaultClock),
        })
    }

    /// Replaces the clock used to stamp creation and update times.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

impl fmt::Debug for SqliteTaskRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteTaskRepository")
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn get_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::status.eq(status.as_str()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        ensure_description_fits(task.description())?;
        let new_row = NewTaskRow {
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status().as_str().to_owned(),
            created_at: self.clock.utc().naive_utc(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        ensure_description_fits(task.description())?;
        let task_id = task.id();
        let now = self.clock.utc().naive_utc();
        let title = task.title().as_str().to_owned();
        let description = task.description().map(str::to_owned);
        let status = task.status().as_str().to_owned();

        self.run_blocking(move |connection| {
            let row = connection
                .immediate_transaction::<_, DieselError, _>(|transaction| {
                    let Some(created_at) = tasks::table
                        .find(task_id.value())
                        .select(tasks::created_at)
                        .first::<NaiveDateTime>(transaction)
                        .optional()?
                    else {
                        return Ok(None);
                    };

                    let changeset = TaskChangeset {
                        title,
                        description,
                        status,
                        updated_at: Some(now.max(created_at)),
                    };
                    diesel::update(tasks::table.find(task_id.value()))
                        .set(&changeset)
                        .returning(TaskRow::as_returning())
                        .get_result::<TaskRow>(transaction)
                        .map(Some)
                })
                .map_err(TaskRepositoryError::persistence)?;

            row.map(row_to_task)
                .transpose()?
                .ok_or(TaskRepositoryError::NotFound(task_id))
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        description,
        status: persisted_status,
        created_at,
        updated_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        status,
        created_at: created_at.and_utc(),
        updated_at: updated_at.map(|timestamp| timestamp.and_utc()),
    }))
}
