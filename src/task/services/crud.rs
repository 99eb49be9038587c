//! Service layer for creating, reading, updating and deleting tasks.

use super::{SAMPLE_TASKS, TaskResponse};
use crate::task::{
    domain::{NewTask, TaskDomainError, TaskId, TaskStatus, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    title: String,
    #[serde(default)]
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the raw, untrimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw, untrimmed description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// The task targeted by an update does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Validates input through the domain, delegates persistence to the
/// injected repository, and returns [`TaskResponse`] values.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_all(&self) -> TaskServiceResult<Vec<TaskResponse>> {
        let tasks = self.repository.get_all().await?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks.iter().map(TaskResponse::from).collect())
    }

    /// Lists the tasks with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_by_status(
        &self,
        status: TaskStatus,
    ) -> TaskServiceResult<Vec<TaskResponse>> {
        let tasks = self.repository.get_by_status(status).await?;
        debug!(%status, count = tasks.len(), "listed tasks by status");
        Ok(tasks.iter().map(TaskResponse::from).collect())
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_by_id(&self, id: TaskId) -> TaskServiceResult<Option<TaskResponse>> {
        let task = self.repository.get_by_id(id).await?;
        debug!(task_id = %id, found = task.is_some(), "looked up task");
        Ok(task.as_ref().map(TaskResponse::from))
    }

    /// Creates a task in the [`TaskStatus::Todo`] state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is invalid, in
    /// which case nothing is stored, or [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<TaskResponse> {
        let new_task = NewTask::create(
            &request.title,
            request.description.as_deref(),
            TaskStatus::Todo,
            &*self.clock,
        )
        .inspect_err(|err| warn!(error = %err, "rejected task creation"))?;

        let created = self.repository.create(&new_task).await?;
        info!(task_id = %created.id(), "created task");
        Ok(TaskResponse::from(created))
    }

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Validation`] when a replacement title is invalid
    /// (the store is left untouched), or [`TaskServiceError::Repository`] when
    /// persistence fails.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: TaskId, update: TaskUpdate) -> TaskServiceResult<TaskResponse> {
        let mut task = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;

        task.update_details(update, &*self.clock)
            .inspect_err(|err| warn!(error = %err, "rejected task update"))?;

        let updated = self.repository.update(&task).await?;
        info!(status = %updated.status(), "updated task");
        Ok(TaskResponse::from(updated))
    }

    /// Deletes a task, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<bool> {
        let removed = self.repository.delete(id).await?;
        info!(removed, "deleted task");
        Ok(removed)
    }

    /// Stores the built-in sample tasks when the repository is empty.
    ///
    /// Returns the number of tasks inserted, which is zero when any task
    /// already exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn seed_sample_data(&self) -> TaskServiceResult<usize> {
        if !self.repository.get_all().await?.is_empty() {
            debug!("store already populated, skipping sample data");
            return Ok(0);
        }

        let mut inserted = 0;
        for sample in &SAMPLE_TASKS {
            let new_task = NewTask::create(
                sample.title,
                Some(sample.description),
                sample.status,
                &*self.clock,
            )?;
            self.repository.create(&new_task).await?;
            inserted += 1;
        }
        info!(count = inserted, "seeded sample tasks");
        Ok(inserted)
    }
}
