//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Longest description, in characters, that repositories accept.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task in ascending identifier order.
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the stored tasks whose status equals `status`, in ascending
    /// identifier order.
    async fn get_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task under a freshly allocated identifier.
    ///
    /// The repository stamps the creation time from its own clock and never
    /// hands out an identifier twice, even after deletion.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DescriptionTooLong`] when the
    /// description exceeds [`MAX_DESCRIPTION_CHARS`].
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Persists title, description and status changes of an existing task.
    ///
    /// The stored creation timestamp is preserved and the update timestamp
    /// is set from the repository clock.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// or [`TaskRepositoryError::DescriptionTooLong`] when the description
    /// exceeds [`MAX_DESCRIPTION_CHARS`].
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Removes a task, returning whether it existed.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The description is longer than the storage column allows.
    #[error("task description cannot exceed {max} characters, got {length}")]
    DescriptionTooLong {
        /// Character count of the rejected description.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Checks a description against [`MAX_DESCRIPTION_CHARS`].
///
/// # Errors
///
/// Returns [`TaskRepositoryError::DescriptionTooLong`] when the description is
/// too long to be stored.
pub fn ensure_description_fits(description: Option<&str>) -> TaskRepositoryResult<()> {
    let length = description.map_or(0, |text| text.chars().count());
    if length > MAX_DESCRIPTION_CHARS {
        return Err(TaskRepositoryError::DescriptionTooLong {
            length,
            max: MAX_DESCRIPTION_CHARS,
        });
    }
    Ok(())
}
