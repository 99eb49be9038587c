//! Task aggregate root and its unsaved counterpart.

use super::{TaskDomainError, TaskId, TaskStatus, TaskTitle, TaskUpdate};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Validated task that has not been persisted yet and carries no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates a new task after validating and trimming its fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::TitleTooLong`] when the title is invalid.
    pub fn create(
        title: impl AsRef<str>,
        description: Option<&str>,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let validated_title = TaskTitle::new(title)?;
        Ok(Self {
            title: validated_title,
            description: description.map(|text| text.trim().to_owned()),
            status,
            created_at: clock.utc(),
        })
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the initial lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp proposed by the domain.
    ///
    /// Stores replace this with their own clock reading on insert.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp, if the task was ever updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp, if the task was ever updated.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Applies a sparse set of changes to this task.
    ///
    /// The replacement title is validated before any field is touched, so a
    /// rejected update leaves the task exactly as it was. On success the
    /// update timestamp is refreshed even when no field value changed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::TitleTooLong`] when a replacement title is invalid.
    pub fn update_details(
        &mut self,
        update: TaskUpdate,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let TaskUpdate {
            title,
            description,
            status,
        } = update;
        let validated_title = title.map(TaskTitle::new).transpose()?;

        if let Some(new_title) = validated_title {
            self.title = new_title;
        }
        description
            .map(|text| text.trim().to_owned())
            .apply_to(&mut self.description);
        if let Some(new_status) = status {
            self.status = new_status;
        }
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        let now = clock.utc();
        self.updated_at = Some(now.max(self.created_at));
    }
}
