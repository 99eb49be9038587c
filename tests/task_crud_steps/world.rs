//! Shared world state for task CRUD BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskStatus},
    services::{TaskResponse, TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task CRUD behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub last_task_id: Option<TaskId>,
    pub deleted_id: Option<TaskId>,
    pub last_create_result: Option<Result<TaskResponse, TaskServiceError>>,
    pub last_update_result: Option<Result<TaskResponse, TaskServiceError>>,
    pub delete_results: Vec<bool>,
    pub last_listing: Option<Vec<TaskResponse>>,
}

impl TaskWorld {
    /// Creates a world backed by an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            last_task_id: None,
            deleted_id: None,
            last_create_result: None,
            last_update_result: None,
            delete_results: Vec::new(),
            last_listing: None,
        }
    }

    /// Returns the identifier of the most recently created task.
    pub fn require_last_task_id(&self) -> Result<TaskId, eyre::Report> {
        self.last_task_id
            .ok_or_else(|| eyre::eyre!("no task has been created in this scenario"))
    }

    /// Returns the successful result of the last create step.
    pub fn require_created(&self) -> Result<&TaskResponse, eyre::Report> {
        let result = self
            .last_create_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
        result
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected task creation failure: {err}"))
    }

    /// Returns the successful result of the last update step.
    pub fn require_updated(&self) -> Result<&TaskResponse, eyre::Report> {
        let result = self
            .last_update_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing update result in scenario world"))?;
        result
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected task update failure: {err}"))
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Parses a status name written in a step.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    raw.parse::<TaskStatus>()
        .map_err(|err| eyre::eyre!("invalid status in step: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
