//! Application services for task orchestration.

mod crud;
mod response;
mod seed;

pub use crud::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
pub use response::TaskResponse;

use seed::SAMPLE_TASKS;
