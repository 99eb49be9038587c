//! Domain model for task tracking.
//!
//! Tasks are created through the validated [`NewTask::create`] factory and
//! mutated only through [`Task::update_details`]. Infrastructure concerns,
//! including identifier allocation, stay outside of the domain boundary.

mod error;
mod ids;
mod status;
mod task;
mod update;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
pub use update::{FieldUpdate, TaskUpdate};
