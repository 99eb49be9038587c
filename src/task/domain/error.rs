//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title is required")]
    EmptyTitle,

    /// The task title exceeds the maximum length after trimming.
    #[error("task title cannot exceed {max} characters, got {length}")]
    TitleTooLong {
        /// Character count of the trimmed title.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },
}

/// Error returned while parsing task statuses from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
