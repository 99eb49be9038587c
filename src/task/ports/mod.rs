//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{
    MAX_DESCRIPTION_CHARS, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
    ensure_description_fits,
};
