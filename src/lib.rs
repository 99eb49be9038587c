//! Taskboard: task tracking core.
//!
//! This crate provides the task domain model, its persistence contract and
//! the orchestration service that callers such as an HTTP layer or the
//! bundled `taskboard` command line tool drive.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `SQLite`)
//!
//! # Modules
//!
//! - [`task`]: Task entity, repository port, adapters and service
//! - [`config`]: Runtime configuration for the storage backend and logging
//! - [`telemetry`]: Tracing subscriber bootstrap

pub mod config;
pub mod task;
pub mod telemetry;
