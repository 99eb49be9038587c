//! Adapter implementations of the task repository port.
//!
//! - [`memory`]: process-local storage for tests and ephemeral use
//! - [`sqlite`]: durable storage backed by `SQLite` through Diesel

pub mod memory;
pub mod sqlite;
