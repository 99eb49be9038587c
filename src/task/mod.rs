//! Task tracking for Taskboard.
//!
//! Callers create, read, update, delete and filter tasks identified by a
//! title, an optional description, a lifecycle status and timestamps. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
