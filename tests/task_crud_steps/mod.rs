//! Step definitions for task CRUD behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
