//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Trimmed task title.
    pub title: String,
    /// Optional trimmed description.
    pub description: Option<String>,
    /// Task status wire name.
    pub status: String,
    /// Creation timestamp in UTC.
    pub created_at: NaiveDateTime,
    /// Latest mutation timestamp in UTC.
    pub updated_at: Option<NaiveDateTime>,
}

/// Insert model for task records; the identifier comes from `SQLite`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Trimmed task title.
    pub title: String,
    /// Optional trimmed description.
    pub description: Option<String>,
    /// Task status wire name.
    pub status: String,
    /// Creation timestamp in UTC.
    pub created_at: NaiveDateTime,
}

/// Changeset written when an existing task is updated.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Trimmed task title.
    pub title: String,
    /// Optional trimmed description; `None` clears the column.
    pub description: Option<String>,
    /// Task status wire name.
    pub status: String,
    /// Latest mutation timestamp in UTC.
    pub updated_at: Option<NaiveDateTime>,
}
