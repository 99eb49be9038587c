//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> BigInt,
        /// Trimmed task title.
        title -> Text,
        /// Optional trimmed description.
        description -> Nullable<Text>,
        /// Task status wire name.
        status -> Text,
        /// Creation timestamp in UTC.
        created_at -> Timestamp,
        /// Latest mutation timestamp in UTC.
        updated_at -> Nullable<Timestamp>,
    }
}

/// Creates the task table when it does not exist yet.
///
/// `AUTOINCREMENT` keeps `SQLite` from recycling the identifiers of deleted
/// rows. The title check measures bytes because `length()` stops at the
/// first NUL character.
pub(super) const CREATE_TASKS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    title TEXT NOT NULL CHECK (length(CAST(title AS BLOB)) > 0),
    description TEXT CHECK (description IS NULL OR length(description) <= 1000),
    status TEXT NOT NULL CHECK (status IN ('Todo', 'InProgress', 'Done')),
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks (status);";
