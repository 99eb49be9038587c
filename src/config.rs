//! Runtime configuration for Taskboard hosts.
//!
//! Hosts such as the `taskboard` binary translate their own inputs (command
//! line flags, environment variables) into a [`TaskboardConfig`].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Default number of pooled `SQLite` connections.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

const SQLITE_SCHEME: &str = "sqlite://";

/// Errors raised while reading configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The storage location was empty.
    #[error("storage location must not be empty")]
    EmptyStorage,

    /// The pool size was zero.
    #[error("connection pool size must be at least 1")]
    ZeroPoolSize,
}

/// Where tasks are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StorageConfig {
    /// Process-local storage that disappears on exit.
    #[default]
    Memory,
    /// `SQLite` database file.
    Sqlite {
        /// Path of the database file.
        path: PathBuf,
    },
}

impl StorageConfig {
    /// Parses a storage location.
    ///
    /// `memory` and `:memory:` select in-memory storage; `sqlite://<path>`
    /// or a bare path select a `SQLite` database file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorage`] when the value (or the path after
    /// the scheme) is blank.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("memory") || trimmed == ":memory:" {
            return Ok(Self::Memory);
        }

        let path = trimmed.strip_prefix(SQLITE_SCHEME).unwrap_or(trimmed);
        if path.is_empty() {
            return Err(ConfigError::EmptyStorage);
        }
        Ok(Self::Sqlite {
            path: PathBuf::from(path),
        })
    }
}

impl FromStr for StorageConfig {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Sqlite { path } => write!(f, "{SQLITE_SCHEME}{}", path.display()),
        }
    }
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskboardConfig {
    /// Storage backend.
    pub storage: StorageConfig,
    /// Maximum pooled connections for file-backed storage.
    pub pool_size: u32,
    /// Whether to insert the sample tasks into an empty store at startup.
    pub seed_sample_data: bool,
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for TaskboardConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::Memory,
            pool_size: DEFAULT_POOL_SIZE,
            seed_sample_data: false,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl TaskboardConfig {
    /// Sets the storage backend.
    #[must_use]
    pub fn with_storage(mut self, storage: StorageConfig) -> Self {
        self.storage = storage;
        self
    }

    /// Sets the connection pool size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPoolSize`] when `pool_size` is zero.
    pub fn with_pool_size(mut self, pool_size: u32) -> Result<Self, ConfigError> {
        if pool_size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }
        self.pool_size = pool_size;
        Ok(self)
    }

    /// Enables or disables sample data seeding.
    #[must_use]
    pub fn with_seed_sample_data(mut self, seed_sample_data: bool) -> Self {
        self.seed_sample_data = seed_sample_data;
        self
    }

    /// Sets the tracing filter directive.
    #[must_use]
    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, StorageConfig, TaskboardConfig};
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case("memory")]
    #[case("MEMORY")]
    #[case(":memory:")]
    #[case("  memory  ")]
    fn parse_selects_in_memory_storage(#[case] value: &str) {
        assert_eq!(StorageConfig::parse(value), Ok(StorageConfig::Memory));
    }

    #[rstest]
    #[case("sqlite://tasks.db", "tasks.db")]
    #[case("sqlite:///var/lib/taskboard/tasks.db", "/var/lib/taskboard/tasks.db")]
    #[case("data/tasks.db", "data/tasks.db")]
    fn parse_selects_sqlite_storage(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(
            StorageConfig::parse(value),
            Ok(StorageConfig::Sqlite {
                path: PathBuf::from(expected)
            })
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("sqlite://")]
    fn parse_rejects_empty_locations(#[case] value: &str) {
        assert_eq!(StorageConfig::parse(value), Err(ConfigError::EmptyStorage));
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        let storage = StorageConfig::Sqlite {
            path: PathBuf::from("tasks.db"),
        };
        assert_eq!(storage.to_string(), "sqlite://tasks.db");
        assert_eq!(StorageConfig::parse(&storage.to_string()), Ok(storage));
    }

    #[rstest]
    fn default_config_is_ephemeral_and_unseeded() {
        let config = TaskboardConfig::default();
        assert_eq!(config.storage, StorageConfig::Memory);
        assert!(!config.seed_sample_data);
        assert_eq!(config.log_filter, "info");
    }

    #[rstest]
    fn with_pool_size_rejects_zero() {
        assert_eq!(
            TaskboardConfig::default().with_pool_size(0),
            Err(ConfigError::ZeroPoolSize)
        );
    }
}
