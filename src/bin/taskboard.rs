//! Command line front end for the Taskboard task service.
//!
//! Usage:
//!
//! ```text
//! taskboard [--database <URL>] [--pool-size <N>] [--seed] [--log <FILTER>] <COMMAND>
//! ```
//!
//! Commands are `list`, `get`, `create`, `update` and `delete`. Results are
//! printed to stdout as pretty JSON; diagnostics go to stderr. Every global
//! option can also be supplied through its `TASKBOARD_*` environment
//! variable. For example:
//!
//! ```text
//! taskboard --database sqlite://tasks.db create "Buy milk" --description urgent
//! taskboard --database sqlite://tasks.db update 1 --status Done
//! taskboard --database sqlite://tasks.db list --status Todo
//! ```

use clap::{Args, Parser, Subcommand};
use mockable::DefaultClock;
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;
use taskboard::config::{
    ConfigError, DEFAULT_LOG_FILTER, DEFAULT_POOL_SIZE, StorageConfig, TaskboardConfig,
};
use taskboard::task::{
    adapters::{memory::InMemoryTaskRepository, sqlite::SqliteTaskRepository},
    domain::{TaskId, TaskStatus, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, TaskService, TaskServiceError},
};
use taskboard::telemetry::{TelemetryError, init_tracing};
use thiserror::Error;
use tracing::debug;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to open task store: {0}")]
    Store(#[from] TaskRepositoryError),
    #[error(transparent)]
    Service(#[from] TaskServiceError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Create, list, update and delete tasks")]
struct Cli {
    /// Storage location: `memory`, `sqlite://<path>` or a database file path.
    #[arg(long, env = "TASKBOARD_DATABASE", default_value = "memory")]
    database: StorageConfig,

    /// Maximum pooled connections for `SQLite` storage.
    #[arg(long, env = "TASKBOARD_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pool_size: u32,

    /// Insert the sample tasks when the store is empty.
    #[arg(long, env = "TASKBOARD_SEED")]
    seed: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[arg(long, env = "TASKBOARD_LOG", default_value = DEFAULT_LOG_FILTER)]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List tasks, optionally filtered by status.
    List {
        /// Only list tasks with this status (`Todo`, `InProgress`, `Done`).
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    /// Show one task; prints `null` when it does not exist.
    Get {
        /// Task identifier.
        id: i64,
    },
    /// Create a task in the `Todo` state.
    Create {
        /// Task title.
        title: String,
        /// Task description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Change the title, description or status of a task.
    Update(UpdateArgs),
    /// Delete a task; prints whether it existed.
    Delete {
        /// Task identifier.
        id: i64,
    },
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Task identifier.
    id: i64,
    /// Replacement title.
    #[arg(long)]
    title: Option<String>,
    /// Replacement description.
    #[arg(long, conflicts_with = "clear_description")]
    description: Option<String>,
    /// Remove the description.
    #[arg(long)]
    clear_description: bool,
    /// Replacement status.
    #[arg(long)]
    status: Option<TaskStatus>,
}

impl UpdateArgs {
    fn into_update(self) -> TaskUpdate {
        let mut update = TaskUpdate::new();
        if let Some(title) = self.title {
            update = update.with_title(title);
        }
        if let Some(description) = self.description {
            update = update.with_description(description);
        } else if self.clear_description {
            update = update.clearing_description();
        }
        if let Some(status) = self.status {
            update = update.with_status(status);
        }
        update
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    run(cli).await.map_err(|err| err.to_string().into())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = TaskboardConfig::default()
        .with_storage(cli.database)
        .with_pool_size(cli.pool_size)?
        .with_seed_sample_data(cli.seed)
        .with_log_filter(cli.log);
    init_tracing(&config.log_filter)?;
    debug!(storage = %config.storage, "starting taskboard");

    let output = match &config.storage {
        StorageConfig::Memory => {
            run_with(InMemoryTaskRepository::new(), &config, cli.command).await?
        }
        StorageConfig::Sqlite { path } => {
            let repository = SqliteTaskRepository::open(&path.to_string_lossy(), config.pool_size)?;
            run_with(repository, &config, cli.command).await?
        }
    };

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &output)?;
    writeln!(stdout)?;
    Ok(())
}

async fn run_with<R>(
    repository: R,
    config: &TaskboardConfig,
    command: Command,
) -> Result<Value, CliError>
where
    R: TaskRepository,
{
    let service = TaskService::new(Arc::new(repository), Arc::new(DefaultClock));
    if config.seed_sample_data {
        service.seed_sample_data().await?;
    }
    execute(&service, command).await
}

async fn execute<R>(
    service: &TaskService<R, DefaultClock>,
    command: Command,
) -> Result<Value, CliError>
where
    R: TaskRepository,
{
    let output = match command {
        Command::List {
            status: Some(status),
        } => serde_json::to_value(service.list_by_status(status).await?)?,
        Command::List { status: None } => serde_json::to_value(service.list_all().await?)?,
        Command::Get { id } => serde_json::to_value(service.get_by_id(TaskId::new(id)).await?)?,
        Command::Create { title, description } => {
            let mut request = CreateTaskRequest::new(title);
            if let Some(text) = description {
                request = request.with_description(text);
            }
            serde_json::to_value(service.create(request).await?)?
        }
        Command::Update(args) => {
            let id = TaskId::new(args.id);
            serde_json::to_value(service.update(id, args.into_update()).await?)?
        }
        Command::Delete { id } => Value::Bool(service.delete(TaskId::new(id)).await?),
    };
    Ok(output)
}
