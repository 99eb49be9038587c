//! Tracing subscriber bootstrap.

use thiserror::Error;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// Rejected directive.
        directive: String,
        /// Parser failure.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Installs a formatted subscriber that writes to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter` when it is set. An
/// unparseable `RUST_LOG` falls back to `default_filter` and is reported as
/// a warning once the subscriber is installed.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `default_filter` is not a
/// valid directive, or [`TelemetryError::AlreadyInitialized`] when a global
/// subscriber already exists.
pub fn init_tracing(default_filter: &str) -> Result<(), TelemetryError> {
    let (filter, ignored_env) = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directive) => match build_filter(&directive) {
            Ok(filter) => (filter, None),
            Err(err) => (build_filter(default_filter)?, Some(err)),
        },
        Err(_) => (build_filter(default_filter)?, None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInitialized(err.to_string()))?;

    if let Some(reason) = ignored_env {
        warn!(
            variable = EnvFilter::DEFAULT_ENV,
            error = %reason,
            fallback = default_filter,
            "ignoring invalid log filter"
        );
    }
    Ok(())
}

fn build_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::InvalidFilter {
        directive: directive.to_owned(),
        source,
    })
}
