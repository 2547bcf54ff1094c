//! Diagnostic logging
//!
//! Logs go to `<base>/logs/enroll.log` through a non-blocking writer so the
//! terminal UI is never drawn over. `RUST_LOG` takes precedence over the
//! filter from the settings file.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::EnrollPaths;
use crate::error::{EnrollError, EnrollResult};

/// Build the filter: `RUST_LOG` if set and valid, else `default_filter`
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the writer thread.
pub fn init(paths: &EnrollPaths, default_filter: &str) -> EnrollResult<WorkerGuard> {
    paths.ensure_directories()?;

    let appender = tracing_appender::rolling::never(paths.log_dir(), paths.log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_filter))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| EnrollError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}
