use std::path::Path;

use anyhow::Context;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

/// Installs the global tracing subscriber.
///
/// Events go to stderr, or to `log_file` when one is given. Stdout is left to
/// command output. If `log_file` cannot be opened, events go to stderr and a
/// warning names the file. The returned guard flushes the file writer on drop
/// and must live until the process exits.
pub fn init_logging(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let open_error = match log_file.map(open_log_file) {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;

            return Ok(Some(guard));
        }
        Some(Err(e)) => Some(e),
        None => None,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;

    if let Some(e) = open_error {
        warn!("Logging to stderr: {:#}", e);
    }

    Ok(None)
}

/// Opens `log_file` for appending, creating its parent directories.
pub fn open_log_file(log_file: &Path) -> anyhow::Result<RollingFileAppender> {
    let directory = log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_file
        .file_name()
        .with_context(|| format!("log file path has no file name: {log_file:?}"))?;

    std::fs::create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {directory:?}"))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .with_context(|| format!("cannot open log file {log_file:?}"))
}
