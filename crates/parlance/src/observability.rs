//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr, filtered by `-q`/`-v`, `RUST_LOG`, or
//! the configured log level. When a log file or directory is configured,
//! events are also written there as JSON lines through a non-blocking writer.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Explicit log file path.
const LOG_PATH_ENV: &str = "PARLANCE_LOG_PATH";
/// Log directory; the file inside it is named [`LOG_FILE_NAME`].
const LOG_DIR_ENV: &str = "PARLANCE_LOG_DIR";
const LOG_FILE_NAME: &str = "parlance.jsonl";

/// Where JSONL logs should be written, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file path. Takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory to write [`LOG_FILE_NAME`] into.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to the configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            log_dir: std::env::var_os(LOG_DIR_ENV)
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }

    /// The file JSONL logs go to.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME)))
    }
}

/// Build the stderr filter.
///
/// `-q` wins over `-v`; `-v` wins over `RUST_LOG`; `RUST_LOG` wins over the
/// configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    let directive = match (quiet, verbose) {
        (true, _) => "error".to_string(),
        (false, 0) => {
            return EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level));
        }
        (false, 1) => "debug".to_string(),
        (false, _) => "trace".to_string(),
    };
    EnvFilter::new(directive)
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit so buffered file output is flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    let (file_layer, guard) = match config.log_file() {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .map_or_else(|| LOG_FILE_NAME.into(), ToOwned::to_owned);
            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_beats_log_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/tmp/explicit.log")),
            log_dir: Some(PathBuf::from("/tmp/logs")),
        };
        assert_eq!(config.log_file(), Some(PathBuf::from("/tmp/explicit.log")));
    }

    #[test]
    fn log_dir_gets_default_file_name() {
        let config = ObservabilityConfig {
            log_path: None,
            log_dir: Some(PathBuf::from("/tmp/logs")),
        };
        assert_eq!(
            config.log_file(),
            Some(PathBuf::from("/tmp/logs").join(LOG_FILE_NAME))
        );
    }

    #[test]
    fn no_file_by_default() {
        assert_eq!(ObservabilityConfig::default().log_file(), None);
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(env_filter(true, 2, "info").to_string(), "error");
        assert_eq!(env_filter(false, 1, "info").to_string(), "debug");
        assert_eq!(env_filter(false, 3, "info").to_string(), "trace");
    }
}
