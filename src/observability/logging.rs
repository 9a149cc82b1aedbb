//! Explicitly constructed logging handle.
//!
//! [`Logging`] owns a `tracing` dispatcher with a console layer on stderr and
//! an optional append-only file layer. Nothing is registered process-wide:
//! the caller installs the handle for as long as it needs it with
//! [`Logging::install`], and a worker thread can be handed the same
//! [`Dispatch`] explicitly.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::dispatcher::DefaultGuard;
use tracing::Dispatch;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default log file, appended to across runs.
pub const DEFAULT_LOG_FILE: &str = "wordcloud.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log at DEBUG instead of INFO.
    pub debug: bool,
    /// Append-only log file; `None` or an empty path disables file logging.
    pub file: Option<PathBuf>,
    /// Print log lines to stderr.
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            console: true,
        }
    }
}

impl LoggingConfig {
    pub fn log_file(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    fn level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }

    /// `RUST_LOG` wins when set; otherwise INFO, or DEBUG with `debug`.
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level()))
    }
}

/// Logging handle passed to whatever needs to emit diagnostics.
#[derive(Clone)]
pub struct Logging {
    dispatch: Dispatch,
}

impl Logging {
    pub fn new(config: &LoggingConfig) -> Result<Self> {
        let file_layer = match config.log_file() {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| Error::file_system(path, e))?;
                Some(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(false)
                        .with_writer(Mutex::new(file)),
                )
            }
            None => None,
        };

        let console_layer = config.console.then(|| {
            fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr)
        });

        let subscriber = tracing_subscriber::registry()
            .with(config.filter())
            .with(console_layer)
            .with(file_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
        })
    }

    /// A handle that discards everything.
    pub fn silent() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Make this the current thread's logger until the guard drops.
    #[must_use = "logging is uninstalled when the guard is dropped"]
    pub fn install(&self) -> DefaultGuard {
        tracing::dispatcher::set_default(&self.dispatch)
    }
}

impl std::fmt::Debug for Logging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logging").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_layer_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.log");
        std::fs::write(&path, "previous run\n").unwrap();

        let config = LoggingConfig {
            debug: false,
            file: Some(path.clone()),
            console: false,
        };
        let logging = Logging::new(&config).unwrap();
        {
            let _guard = logging.install();
            tracing::info!("Loaded 3 stopwords");
            tracing::debug!("hidden at info level");
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("previous run\n"));
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(contents.contains("Loaded 3 stopwords"));
            assert!(!contents.contains("hidden at info level"));
        }
    }

    #[test]
    fn test_unwritable_log_file_is_error() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/no/such/dir/wordcloud.log")),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            Logging::new(&config),
            Err(Error::FileSystem { .. })
        ));
    }

    #[test]
    fn test_empty_path_disables_file_logging() {
        let config = LoggingConfig {
            file: Some(PathBuf::new()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.log_file(), None);
        assert!(Logging::new(&config).is_ok());
    }

    #[test]
    fn test_silent_logging_installs() {
        let _guard = Logging::silent().install();
        tracing::error!("dropped");
    }
}
