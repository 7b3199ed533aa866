//! Tracing setup shared by sigdoc front-ends.
//!
//! `RUST_LOG` always wins over the configured default level. File output rolls
//! daily under the log directory as `<component>.log.<date>`.

use crate::error::{Result, SigdocError};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that relocates the log directory.
pub const LOG_DIR_ENV: &str = "SIGDOC_LOG_DIR";

/// `$SIGDOC_LOG_DIR`, else `~/.sigdoc/logs`.
pub fn default_log_dir() -> PathBuf {
    resolve_log_dir(std::env::var_os(LOG_DIR_ENV), dirs::home_dir())
}

fn resolve_log_dir(env_dir: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    match env_dir.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => home
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sigdoc")
            .join("logs"),
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// File name prefix, e.g. `cli`
    pub component: String,
    /// Filter directive used when `RUST_LOG` is unset
    pub default_level: String,
    pub to_stderr: bool,
    /// Directory for rolling log files; `None` disables file output
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            default_level: "info".to_string(),
            to_stderr: false,
            log_dir: Some(default_log_dir()),
        }
    }

    pub fn with_stderr(mut self, to_stderr: bool) -> Self {
        self.to_stderr = to_stderr;
        self
    }

    pub fn with_default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    pub fn with_log_dir(mut self, log_dir: Option<PathBuf>) -> Self {
        self.log_dir = log_dir;
        self
    }

    fn file_prefix(&self) -> String {
        format!("{}.log", self.component)
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.default_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Installs the global subscriber. The returned guard flushes the file writer
    /// on drop and must outlive all logging.
    ///
    /// An unusable log directory disables file output instead of failing; a second
    /// call fails with [`SigdocError::Config`].
    pub fn init(&self) -> Result<Option<WorkerGuard>> {
        let mut unusable_dir = None;
        let (file_layer, guard) = match &self.log_dir {
            Some(dir) => match std::fs::create_dir_all(dir) {
                Ok(()) => {
                    let appender = tracing_appender::rolling::daily(dir, self.file_prefix());
                    let (writer, guard) = tracing_appender::non_blocking(appender);
                    let layer = fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(true);
                    (Some(layer), Some(guard))
                }
                Err(e) => {
                    unusable_dir = Some((dir, e));
                    (None, None)
                }
            },
            None => (None, None),
        };

        let stderr_layer = self.to_stderr.then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
        });

        tracing_subscriber::registry()
            .with(self.filter())
            .with(file_layer)
            .with(stderr_layer)
            .try_init()
            .map_err(|e| SigdocError::Config(format!("Logging already initialized: {}", e)))?;

        if let Some((dir, e)) = unusable_dir {
            tracing::warn!("File logging disabled, cannot create {}: {}", dir.display(), e);
        }
        Ok(guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn env_dir_overrides_home() {
        let dir = resolve_log_dir(Some("/var/log/sigdoc".into()), Some("/home/dev".into()));
        assert_eq!(dir, PathBuf::from("/var/log/sigdoc"));
    }

    #[test]
    fn empty_env_dir_is_ignored() {
        let dir = resolve_log_dir(Some(OsString::new()), Some("/home/dev".into()));
        assert_eq!(dir, PathBuf::from("/home/dev/.sigdoc/logs"));
    }

    #[test]
    fn missing_home_falls_back_to_working_dir() {
        assert_eq!(resolve_log_dir(None, None), PathBuf::from("./.sigdoc/logs"));
    }

    #[test]
    fn builder_sets_every_field() {
        let config = LogConfig::new("cli")
            .with_stderr(true)
            .with_default_level("sigdoc_core=debug")
            .with_log_dir(None);

        assert_eq!(config.component, "cli");
        assert_eq!(config.default_level, "sigdoc_core=debug");
        assert!(config.to_stderr);
        assert!(config.log_dir.is_none());
        assert_eq!(config.file_prefix(), "cli.log");
    }

    // The only test in this binary that installs the global subscriber.
    #[test]
    fn init_writes_to_log_dir_once() {
        let temp = TempDir::new().unwrap();
        let config = LogConfig::new("unit").with_log_dir(Some(temp.path().join("logs")));

        let guard = config.init().unwrap();
        assert!(guard.is_some());
        tracing::info!("logging initialized");
        drop(guard);

        let written: Vec<_> = std::fs::read_dir(temp.path().join("logs"))
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(written.len(), 1);
        assert!(written[0].starts_with("unit.log"));

        assert!(matches!(config.init(), Err(SigdocError::Config(_))));
    }
}
