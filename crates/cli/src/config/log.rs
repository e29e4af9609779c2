//! Logging preferences and subscriber setup.
//!
//! `LogConfig` describes where log events go (stdout, stderr, journald, a
//! file) and the minimum level recorded. `LogConfig::registry` turns it into
//! a global `tracing` subscriber with one layer per enabled driver.
use std::{fs::OpenOptions, path::PathBuf};

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use snafu::{ResultExt, Snafu};
use tracing_subscriber::{
    Layer, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

/// Logging configuration as read from the `log` section of the config file.
///
/// Stderr is the only driver enabled by default, so log lines never
/// interleave with what a command renders on stdout.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    /// Append log events to this file when set.
    #[serde(default = "LogConfig::default_file_path")]
    pub file_path: Option<PathBuf>,

    #[serde(default = "LogConfig::default_emit_journald")]
    pub emit_journald: bool,

    #[serde(default = "LogConfig::default_emit_stdout")]
    pub emit_stdout: bool,

    #[serde(default = "LogConfig::default_emit_stderr")]
    pub emit_stderr: bool,

    /// Events below this level are dropped.
    #[serde(default = "LogConfig::default_log_level")]
    #[serde_as(as = "DisplayFromStr")]
    pub level: tracing::Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file_path: Self::default_file_path(),
            emit_journald: Self::default_emit_journald(),
            emit_stdout: Self::default_emit_stdout(),
            emit_stderr: Self::default_emit_stderr(),
            level: Self::default_log_level(),
        }
    }
}

impl LogConfig {
    #[inline]
    #[must_use]
    pub const fn default_log_level() -> tracing::Level { tracing::Level::INFO }

    #[inline]
    #[must_use]
    pub const fn default_file_path() -> Option<PathBuf> { None }

    #[inline]
    #[must_use]
    pub const fn default_emit_journald() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_emit_stdout() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_emit_stderr() -> bool { true }

    /// Returns `true` when at least one driver is enabled.
    #[must_use]
    pub const fn has_output(&self) -> bool {
        self.emit_journald || self.emit_stdout || self.emit_stderr || self.file_path.is_some()
    }

    /// Installs the global `tracing` subscriber described by this
    /// configuration.
    ///
    /// Nothing is installed when every driver is disabled. Drivers that
    /// cannot be set up (an unwritable log file, no journald socket) are
    /// skipped silently; the remaining drivers still receive events.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber has already been installed.
    pub fn registry(&self) -> Result<(), InitializeLogError> {
        if !self.has_output() {
            return Ok(());
        }
        let Self { emit_journald, file_path, emit_stdout, emit_stderr, level: log_level } = self;

        let filter_layer = tracing_subscriber::filter::LevelFilter::from_level(*log_level);

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(emit_journald.then(|| LogDriver::Journald.layer()))
            .with(file_path.clone().map(|path| LogDriver::File(path).layer()))
            .with(emit_stdout.then(|| LogDriver::Stdout.layer()))
            .with(emit_stderr.then(|| LogDriver::Stderr.layer()))
            .try_init()
            .context(InstallSubscriberSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum InitializeLogError {
    #[snafu(display("Failed to install the global tracing subscriber, error: {source}"))]
    InstallSubscriber { source: tracing_subscriber::util::TryInitError },
}

/// Destination of formatted log events.
#[derive(Clone, Debug)]
enum LogDriver {
    Stdout,
    Stderr,
    Journald,
    File(PathBuf),
}

impl LogDriver {
    /// Builds the layer for this driver, or `None` if the destination is not
    /// available.
    #[allow(clippy::type_repetition_in_bounds)]
    fn layer<S>(self) -> Option<Box<dyn Layer<S> + Send + Sync + 'static>>
    where
        S: tracing::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let fmt = tracing_subscriber::fmt::layer().with_target(false).with_thread_names(true);

        match self {
            Self::Stdout => Some(Box::new(fmt.with_writer(std::io::stdout))),
            Self::Stderr => Some(Box::new(fmt.with_writer(std::io::stderr))),
            Self::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path).ok()?;
                Some(Box::new(fmt.with_ansi(false).with_writer(file)))
            }
            Self::Journald => Some(Box::new(tracing_journald::layer().ok()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logs_to_stderr_only() {
        let config = LogConfig::default();
        assert_eq!(config.level, tracing::Level::INFO);
        assert!(config.emit_stderr);
        assert!(!config.emit_stdout);
        assert!(!config.emit_journald);
        assert!(config.file_path.is_none());
        assert!(config.has_output());
    }

    #[test]
    fn test_deserialize_partial_section() {
        let config: LogConfig =
            serde_yaml::from_str("level: DEBUG\nemitStderr: false\n").expect("valid log section");
        assert_eq!(config.level, tracing::Level::DEBUG);
        assert!(!config.emit_stderr);
        assert!(!config.has_output());
    }

    #[test]
    fn test_registry_without_output_installs_nothing() {
        let config = LogConfig { emit_stderr: false, ..LogConfig::default() };
        assert!(!config.has_output());

        // a second install would fail if the first one had set a subscriber
        assert!(config.registry().is_ok());
        assert!(config.registry().is_ok());
    }

    #[test]
    fn test_deserialize_rejects_unknown_level() {
        let result = serde_yaml::from_str::<LogConfig>("level: LOUD\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_file_layer_requires_writable_path() {
        let layer = LogDriver::File(PathBuf::from("/nonexistent-kvisit-dir/kvisit.log"))
            .layer::<tracing_subscriber::Registry>();
        assert!(layer.is_none());
    }
}
