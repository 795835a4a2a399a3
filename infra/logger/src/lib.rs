//! # Logger
//!
//! Installs the global `tracing` subscriber for casekit binaries.
//! Console output is compact and coloured; file output goes through a rolling,
//! non-blocking appender and can be written as JSON lines.
//!
//! * `RUST_LOG` always wins over the programmatic defaults.
//! * Use [`LoggerBuilder::env_filter`] for module directives such as
//!   `"casekit_harness=debug"`.
//! * File-only knobs ([`LoggerBuilder::rotation`], [`LoggerBuilder::max_files`],
//!   [`LoggerBuilder::json`]) exist only after [`LoggerBuilder::path`] was called.
//!
//! ## Example
//!
//! ```rust
//! # use casekit_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder("casekit")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    ansi: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            ansi: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<F: Sealed = NoFile> {
    name: String,
    config: LoggerConfig,
    file_state: PhantomData<F>,
}

impl LoggerBuilder<WithFile> {
    /// Maximum number of rotated log files kept on disk.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Rotation strategy for the log files.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Writes file logs as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<F> {
    /// Minimum level emitted when no directive matches.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Parses the minimum level from its name (`"info"`, `"debug"`, `"off"`, …).
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
    pub fn level_name(self, level: &str) -> Result<Self, LoggerError> {
        let parsed = level.parse::<LevelFilter>().map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid level '{level}': {e}").into(),
                context: None,
            }
        })?;
        Ok(self.level(parsed))
    }

    /// Adds an explicit env filter (e.g., `casekit_harness=debug`).
    ///
    /// `RUST_LOG` directives are still applied on top. Invalid filters make
    /// [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables console output.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Enables or disables ANSI colours on the console.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Directory for rolling log files, named `<name>.<date>.log`.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { name: self.name, config, file_state: PhantomData }
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the background writer guard when file output
    /// is enabled; keep it alive until shutdown so buffered lines are flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   an invalid env filter, or when no output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory or
    ///   file cannot be created.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name)?;

        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let env_filter = build_env_filter(&self.config, rust_log.as_deref())?;
        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_ansi(self.config.ansi).boxed());
        }

        let guard = if let Some(path) = self.config.path {
            fs::create_dir_all(&path)
                .context(format!("Failed to create log directory {}", path.display()))?;

            let file_appender = RollingFileAppender::builder()
                .rotation(self.config.rotation)
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.config.max_files)
                .build(path)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            layers.push(if self.config.json {
                file_layer.json().boxed()
            } else {
                file_layer.boxed()
            });
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;
        tracing::debug!(logger = %self.name, "Logger initialized");

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
///
/// Holds the non-blocking writer guard, if any. Drop it only at shutdown.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`]. `name` prefixes rolling log files.
    ///
    /// ```rust
    /// use casekit_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder("casekit").level(LevelFilter::WARN).init().unwrap();
    /// ```
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder { name: name.into(), config: LoggerConfig::default(), file_state: PhantomData }
    }

    /// Whether file output is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

/// Configured directives first, then `rust_log` directives on top. Invalid
/// `rust_log` directives are skipped.
fn build_env_filter(
    config: &LoggerConfig,
    rust_log: Option<&str>,
) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    let filter = match &config.env_filter {
        Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid env filter '{filter}': {e}").into(),
            context: None,
        })?,
        None => builder.parse_lossy(""),
    };

    let overrides = rust_log
        .into_iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .filter_map(|directive| directive.parse::<Directive>().ok());

    Ok(overrides.fold(filter, EnvFilter::add_directive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("casekit-test");
        assert!(builder.config.console);
        assert!(builder.config.ansi);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.max_files, DEFAULT_MAX_FILES);
        assert!(builder.config.path.is_none());
    }

    #[test]
    fn file_options_follow_path() {
        let builder = Logger::builder("casekit-test")
            .env_filter("casekit_harness=debug")
            .path("/tmp/casekit-logs")
            .max_files(3)
            .json(true)
            .level(LevelFilter::DEBUG);

        assert_eq!(builder.config.max_files, 3);
        assert!(builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::DEBUG);
        assert_eq!(builder.config.env_filter.as_deref(), Some("casekit_harness=debug"));
        assert_eq!(builder.config.path.as_deref(), Some(std::path::Path::new("/tmp/casekit-logs")));
    }

    #[test]
    fn level_name_parses_known_levels() {
        let builder = Logger::builder("casekit-test").level_name("warn").expect("valid level");
        assert_eq!(builder.config.level, LevelFilter::WARN);

        let err = Logger::builder("casekit-test").level_name("loud").expect_err("invalid level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn validation_rejects_empty_name_and_zero_files() {
        let config = LoggerConfig::default();
        assert!(validate_config(&config, "  ").is_err());

        let config = LoggerConfig { max_files: 0, ..LoggerConfig::default() };
        assert!(validate_config(&config, "casekit").is_err());
    }

    #[test]
    fn invalid_env_filter_is_rejected() {
        let config =
            LoggerConfig { env_filter: Some("casekit=loudest".to_owned()), ..LoggerConfig::default() };
        let err = build_env_filter(&config, None).expect_err("filter should not parse");
        assert_eq!(err.kind(), "InvalidConfiguration");
    }

    #[test]
    fn rust_log_overrides_configured_filter() {
        let config = LoggerConfig {
            env_filter: Some("casekit_harness=debug,casekit_kernel=warn".to_owned()),
            ..LoggerConfig::default()
        };
        let filter = build_env_filter(&config, Some("casekit_harness=trace, bogus=[,"))
            .expect("configured filter parses")
            .to_string();

        assert!(filter.contains("casekit_harness=trace"), "{filter}");
        assert!(!filter.contains("casekit_harness=debug"), "{filter}");
        assert!(filter.contains("casekit_kernel=warn"), "{filter}");
    }
}
