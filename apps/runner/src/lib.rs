//! # casekit runner
//!
//! Loads configuration, installs the logger and runs the showcase suite.
//!
//! ## Example
//! ```no_run
//! use casekit_runner::App;
//!
//! fn main() -> anyhow::Result<()> {
//!     let report = App::builder().filter("csv_file").build()?.run()?;
//!     assert!(report.total() > 0);
//!     Ok(())
//! }
//! ```

mod args;

pub use crate::args::Cli;

use anyhow::{Context, Result};
use casekit::domain::config::{CasekitConfig, LogConfig};
use casekit::harness::{Report, Runner, RunnerOptions};
use casekit::kernel::config::load_config;
use casekit_logger::Logger;
use std::process::ExitCode;
use tracing::{info, warn};

/// Loads the configuration named on the command line and applies CLI overrides.
///
/// # Errors
/// Fails when an explicit file is missing or any layer is malformed.
pub fn load(cli: &Cli) -> Result<CasekitConfig> {
    let mut config: CasekitConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(filter) = &cli.filter {
        config.runner.filter = Some(filter.clone());
    }
    Ok(config)
}

/// Installs the global logger described by `log`.
///
/// # Errors
/// Fails on an unknown level, an invalid filter, an unwritable directory, or when a
/// logger is already installed.
pub fn init_logger(log: &LogConfig) -> Result<Logger> {
    let builder = Logger::builder(env!("CARGO_PKG_NAME")).level_name(&log.level)?;
    let builder = match &log.env_filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };
    let logger = match &log.dir {
        Some(dir) => builder.path(dir).json(log.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

/// Process exit status for a finished run: success only when no record failed.
#[must_use]
pub fn exit_code(report: &Report) -> ExitCode {
    if report.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// A fluent builder for the [`App`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct AppBuilder {
    config: CasekitConfig,
}

impl AppBuilder {
    pub fn config(mut self, config: CasekitConfig) -> Self {
        self.config = config;
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.config.runner.filter = Some(filter.into());
        self
    }

    /// File sources resolve against the configured resources directory, or the
    /// bundled showcase resources when none is configured.
    ///
    /// # Errors
    /// Fails when the showcase suite cannot be registered.
    pub fn build(self) -> Result<App> {
        let suite = casekit::showcase_suite().context("Failed to register showcase cases")?;
        let mut options = RunnerOptions::from(&self.config.runner);
        if self.config.runner.resources_dir.is_none() {
            options.resources_dir = casekit::features::showcase::resources_dir();
        }
        Ok(App { runner: Runner::new(options), suite })
    }
}

/// The configured showcase run.
#[derive(Debug)]
pub struct App {
    runner: Runner,
    suite: casekit::harness::Suite,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    /// Runs every selected case and logs one line per failed invocation.
    ///
    /// # Errors
    /// Fails when the filter selects no case.
    pub fn run(&self) -> Result<Report> {
        let selected = self.suite.cases().iter().filter(|case| self.runner.selects(case)).count();
        if selected == 0 {
            anyhow::bail!(
                "No case matches filter '{}'",
                self.runner.options().filter.as_deref().unwrap_or_default()
            );
        }

        let report = self.runner.run(&self.suite);
        for record in report.failures() {
            warn!(case = %record.case(), invocation = %record.display_name(), outcome = %record.outcome(), "Failure");
        }
        info!(
            total = report.total(),
            passed = report.passed(),
            failed = report.failed(),
            skipped = report.skipped(),
            success = report.is_success(),
            "Run summary"
        );
        Ok(report)
    }
}
