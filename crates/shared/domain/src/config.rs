use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration for the case runner application.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CasekitConfig {
    pub runner: RunnerConfig,
    pub log: LogConfig,
}

/// Case execution settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Directory that file-backed case sources are resolved against; the bundled
    /// showcase resources when absent.
    pub resources_dir: Option<PathBuf>,
    /// Only cases whose name contains this substring are run.
    pub filter: Option<String>,
}

/// Logging settings, mapped onto the logger builder by the application.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Module-directed filter such as `casekit_harness=debug`.
    pub env_filter: Option<String>,
    /// Directory for rolling log files; console only when absent.
    pub dir: Option<PathBuf>,
    /// Emit file logs as JSON lines.
    pub json: bool,
}

// --- Default ---

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), env_filter: None, dir: None, json: false }
    }
}
