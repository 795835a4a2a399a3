use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

pub use config::Map as EnvMap;

/// Prefix for environment overrides (`CASEKIT__RUNNER__FILTER` maps to `runner.filter`).
pub const ENV_PREFIX: &str = "CASEKIT";
const ENV_SEPARATOR: &str = "__";
/// File stem probed in the working directory when no explicit path is given.
const DEFAULT_FILE: &str = "casekit";

/// Custom error type for config loading.
#[casekit_derive::casekit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file overlaid with `CASEKIT__*` environment variables.
///
/// Layering:
/// 1. **Base file**: `path` when given (must exist). Otherwise a `casekit.{toml,json,yaml}`
///    in the working directory is used if present.
/// 2. **Environment overrides**: variables prefixed with `CASEKIT__`, nested with `__`
///    (e.g., `CASEKIT__LOG__LEVEL=debug` maps to `log.level`).
///
/// Fields missing from every layer fall back to the target type's serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or malformed, or if the
/// merged values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use casekit_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// # let _ = cfg.port;
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], reading overrides from `env` instead of the process
/// environment when it is `Some`. Keys are full variable names (`CASEKIT__LOG__LEVEL`).
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<EnvMap<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .source(env),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
