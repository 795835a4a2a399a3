use casekit_kernel::config::{ConfigError, EnvMap, load_config, load_config_with_env};
use casekit_kernel::domain::config::CasekitConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> Option<EnvMap<String, String>> {
    Some(pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect())
}

#[test]
fn file_values_are_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("casekit.toml");
    fs::write(
        &path,
        "[runner]\nresources_dir = \"fixtures\"\nfilter = \"csv\"\n\n[log]\nlevel = \"debug\"\n",
    )?;

    let cfg: CasekitConfig = load_config_with_env(Some(&path), env(&[]))?;
    assert_eq!(cfg.runner.resources_dir, Some(PathBuf::from("fixtures")));
    assert_eq!(cfg.runner.filter.as_deref(), Some("csv"));
    assert_eq!(cfg.log.level, "debug");
    assert!(!cfg.log.json);
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("casekit.toml");
    fs::write(&path, "[log]\nlevel = \"debug\"\n")?;

    let cfg: CasekitConfig = load_config_with_env(
        Some(&path),
        env(&[("CASEKIT__LOG__LEVEL", "warn"), ("CASEKIT__LOG__JSON", "true")]),
    )?;
    assert_eq!(cfg.log.level, "warn");
    assert!(cfg.log.json);
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = load_config::<CasekitConfig>(Some(Path::new("/no/such/casekit.toml")))
        .expect_err("missing explicit file must fail");
    assert!(matches!(err, ConfigError::Config { .. }));
    assert_eq!(err.kind(), "Config");
}

#[test]
fn defaults_apply_without_any_source() -> Result<(), ConfigError> {
    let cfg: CasekitConfig = load_config_with_env(None::<&Path>, env(&[]))?;
    assert_eq!(cfg.log.level, "info");
    assert!(cfg.runner.filter.is_none());
    Ok(())
}
