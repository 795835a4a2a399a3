use casekit_runner::{Cli, load};
use std::fs;

#[test]
fn file_values_load_and_cli_filter_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("casekit.toml");
    fs::write(
        &path,
        "[runner]\nresources_dir = \"fixtures\"\nfilter = \"enum\"\n\n[log]\nlevel = \"debug\"\njson = true\n",
    )
    .unwrap();

    let config = load(&Cli { config: Some(path.clone()), filter: None }).unwrap();
    assert_eq!(config.runner.filter.as_deref(), Some("enum"));
    assert_eq!(config.runner.resources_dir, Some(std::path::PathBuf::from("fixtures")));
    assert_eq!(config.log.level, "debug");
    assert!(config.log.json);

    let config = load(&Cli { config: Some(path), filter: Some("csv".to_owned()) }).unwrap();
    assert_eq!(config.runner.filter.as_deref(), Some("csv"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli { config: Some(dir.path().join("absent.toml")), filter: None };
    assert!(load(&cli).is_err());
}
