use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments of the `casekit` binary.
#[derive(Debug, Default, Parser)]
#[command(name = "casekit")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Runs the casekit showcase suite and reports every invocation")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML). Defaults to `casekit.*` when present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only run cases whose name contains this substring.
    #[arg(short, long, value_name = "SUBSTRING")]
    pub filter: Option<String>,
}
