use casekit_runner::{App, Cli, exit_code, init_logger, load};
use clap::Parser;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load(&cli)?;
    let _logger = init_logger(&config.log)?;

    let report = App::builder().config(config).build()?.run()?;

    Ok(exit_code(&report))
}
