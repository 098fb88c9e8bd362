mod boundaries_cmd;
mod cli;
mod config;
mod logging;
mod output;
mod period_cmd;
mod ranges_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Ranges(args) => ranges_cmd::run(args, &config),
        Command::Boundaries(args) => boundaries_cmd::run(args, &config),
        Command::Period(args) => period_cmd::run(args, &config),
    }
}
