mod cli;
mod config;
mod convert;
mod cumulative_cmd;
mod geometric_cmd;
mod input;
mod logging;
mod output;
mod percentiles_cmd;
mod runoff_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Percentiles(args) => percentiles_cmd::run(args),
        Command::Runoff(args) => runoff_cmd::run(args),
        Command::Geometric(args) => geometric_cmd::run(args),
        Command::Cumulative(args) => cumulative_cmd::run(args),
    }
}
