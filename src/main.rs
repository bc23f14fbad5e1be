// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use stair_ways::{app, cli, logging};

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init(args.verbose, args.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> anyhow::Result<()> {
    let config = cli::build_config(args)?;
    tracing::debug!(?config, "configuration resolved");
    app::run(&args.command, &config)?;
    Ok(())
}
