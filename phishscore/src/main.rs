// phishscore/src/main.rs
//! PhishScore entry point.
//!
//! Parses the CLI, configures logging, and dispatches to the requested
//! command.

use clap::Parser;
use std::process::ExitCode;

use phishscore::cli::{Cli, Commands};
use phishscore::commands::analyze;
use phishscore::logger;

fn main() -> ExitCode {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Analyze(cmd) => analyze::run(&cmd),
    }
}
