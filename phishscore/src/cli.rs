// phishscore/src/cli.rs
//! This file defines the command-line interface (CLI) for the phishscore
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "phishscore",
    version = env!("CARGO_PKG_VERSION"),
    about = "Heuristic phishing risk scoring for URLs",
    long_about = "Phishscore is a command-line utility for scoring URLs against a fixed set of phishing heuristics. It computes a numeric risk score, a categorical verdict, and an explainable list of triggered checks, without ever resolving or fetching the URL.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the 'phishscore' crates)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `phishscore` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scores a URL and reports the verdict and triggered checks.
    #[command(about = "Scores a URL and reports the risk verdict and triggered checks.")]
    Analyze(AnalyzeCommand),
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug)]
pub struct AnalyzeCommand {
    /// The URL to analyze (omit together with --stdin to stream URLs).
    #[arg(value_name = "URL", required_unless_present = "stdin")]
    pub url: Option<String>,

    /// Read one URL per line from stdin instead of taking an argument.
    #[arg(long = "stdin", conflicts_with = "url", help = "Read one URL per line from stdin.")]
    pub stdin: bool,

    /// Emit the analysis result as JSON.
    #[arg(long = "json", short = 'j', help = "Emit the analysis result as JSON.")]
    pub json: bool,

    /// Suppress the findings table in human-readable output.
    #[arg(long = "no-details", help = "Suppress the findings table in human-readable output.")]
    pub no_details: bool,
}
