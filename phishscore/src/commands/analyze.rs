//! Analyze command implementation: calls the core engine and serializes the
//! result to the terminal.

use anyhow::{Context, Result};
use comfy_table::Table;
use is_terminal::IsTerminal;
use log::info;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, BufRead};
use std::process::ExitCode;

use phishscore_core::{analyze_url, AnalysisResult, RiskLevel};

use crate::cli::AnalyzeCommand;

/// Exit code for a URL that failed analysis.
const EXIT_ANALYSIS_FAILED: u8 = 1;
/// Exit code for missing input.
const EXIT_MISSING_URL: u8 = 2;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Runs the analyze command and maps outcomes to exit codes.
pub fn run(cmd: &AnalyzeCommand) -> ExitCode {
    match dispatch(cmd) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_ANALYSIS_FAILED)
        }
    }
}

fn dispatch(cmd: &AnalyzeCommand) -> Result<ExitCode> {
    if cmd.stdin {
        run_stream(cmd)
    } else {
        let url = cmd.url.as_deref().unwrap_or_default();
        Ok(run_single(url, cmd))
    }
}

fn run_single(url: &str, cmd: &AnalyzeCommand) -> ExitCode {
    let url = url.trim();
    if url.is_empty() {
        report_error("Missing URL", cmd.json);
        return ExitCode::from(EXIT_MISSING_URL);
    }

    info!("Starting analysis of '{}'.", url);
    match analyze_url(url) {
        Ok(result) => {
            render(url, &result, cmd);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err.to_string(), cmd.json);
            ExitCode::from(EXIT_ANALYSIS_FAILED)
        }
    }
}

/// Streams URLs line by line; a failing line is reported but does not stop
/// the rest of the stream.
fn run_stream(cmd: &AnalyzeCommand) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut failures = 0usize;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read URL from stdin")?;
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        match analyze_url(url) {
            Ok(result) => render_line(url, &result, cmd.json),
            Err(err) => {
                failures += 1;
                report_error(&err.to_string(), cmd.json);
            }
        }
    }

    if failures > 0 {
        Ok(ExitCode::from(EXIT_ANALYSIS_FAILED))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn render(url: &str, result: &AnalysisResult, cmd: &AnalyzeCommand) {
    if cmd.json {
        match serde_json::to_string_pretty(result) {
            Ok(body) => println!("{}", body),
            Err(err) => eprintln!("Error: failed to serialize result: {}", err),
        }
        return;
    }

    let color = io::stdout().is_terminal();
    println!("{}", paint(result.verdict.as_str(), result.risk_level, color));
    println!("URL: {}", url);
    println!("Score: {} ({}%)", result.score, result.score_percentage);

    if !cmd.no_details && !result.details.is_empty() {
        println!("{}", findings_table(result));
    }
}

fn render_line(url: &str, result: &AnalysisResult, json: bool) {
    if json {
        match serde_json::to_string(result) {
            Ok(body) => println!("{}", body),
            Err(err) => eprintln!("Error: failed to serialize result: {}", err),
        }
    } else {
        let color = io::stdout().is_terminal();
        println!(
            "{:>3}  {}  {}",
            result.score,
            paint(result.verdict.as_str(), result.risk_level, color),
            url
        );
    }
}

fn findings_table(result: &AnalysisResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Check", "Points", "Severity", "Description"]);
    for finding in &result.details {
        table.add_row(vec![
            finding.check.clone(),
            finding.points.to_string(),
            finding.severity.to_string(),
            finding.description.clone(),
        ]);
    }
    table
}

fn paint(text: &str, level: RiskLevel, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match level {
        RiskLevel::Danger => text.red().bold().to_string(),
        RiskLevel::Warning => text.yellow().bold().to_string(),
        RiskLevel::Success => text.green().bold().to_string(),
    }
}

fn report_error(message: &str, json: bool) {
    if json {
        match serde_json::to_string(&ErrorBody { error: message }) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("Error: {}", message),
        }
    } else {
        eprintln!("Error: {}", message);
    }
}
