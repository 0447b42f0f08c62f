use action_scout::Scanner;
use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scan a directory of checked-out repositories for action definitions
/// and write the normalized metadata as a JSON report.
#[derive(Parser, Debug)]
#[command(name = "action-scout", version, about)]
struct Cli {
    /// Root directory containing the repositories to scan
    root: PathBuf,

    /// Report destination; defaults to a timestamped file in the
    /// current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut report = Scanner::new(&cli.root).scan();

    // Credentials in artifact URLs never reach the report.
    report.docker_actions = report
        .docker_actions
        .into_iter()
        .map(|record| record.without_token())
        .collect();

    info!(
        "Found {} manifest action(s) and {} dockerfile action(s)",
        report.actions.len(),
        report.docker_actions.len()
    );

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("actions-{}.json", date_slug())));

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    fs::write(&output, json)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    info!("Report written to {}", output.display());
    Ok(())
}

/// Timestamp fragment for the default report file name.
fn date_slug() -> String {
    Local::now().format("%Y%m%d_%H%M").to_string()
}
