// ABOUTME: Command-line front end running analytics views over a JSON snapshot file
// ABOUTME: Prints the dashboard, quick insights, weekly summary or burnout assessment as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

//! TaskPulse command-line interface
//!
//! Usage:
//! ```bash
//! # Full dashboard for a snapshot
//! taskpulse-cli dashboard --input snapshot.json --pretty
//!
//! # Quick insights with a custom configuration, as of a fixed instant
//! taskpulse-cli quick --input snapshot.json --config analytics.json \
//!     --as-of 2025-03-14T18:00:00Z
//!
//! # Weekly summary and burnout assessment
//! taskpulse-cli weekly --input snapshot.json
//! taskpulse-cli burnout --input snapshot.json
//!
//! # Print the effective configuration (defaults plus TASKPULSE_* overrides)
//! taskpulse-cli config --pretty
//! ```

mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use taskpulse::input::{load_config, load_snapshot};
use taskpulse::intelligence::{AnalyticsConfig, AnalyticsDashboard};
use taskpulse::logging::LoggingConfig;
use taskpulse::models::AnalyticsSnapshot;

#[derive(Parser)]
#[command(
    name = "taskpulse-cli",
    about = "TaskPulse productivity analytics",
    long_about = "Run the TaskPulse analytics engine over a JSON snapshot of tasks and mood records and print the requested view as JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Executive summary plus every component report
    Dashboard(ViewArgs),

    /// Cheap snapshot of today for frequent polling
    Quick(ViewArgs),

    /// Current week against the previous one
    Weekly(ViewArgs),

    /// Current and projected burnout risk
    Burnout(ViewArgs),

    /// Show the effective engine configuration
    Config {
        /// Configuration file (JSON); defaults plus environment overrides when omitted
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ViewArgs {
    /// Snapshot file (JSON with tasks, moods and optional burnout_history)
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Configuration file (JSON); defaults plus environment overrides when omitted
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Reference instant (RFC 3339); overrides the snapshot's own as_of
    #[arg(long, value_parser = parse_as_of)]
    as_of: Option<DateTime<Utc>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    match cli.command {
        Command::Dashboard(args) => {
            let (dashboard, snapshot) = prepare(&args)?;
            output::print_json(&dashboard.full_dashboard(&snapshot), cli.pretty)?;
        }
        Command::Quick(args) => {
            let (dashboard, snapshot) = prepare(&args)?;
            output::print_json(&dashboard.quick_insights(&snapshot), cli.pretty)?;
        }
        Command::Weekly(args) => {
            let (dashboard, snapshot) = prepare(&args)?;
            output::print_json(&dashboard.weekly_summary(&snapshot), cli.pretty)?;
        }
        Command::Burnout(args) => {
            let (dashboard, snapshot) = prepare(&args)?;
            output::print_json(&dashboard.burnout_assessment(&snapshot), cli.pretty)?;
        }
        Command::Config { config } => {
            let config = resolve_config(config.as_deref())?;
            output::print_json(&config, cli.pretty)?;
        }
    }

    Ok(())
}

fn prepare(args: &ViewArgs) -> Result<(AnalyticsDashboard, AnalyticsSnapshot)> {
    let config = resolve_config(args.config.as_deref())?;
    let dashboard = AnalyticsDashboard::new(config).context("Invalid analytics configuration")?;

    let snapshot = load_snapshot(&args.input, args.as_of, Utc::now())
        .with_context(|| format!("Failed to load snapshot {}", args.input.display()))?;
    info!(
        tasks = snapshot.tasks().len(),
        moods = snapshot.moods().len(),
        as_of = %snapshot.as_of(),
        "Snapshot loaded"
    );
    Ok((dashboard, snapshot))
}

fn resolve_config(path: Option<&Path>) -> Result<AnalyticsConfig> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration {}", path.display())),
        None => AnalyticsConfig::from_environment()
            .context("Invalid TASKPULSE_* environment override"),
    }
}

fn parse_as_of(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}
