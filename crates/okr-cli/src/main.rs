//! OKR Engine - snapshot recompute and scoring CLI
//!
//! The `okr` command recomputes key-result scores outside the web UI.
//!
//! ## Commands
//!
//! - `attainment`: Score a single observation against a key result
//! - `deadline`: Score a date-typed key result from its three dates
//! - `forecast`: Project a key result to the end of its period
//! - `report`: Recompute every KR and objective in an exported snapshot

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, Level};
use uuid::Uuid;

use okr_core::{
    compute_attainment, compute_deadline_progress, compute_forecast, emit_objective_rolled_up,
    kr_progress, objective_attainment, quarter_progress, CheckinRecord, KeyResultSpec, KrKind,
    PerformanceBand, TrackingPeriod, WeightedPct,
};

#[derive(Parser)]
#[command(name = "okr")]
#[command(author = "Vetor Labs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "OKR attainment & forecast engine", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output (and JSON-formatted log lines)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single observation against a key result
    Attainment {
        /// Measured value at check-in time
        #[arg(long)]
        realized: Option<f64>,

        /// Minimum-budget floor (omit if the KR has none)
        #[arg(long)]
        floor: Option<f64>,

        /// Goal value
        #[arg(long)]
        target: Option<f64>,

        /// Direction text (increase, decrease, or the Portuguese synonyms)
        #[arg(long)]
        direction: Option<String>,

        /// Value kind (number, percentage, currency, date)
        #[arg(long, default_value = "number")]
        kind: String,
    },

    /// Score a date-typed key result from goal, limit, and achieved dates
    Deadline {
        /// Goal date (YYYY-MM-DD)
        #[arg(long)]
        target_date: String,

        /// Hard-deadline date (YYYY-MM-DD)
        #[arg(long)]
        limit_date: String,

        /// Achieved date (YYYY-MM-DD)
        #[arg(long)]
        achieved_date: String,
    },

    /// Project a key result to the end of its tracking period
    Forecast {
        /// Value at the start of the period
        #[arg(long)]
        baseline: Option<f64>,

        /// Goal value
        #[arg(long)]
        target: Option<f64>,

        /// Current value
        #[arg(long)]
        current: f64,

        /// Direction text
        #[arg(long)]
        direction: Option<String>,

        /// Period start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Period end date (YYYY-MM-DD)
        #[arg(long)]
        end: String,
    },

    /// Recompute every key result and objective in an exported snapshot
    Report {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    okr_core::init_tracing(cli.json, level);

    match cli.command {
        Commands::Attainment {
            realized,
            floor,
            target,
            direction,
            kind,
        } => cmd_attainment(realized, floor, target, direction.as_deref(), &kind),
        Commands::Deadline {
            target_date,
            limit_date,
            achieved_date,
        } => cmd_deadline(&target_date, &limit_date, &achieved_date),
        Commands::Forecast {
            baseline,
            target,
            current,
            direction,
            start,
            end,
        } => cmd_forecast(baseline, target, current, direction.as_deref(), &start, &end),
        Commands::Report { snapshot } => cmd_report(&snapshot, cli.json),
    }
}

/// Score a single observation.
fn cmd_attainment(
    realized: Option<f64>,
    floor: Option<f64>,
    target: Option<f64>,
    direction: Option<&str>,
    kind: &str,
) -> Result<()> {
    let kind = KrKind::parse(Some(kind));
    match compute_attainment(realized, floor, target, direction, kind) {
        Some(pct) => {
            let band = PerformanceBand::from_pct(pct);
            println!("{:.2}% ({})", pct, band);
        }
        None => println!("not computable (insufficient data)"),
    }
    Ok(())
}

/// Score a date-typed key result.
fn cmd_deadline(target_date: &str, limit_date: &str, achieved_date: &str) -> Result<()> {
    match compute_deadline_progress(target_date, limit_date, achieved_date) {
        Some(pct) => println!("{:.2}%", pct),
        None => println!("not computable (unparseable date)"),
    }
    Ok(())
}

/// Project a key result to the end of its period.
fn cmd_forecast(
    baseline: Option<f64>,
    target: Option<f64>,
    current: f64,
    direction: Option<&str>,
    start: &str,
    end: &str,
) -> Result<()> {
    let start = parse_day(start).context(format!("invalid period start: {}", start))?;
    let end = parse_day(end).context(format!("invalid period end: {}", end))?;
    let period = TrackingPeriod::new(start, end);

    let result = compute_forecast(baseline, target, current, direction, &period);
    println!("status:    {}", result.status);
    println!("projected: {:.2}", result.projected_value);
    println!("note:      {}", result.message);
    Ok(())
}

fn parse_day(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(Into::into)
}

// ---------------------------------------------------------------------------
// Snapshot report
// ---------------------------------------------------------------------------

/// An exported snapshot: objectives with their key results and check-ins.
///
/// This is the same shape the data-store export produces; check-ins are
/// unordered, the report picks the newest per key result.
#[derive(Debug, Clone, Deserialize)]
struct Snapshot {
    objectives: Vec<ObjectiveRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct ObjectiveRecord {
    id: Uuid,
    title: String,
    key_results: Vec<KeyResultRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct KeyResultRecord {
    #[serde(flatten)]
    spec: KeyResultSpec,
    #[serde(default)]
    checkins: Vec<CheckinRecord>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
struct KrReport {
    id: Uuid,
    title: String,
    pct: Option<f64>,
    band: Option<PerformanceBand>,
    checkins: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
struct ObjectiveReport {
    id: Uuid,
    title: String,
    pct: Option<f64>,
    key_results: Vec<KrReport>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
struct ReportOutput {
    objectives: Vec<ObjectiveReport>,
    /// Headline average across every key result's latest attainment.
    quarter_progress: f64,
}

/// Recompute every key result and objective in a snapshot.
fn build_report(snapshot: &Snapshot) -> ReportOutput {
    let mut objectives = Vec::new();
    let mut last_attainments = Vec::new();

    for objective in &snapshot.objectives {
        let mut kr_reports = Vec::new();
        let mut contributions = Vec::new();

        for kr in &objective.key_results {
            let pct = kr_progress(&kr.spec, &kr.checkins);
            contributions.push(WeightedPct::new(pct, kr.spec.weight));
            last_attainments.push(pct);
            kr_reports.push(KrReport {
                id: kr.spec.id,
                title: kr.spec.title.clone(),
                pct,
                band: pct.map(PerformanceBand::from_pct),
                checkins: kr.checkins.len(),
            });
        }

        objectives.push(ObjectiveReport {
            id: objective.id,
            title: objective.title.clone(),
            pct: objective_attainment(&contributions),
            key_results: kr_reports,
        });
    }

    ReportOutput {
        quarter_progress: quarter_progress(&last_attainments),
        objectives,
    }
}

/// Recompute a whole snapshot file and print the report.
fn cmd_report(path: &PathBuf, json: bool) -> Result<()> {
    let snapshot: Snapshot = read_json_file(path)?;
    info!(
        objectives = snapshot.objectives.len(),
        "recomputing snapshot"
    );

    let report = build_report(&snapshot);

    for objective in &report.objectives {
        emit_objective_rolled_up(
            &objective.id.to_string(),
            objective.key_results.len(),
            objective.pct,
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report_text(&report));
    }
    Ok(())
}

fn read_json_file<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {:?}", path))
}

fn render_report_text(report: &ReportOutput) -> String {
    let mut out = String::new();
    out.push_str("Snapshot Report\n");
    out.push_str("===============\n");

    for objective in &report.objectives {
        out.push_str(&format!(
            "\n{} — {}\n",
            objective.title,
            fmt_pct(objective.pct)
        ));
        for kr in &objective.key_results {
            let band = kr
                .band
                .map(|b| format!(" [{}]", b))
                .unwrap_or_default();
            out.push_str(&format!(
                "  {} — {}{} ({} check-ins)\n",
                kr.title,
                fmt_pct(kr.pct),
                band,
                kr.checkins,
            ));
        }
    }

    out.push_str(&format!(
        "\nQuarter progress: {:.0}%",
        report.quarter_progress
    ));
    out
}

fn fmt_pct(pct: Option<f64>) -> String {
    match pct {
        Some(pct) => format!("{:.2}%", pct),
        None => "--".to_string(),
    }
}
