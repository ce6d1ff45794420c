//! pa_cli
//!
//! Command line front-end over a JSON match event file:
//! full analysis as JSON, zone tables, ASCII heatmaps and single-point zone
//! lookups. Logs go to stderr (`RUST_LOG`, default `info`); results go to
//! stdout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use pa_core::config::HeatmapConfig;
use pa_core::ingest::{event_schema, SkippedRecord};
use pa_core::{
    analyze, classify, load_events, AnalysisConfig, AnalysisFilter, HeatmapGrid, IngestReport, MatchAnalysis,
    TimeInterval,
};

#[derive(Parser)]
#[command(name = "pa_cli")]
#[command(about = "Zone, chance and heatmap analysis for football match events", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Selection {
    /// Input JSON event file (array of event records)
    #[arg(long)]
    events: PathBuf,

    /// Time interval: all, first_half, second_half, overtime or START-END
    #[arg(long)]
    interval: Option<String>,

    /// Only events performed by this player id
    #[arg(long)]
    player: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis and print it as JSON
    Analyze {
        #[command(flatten)]
        selection: Selection,

        /// Analysis config JSON (defaults to $PA_ANALYSIS_CONFIG, then built-in defaults)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Use the compact 6x10 heatmap grid
        #[arg(long, default_value = "false")]
        compact: bool,

        /// Write the JSON to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print chance counts per zone
    Zones {
        #[command(flatten)]
        selection: Selection,
    },

    /// Print an ASCII heatmap of event origins
    Heatmap {
        #[command(flatten)]
        selection: Selection,

        /// Grid rows (1-200)
        #[arg(long, default_value = "8", value_parser = grid_dim())]
        rows: u16,

        /// Grid columns (1-200)
        #[arg(long, default_value = "12", value_parser = grid_dim())]
        cols: u16,
    },

    /// Print the zone key for a single coordinate
    Classify {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,

        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },

    /// Print the JSON schema of the event file format
    Schema,
}

/// JSON envelope written by `analyze`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisOutput<'a> {
    generated_at: DateTime<Utc>,
    source: String,
    skipped: &'a [SkippedRecord],
    analysis: &'a MatchAnalysis,
}

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { selection, config, compact, out } => {
            let report = read_events(&selection.events)?;
            let filter = build_filter(&selection)?;
            let mut config = match config {
                Some(path) => AnalysisConfig::from_path(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => AnalysisConfig::from_env_or_default(),
            };
            if compact {
                let grid = AnalysisConfig::compact().heatmap;
                config.heatmap.rows = grid.rows;
                config.heatmap.cols = grid.cols;
            }

            let analysis = analyze(&report.events, &filter, &config);
            let output = AnalysisOutput {
                generated_at: Utc::now(),
                source: selection.events.display().to_string(),
                skipped: &report.skipped,
                analysis: &analysis,
            };
            let json = serde_json::to_string_pretty(&output)?;

            match out {
                Some(path) => {
                    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), "analysis written");
                }
                None => println!("{}", json),
            }
        }

        Commands::Zones { selection } => {
            let report = read_events(&selection.events)?;
            let filter = build_filter(&selection)?;
            let analysis = analyze(&report.events, &filter, &AnalysisConfig::default());
            print_zone_table(&analysis);
        }

        Commands::Heatmap { selection, rows, cols } => {
            let report = read_events(&selection.events)?;
            let filter = build_filter(&selection)?;
            let mut config = AnalysisConfig::default();
            config.heatmap.rows = usize::from(rows);
            config.heatmap.cols = usize::from(cols);
            let analysis = analyze(&report.events, &filter, &config);
            print_heatmap(&analysis.heatmap);
        }

        Commands::Classify { x, y } => {
            if !(x.is_finite() && y.is_finite()) {
                anyhow::bail!("coordinates must be finite numbers");
            }
            println!("{}", classify(x, y));
        }

        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&event_schema())?);
        }
    }

    Ok(())
}

fn grid_dim() -> clap::builder::RangedI64ValueParser<u16> {
    clap::value_parser!(u16).range(1..=HeatmapConfig::MAX_DIM as i64)
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("failed to create log filter")?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("tracing init error: {err}"))?;
    Ok(())
}

fn read_events(path: &Path) -> Result<IngestReport> {
    let report = load_events(path).with_context(|| format!("failed to read events from {}", path.display()))?;
    if !report.is_clean() {
        warn!(skipped = report.skipped_count(), path = %path.display(), "some event records were skipped");
    }
    info!(events = report.events.len(), "events loaded");
    Ok(report)
}

fn build_filter(selection: &Selection) -> Result<AnalysisFilter> {
    let mut filter = AnalysisFilter::new();
    if let Some(spec) = &selection.interval {
        filter.interval = Some(TimeInterval::parse(spec).context("invalid --interval")?);
    }
    filter.player = selection.player.clone();
    Ok(filter)
}

fn print_zone_table(analysis: &MatchAnalysis) {
    let report = &analysis.chances;
    println!("{:<24} {:>6} {:>8} {:>8} {:>10}", "zone", "count", "->shot", "->goal", "box_entry");
    for (key, stat) in report.zones.iter() {
        if !key.is_reachable() && stat.count == 0 {
            continue;
        }
        println!(
            "{:<24} {:>6} {:>8} {:>8} {:>10}",
            key.as_str(),
            stat.count,
            stat.led_to_shot,
            stat.led_to_goal,
            stat.box_entries
        );
    }

    let s = &report.summary;
    println!();
    println!("chances:    {} ({} box entries, {} final third, {} corner zone)", s.total, s.box_entries, s.final_third_chances, s.corner_zone_chances);
    println!("led to shot {} / goal {} ({}% conversion)", s.led_to_shot, s.led_to_goal, s.conversion_rate);
    println!("lanes:      left {} / center {} / right {}", s.left_wing, s.center, s.right_wing);
}

const RAMP: &[u8] = b" .:-=+*#%@";

fn print_heatmap(grid: &HeatmapGrid) {
    if grid.is_empty() {
        println!("(no events)");
        return;
    }
    let border = format!("+{}+", "-".repeat(grid.cols));
    println!("{}", border);
    for row in grid.rows_iter() {
        let line: String = row
            .iter()
            .map(|&v| {
                let level = (v / grid.max_intensity * (RAMP.len() - 1) as f64).round() as usize;
                RAMP[level.min(RAMP.len() - 1)] as char
            })
            .collect();
        println!("|{}|", line);
    }
    println!("{}", border);
    println!("events: {}  max intensity: {:.2}", grid.direct_total(), grid.max_intensity);
}

