use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use super::init_tracing;
use crate::config::{ClusterThreshold, MarkerConfig};
use crate::indexer::{cluster_records, extract_report};
use crate::models::{Group, TextSource};
use crate::parsers::{parse_comments_file, read_description_file};
use crate::presentation::{DetailEntry, PresentationAdapter, format_offset, notify};
use crate::proximity::{ProgressBar, SelectionChange, build_index};
use crate::session::MarkerSession;
use crate::utils::get_config_path;

#[derive(Parser)]
#[command(name = "timecode-markers")]
#[command(version = "0.1.0")]
#[command(
    about = "Cluster time codes from video descriptions and comments into timeline markers",
    long_about = None
)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Plain-text video description (primary source)
    #[arg(long)]
    pub description: Option<PathBuf>,

    /// JSONL comment dump, one {"text": ..., "id": ...} object per line
    #[arg(long)]
    pub comments: Option<PathBuf>,

    /// Video duration in seconds
    #[arg(long)]
    pub duration: Option<f64>,

    /// JSON config file (defaults to $TIMECODE_MARKERS_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Cluster with a fixed threshold in seconds
    #[arg(long, conflicts_with = "threshold_fraction")]
    pub threshold_seconds: Option<f64>,

    /// Cluster with a threshold as a fraction of the duration
    #[arg(long)]
    pub threshold_fraction: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the marker groups
    Scan {
        #[command(flatten)]
        input: InputArgs,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the detail surface for a cursor position on the progress bar
    Locate {
        #[command(flatten)]
        input: InputArgs,

        /// Cursor offset from the bar's left edge, in pixels
        #[arg(long)]
        cursor_px: f64,

        /// Rendered width of the progress bar, in pixels
        #[arg(long)]
        width_px: f64,

        /// Override the configured pixel tolerance
        #[arg(long)]
        tolerance_px: Option<f64>,
    },
    /// Show statistics about the sources
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Scan { input, json }) => {
            scan(input, *json)?;
        }
        Some(Commands::Locate { input, cursor_px, width_px, tolerance_px }) => {
            locate(input, *cursor_px, *width_px, *tolerance_px)?;
        }
        Some(Commands::Stats { input }) => {
            show_stats(input)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn load_sources(input: &InputArgs) -> Result<Vec<TextSource>> {
    if input.description.is_none() && input.comments.is_none() {
        bail!("No input given: pass --description and/or --comments");
    }

    let mut sources = Vec::new();
    if let Some(path) = &input.description {
        sources.push(read_description_file(path)?);
    }
    if let Some(path) = &input.comments {
        sources.extend(parse_comments_file(path)?);
    }
    Ok(sources)
}

fn resolve_config(input: &InputArgs) -> Result<MarkerConfig> {
    let mut config = match input.config.clone().or_else(get_config_path) {
        Some(path) => MarkerConfig::load(&path)?,
        None => MarkerConfig::default(),
    };

    if let Some(seconds) = input.threshold_seconds {
        config.threshold = ClusterThreshold::Seconds(seconds);
    }
    if let Some(fraction) = input.threshold_fraction {
        config.threshold = ClusterThreshold::Fraction(fraction);
    }

    config.validate()?;
    Ok(config)
}

#[derive(Serialize)]
struct ScanMarker {
    anchor: String,
    anchor_offset_seconds: u32,
    position_fraction: Option<f64>,
    entries: Vec<DetailEntry>,
}

fn scan(input: &InputArgs, json: bool) -> Result<()> {
    let config = resolve_config(input)?;
    let sources = load_sources(input)?;
    let report = extract_report(&sources);

    let groups = cluster_records(&report.records, config.threshold, input.duration)
        .context("Cannot cluster by duration fraction without --duration (or use --threshold-seconds)")?;

    // Positions need a duration; a fixed threshold can still list groups without one
    let markers: Vec<ScanMarker> = match input.duration {
        Some(_) => build_index(groups, input.duration)?
            .markers()
            .iter()
            .map(|m| scan_marker(&m.group, Some(m.position_fraction)))
            .collect(),
        None => groups.iter().map(|g| scan_marker(g, None)).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&markers)?);
        return Ok(());
    }

    println!(
        "Found {} timestamps in {} sources ({} without text)",
        report.records.len(),
        report.sources_scanned,
        report.malformed.len()
    );
    println!("{} markers", markers.len());

    for marker in &markers {
        let position = marker
            .position_fraction
            .map(|p| format!("{:5.1}%", p * 100.0))
            .unwrap_or_else(|| "    --".to_string());
        println!();
        println!("{:>8}  {}  {} refs", marker.anchor, position, marker.entries.len());
        for entry in &marker.entries {
            println!(
                "    {:>8}  {:<11} {:<6} {}",
                entry.time_code,
                entry.kind.label(),
                entry.source_ref.to_string(),
                entry.text
            );
        }
    }

    Ok(())
}

fn scan_marker(group: &Group, position_fraction: Option<f64>) -> ScanMarker {
    ScanMarker {
        anchor: format_offset(group.anchor_offset_seconds()),
        anchor_offset_seconds: group.anchor_offset_seconds(),
        position_fraction,
        entries: DetailEntry::from_group(group),
    }
}

/// Prints the detail surface to stdout
struct ConsoleAdapter {
    rendered: bool,
}

impl PresentationAdapter for ConsoleAdapter {
    fn selection_changed(&mut self, change: &SelectionChange) {
        let Some(marker) = &change.current else {
            return;
        };
        self.rendered = true;

        println!("Marker at {}", format_offset(marker.anchor_offset_seconds()));
        for entry in DetailEntry::from_marker(marker) {
            println!("  [{} {}] {}", entry.kind.label(), entry.source_ref, entry.text);
        }
    }
}

fn locate(
    input: &InputArgs,
    cursor_px: f64,
    width_px: f64,
    tolerance_px: Option<f64>,
) -> Result<()> {
    let mut config = resolve_config(input)?;
    if let Some(tolerance_px) = tolerance_px {
        config.tolerance_px = tolerance_px;
        config.validate()?;
    }
    let sources = load_sources(input)?;

    let bar = ProgressBar::new(width_px);
    if !bar.is_measurable() {
        bail!("--width-px must be positive, got {}", width_px);
    }

    let tolerance = config.tolerance_px;
    let mut session = MarkerSession::new(config);
    session
        .rebuild(&sources, input.duration)
        .context("Cannot place markers without a positive --duration")?;

    let mut adapter = ConsoleAdapter { rendered: false };
    notify(&mut adapter, session.pointer_moved(bar, cursor_px, Instant::now()));

    if !adapter.rendered {
        println!("No marker within {} px of {} px", tolerance, cursor_px);
    }

    Ok(())
}

fn show_stats(input: &InputArgs) -> Result<()> {
    let config = resolve_config(input)?;
    let sources = load_sources(input)?;
    let report = extract_report(&sources);

    let in_description = report.records.iter().filter(|r| r.is_primary).count();
    let in_comments = report.records.len() - in_description;

    println!("Timecode Marker Statistics");
    println!("==========================");
    println!("Sources scanned: {}", report.sources_scanned);
    println!("  With timestamps: {}", report.contributing_sources());
    println!("  Without text: {}", report.malformed.len());
    println!("Timestamps: {}", report.records.len());
    println!("  In description: {}", in_description);
    println!("  In comments: {}", in_comments);

    match cluster_records(&report.records, config.threshold, input.duration) {
        Ok(groups) => {
            println!("Groups: {}", groups.len());
            if let Some(first) = groups.first() {
                println!("Earliest: {}", format_offset(first.anchor_offset_seconds()));
            }
            if let Some(last) = groups.last() {
                println!("Latest: {}", format_offset(last.anchor_offset_seconds()));
            }
        }
        Err(e) => {
            println!("Groups: unavailable ({})", e);
        }
    }

    Ok(())
}
