//! Commerce Report CLI
//!
//! Loads the order dataset, builds the dashboard report for a date range
//! and writes the bundle as JSON to stdout.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use commerce_reporting::loader::{LoadOptions, load_orders};
use commerce_reporting::{RecordStore, ReportAssembler, ReportingConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "commerce-reporting";

/// Build the order dashboard report for a date range
#[derive(Debug, Parser)]
#[command(name = "commerce-report", version, about)]
struct Args {
    /// Order dataset (CSV, `.gz` for gzip-compressed)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// First day of the range (YYYY-MM-DD), defaults to the earliest purchase
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day of the range, inclusive (YYYY-MM-DD), defaults to the latest purchase
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Number of categories in the top-categories view
    #[arg(long)]
    top: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ReportingConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ReportingConfig::from_env()?,
    };
    if let Some(top) = args.top {
        config.top_categories = top;
    }
    if let Some(data) = args.data {
        config.data_path = Some(data);
    }

    let data_path = config
        .data_path
        .clone()
        .context("No dataset given: pass --data or set data_path")?;
    let records = load_orders(&data_path, &LoadOptions::from(&config))
        .with_context(|| format!("Failed to load orders from {}", data_path.display()))?;
    let store = RecordStore::new(records);
    let assembler = ReportAssembler::new(&config);

    let bundle = match (args.start, args.end) {
        (None, None) => assembler.build_default_report(&store),
        (start, end) => {
            let full_range = store.full_range();
            let start = start
                .or_else(|| full_range.map(|range| range.start()))
                .context("Dataset is empty: --start is required")?;
            let end = end
                .or_else(|| full_range.map(|range| range.end()))
                .context("Dataset is empty: --end is required")?;
            assembler.build_report(&store, start, end)?
        }
    };

    info!(
        "Report covers {} of {} records",
        bundle.record_count,
        store.len()
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&bundle)?
    } else {
        serde_json::to_string(&bundle)?
    };
    println!("{json}");

    Ok(())
}

/// Initialize tracing with environment filter, logging to stderr
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", SERVICE_NAME.replace('-', "_")).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();
}
