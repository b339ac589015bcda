//! Folio CLI — print the dashboard's derived data without the TUI.
//!
//! Commands:
//! - `summary` — resolved window and the three headline metrics
//! - `series` — portfolio points inside the window
//! - `news` — market updates inside the window
//! - `allocation` — allocation slices with their share of the total
//! - `strategies` — strategy ROI and the details table

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use folio_core::domain::allocation::shares;
use folio_core::domain::{AllocationSlice, StrategyDetail, StrategyRecord};
use folio_core::range::parse_anchor;
use folio_core::view::derive_view;
use folio_core::{format, DashboardView, Dataset, DateInterval, FolioConfig, Metrics, Selection, TimeRange};

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Folio CLI — portfolio dashboard data from the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file. Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Anchor date (YYYY-MM-DD or "today"). Without one the window is unbounded.
    #[arg(long, global = true)]
    anchor: Option<String>,

    /// Time range: all, 1y, 6m, 1m. Unknown keywords mean all.
    #[arg(long, global = true)]
    range: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Resolved window plus total value, daily P&L and win rate.
    Summary,
    /// Portfolio points inside the window.
    Series,
    /// Market updates inside the window.
    News,
    /// Allocation slices with share of total.
    Allocation,
    /// Strategy ROI and details.
    Strategies,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = FolioConfig::load(cli.config.as_deref())?;
    init_tracing(&loaded.config)?;
    loaded.report();
    let config = loaded.config;

    let today = chrono::Local::now().date_naive();
    let selection = selection_from_args(&cli, &config, today)?;
    tracing::debug!(
        anchor = ?selection.anchor,
        range = %selection.range,
        "resolved selection"
    );

    let dataset = Dataset::sample();
    let view = derive_view(&selection, &dataset);

    match cli.command {
        Commands::Summary => run_summary(&selection, &view, cli.json),
        Commands::Series => run_series(&view, cli.json),
        Commands::News => run_news(&view, cli.json),
        Commands::Allocation => run_allocation(&dataset.allocation, cli.json),
        Commands::Strategies => {
            run_strategies(&dataset.strategies, &dataset.strategy_details, cli.json)
        }
    }
}

/// `RUST_LOG` wins; otherwise the config level (after `FOLIO_LOG`).
fn init_tracing(config: &FolioConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.log_level()?).context("building log filter")?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
}

/// Flags win over the config file; a missing anchor stays missing.
fn selection_from_args(cli: &Cli, config: &FolioConfig, today: NaiveDate) -> Result<Selection> {
    let anchor = match cli.anchor.as_deref() {
        Some(raw) => Some(parse_anchor(raw, today).context("parsing --anchor")?),
        None => config.dashboard.anchor,
    };
    let range = match cli.range.as_deref() {
        Some(keyword) => {
            let range = TimeRange::from_keyword(keyword);
            if range.keyword() != keyword.trim().to_ascii_lowercase() {
                tracing::debug!(keyword, "unknown range keyword, showing all");
            }
            range
        }
        None => config.dashboard.default_range,
    };
    Ok(Selection::new(anchor, range))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{out}");
    Ok(())
}

fn window_label(interval: Option<DateInterval>) -> String {
    match interval {
        Some(i) => format!("{} to {}", i.start, i.end),
        None => "unbounded".to_string(),
    }
}

#[derive(Serialize)]
struct SummaryOutput {
    range: TimeRange,
    anchor: Option<NaiveDate>,
    interval: Option<DateInterval>,
    #[serde(flatten)]
    metrics: Metrics,
}

fn run_summary(selection: &Selection, view: &DashboardView, json: bool) -> Result<()> {
    if json {
        return print_json(&SummaryOutput {
            range: selection.range,
            anchor: selection.anchor,
            interval: view.interval,
            metrics: view.metrics,
        });
    }

    let m = &view.metrics;
    println!("Range:       {}", selection.range.label());
    println!("Window:      {}", window_label(view.interval));
    println!("Total Value: {}", format::dollars(m.total_value));
    println!("Daily P&L:   {}", format::signed(m.daily_pl));
    println!("Win Rate:    {}%", m.win_rate);
    Ok(())
}

fn run_series(view: &DashboardView, json: bool) -> Result<()> {
    if json {
        return print_json(&view.portfolio);
    }
    if view.portfolio.is_empty() {
        println!("No portfolio data in {}", window_label(view.interval));
        return Ok(());
    }
    println!("{:<8} {:>12}", "Month", "Value");
    println!("{}", "-".repeat(21));
    for point in &view.portfolio {
        println!("{:<8} {:>12}", point.period.to_string(), format::dollars(point.value));
    }
    Ok(())
}

fn run_news(view: &DashboardView, json: bool) -> Result<()> {
    if json {
        return print_json(&view.news);
    }
    if view.news.is_empty() {
        println!("No market updates in {}", window_label(view.interval));
        return Ok(());
    }
    for update in &view.news {
        println!(
            "{}  {:<8}  {}",
            update.date,
            update.sentiment.label(),
            update.headline
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct AllocationRow<'a> {
    label: &'a str,
    percent: f64,
    share: f64,
}

fn run_allocation(slices: &[AllocationSlice], json: bool) -> Result<()> {
    let rows: Vec<AllocationRow> = slices
        .iter()
        .zip(shares(slices))
        .map(|(s, share)| AllocationRow {
            label: &s.label,
            percent: s.percent,
            share,
        })
        .collect();

    if json {
        return print_json(&rows);
    }
    println!("{:<14} {:>6}", "Asset", "Share");
    println!("{}", "-".repeat(21));
    for row in &rows {
        println!("{:<14} {:>6}", row.label, format::percent(row.share * 100.0));
    }
    Ok(())
}

#[derive(Serialize)]
struct StrategiesOutput<'a> {
    performance: &'a [StrategyRecord],
    details: &'a [StrategyDetail],
}

fn run_strategies(
    performance: &[StrategyRecord],
    details: &[StrategyDetail],
    json: bool,
) -> Result<()> {
    if json {
        return print_json(&StrategiesOutput {
            performance,
            details,
        });
    }

    println!("Performance");
    for s in performance {
        println!("  {:<20} {:>6}", s.label, format::percent(s.roi_percent));
    }
    println!();
    println!(
        "{:<20} {:>6} {:>6} {:>9}",
        "Strategy", "ROI", "CAGR", "Drawdown"
    );
    println!("{}", "-".repeat(44));
    for d in details {
        println!(
            "{:<20} {:>6} {:>6} {:>9}",
            d.label,
            format::signed_percent(d.roi_percent),
            format::percent(d.cagr_percent),
            format::percent(d.drawdown_percent)
        );
    }
    Ok(())
}
