use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Flowstat streamflow statistics toolkit.
#[derive(Parser)]
#[command(
    name = "flowstat",
    version,
    about = "Percentile thresholds, runoff and cumulative flow for daily streamflow records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute percentile thresholds by day of year (or over the whole record).
    Percentiles(PercentilesArgs),
    /// Convert streamflow in cfs to runoff depth in mm.
    Runoff(RunoffArgs),
    /// Combine site runoff into area-weighted runoff for one geography.
    Geometric(GeometricArgs),
    /// Running totals of daily flow within each year.
    Cumulative(CumulativeArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output path; standard output when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: csv or json.
    #[arg(short, long, default_value = "csv")]
    pub format: String,
}

/// Arguments for the `percentiles` subcommand.
#[derive(clap::Args)]
pub struct PercentilesArgs {
    /// Path to input CSV with date and value columns.
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Override year type from config (calendar, water, climate).
    #[arg(long)]
    pub year_type: Option<String>,

    /// Override data type from config (daily, 7-day, 14-day, 28-day).
    #[arg(long)]
    pub data_type: Option<String>,

    /// Override quantile method from config.
    #[arg(long)]
    pub method: Option<String>,

    /// Override minimum years of record per day.
    #[arg(long)]
    pub min_years: Option<usize>,

    /// Keep only approved observations.
    #[arg(long)]
    pub approved_only: bool,

    /// Compute one set of thresholds over the whole record.
    #[arg(long, conflicts_with = "rank")]
    pub fixed: bool,

    /// Report each observation's percentile against its day's thresholds.
    #[arg(long)]
    pub rank: bool,
}

/// Arguments for the `runoff` subcommand.
#[derive(clap::Args)]
pub struct RunoffArgs {
    /// Path to input CSV with streamflow in cfs.
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Drainage area in square kilometres.
    #[arg(long)]
    pub drainage_area: f64,

    /// Override runoff period from config (annual, monthly, daily).
    #[arg(long)]
    pub frequency: Option<String>,
}

/// Arguments for the `geometric` subcommand.
#[derive(clap::Args)]
pub struct GeometricArgs {
    /// Geography identifier to compute runoff for.
    #[arg(long)]
    pub geoid: String,

    /// Path to weights CSV (site, geography, weight).
    #[arg(short, long)]
    pub weights: PathBuf,

    /// Site runoff CSV files. A file with a site column may hold several sites;
    /// otherwise the file stem names the site.
    #[arg(required = true)]
    pub sites: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// First date of the output (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last date of the output (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

/// Arguments for the `cumulative` subcommand.
#[derive(clap::Args)]
pub struct CumulativeArgs {
    /// Path to input CSV with date and value columns.
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Override year type from config (calendar, water, climate).
    #[arg(long)]
    pub year_type: Option<String>,

    /// Override where totals restart (calendar-year, year-type).
    #[arg(long)]
    pub accumulation: Option<String>,

    /// Keep only approved observations.
    #[arg(long)]
    pub approved_only: bool,
}
