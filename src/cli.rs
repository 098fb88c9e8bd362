use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use kalends_calendar::CalendarDateExt;
use kalends_period::PeriodKind;

use crate::config::OutputFormat;

/// Kalends calendar period engine.
#[derive(Parser)]
#[command(
    name = "kalends",
    version,
    about = "Term boundaries and period-aligned date ranges"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: kalends.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List the terms covering an interval.
    Ranges(IntervalArgs),
    /// List the start and end boundaries of the terms covering an interval.
    Boundaries(IntervalArgs),
    /// Show the term containing a date and its neighbours.
    Period(PeriodArgs),
}

/// Arguments shared by `ranges` and `boundaries`.
#[derive(clap::Args)]
pub struct IntervalArgs {
    /// Period kind (day, week, month, quarter, year). Overrides config.
    #[arg(short, long)]
    pub period: Option<PeriodKind>,

    /// First date of the interval (YYYY-MM-DD, time part ignored).
    #[arg(short, long, value_parser = parse_date)]
    pub start: NaiveDate,

    /// Last date of the interval (YYYY-MM-DD, time part ignored).
    #[arg(short, long, value_parser = parse_date)]
    pub end: NaiveDate,

    /// Drop the term already open on the start date.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub trim_leading: Option<bool>,

    /// Drop the term still open on the end date.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub trim_trailing: Option<bool>,

    /// Output format. Overrides config.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `period` subcommand.
#[derive(clap::Args)]
pub struct PeriodArgs {
    /// Period kind (day, week, month, quarter, year). Overrides config.
    #[arg(short, long)]
    pub period: Option<PeriodKind>,

    /// Reference date (YYYY-MM-DD, time part ignored).
    #[arg(short, long, value_parser = parse_date)]
    pub date: NaiveDate,

    /// Output format. Overrides config.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Parses `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`, keeping only the date.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|datetime| datetime.calendar_date())
        .map_err(|_| format!("invalid date '{s}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"))
}
