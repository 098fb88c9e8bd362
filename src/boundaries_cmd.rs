//! Boundaries command: list term start and end dates for an interval.

use anyhow::{Context, Result};
use kalends_period::{PeriodCalculatorExt, PeriodError, PeriodRegistry};
use tracing::{info, info_span};

use crate::cli::IntervalArgs;
use crate::config::KalendsConfig;
use crate::output::{BoundariesReport, Render};

/// Run the boundaries command.
pub fn run(args: IntervalArgs, config: &KalendsConfig) -> Result<()> {
    let _cmd = info_span!("boundaries").entered();
    let period = config.period_kind(args.period)?;
    let trim = config.trim_policy(args.trim_leading, args.trim_trailing);
    let registry = PeriodRegistry::new();
    let calc = registry.get_provider(period)?;

    if args.start > args.end {
        return Err(PeriodError::InvalidRange {
            start: args.start,
            end: args.end,
        }
        .into());
    }
    let starts = calc
        .starting_dates(args.start, args.end, trim.leading)
        .with_context(|| format!("failed to walk {period} start boundaries"))?;
    let ends = calc
        .ending_dates(args.start, args.end, trim.trailing)
        .with_context(|| format!("failed to walk {period} end boundaries"))?;
    info!(n_starts = starts.len(), n_ends = ends.len(), "collected boundaries");

    let report = BoundariesReport {
        period,
        trim,
        starts: starts.into_iter().collect(),
        ends: ends.into_iter().collect(),
    };
    print!("{}", report.render(config.output_format(args.format))?);
    Ok(())
}
