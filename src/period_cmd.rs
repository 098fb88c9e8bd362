//! Period command: show the term containing a date.

use anyhow::Result;
use chrono::NaiveDate;
use kalends_period::{PeriodCalculator, PeriodCalculatorExt, PeriodKind, PeriodRegistry};
use tracing::info_span;

use crate::cli::PeriodArgs;
use crate::config::KalendsConfig;
use crate::output::{PeriodReport, Render};

/// Run the period command.
pub fn run(args: PeriodArgs, config: &KalendsConfig) -> Result<()> {
    let period = config.period_kind(args.period)?;
    let _cmd = info_span!("period", %period, date = %args.date).entered();
    let registry = PeriodRegistry::new();
    let report = describe(registry.get_provider(period)?, period, args.date)?;
    print!("{}", report.render(config.output_format(args.format))?);
    Ok(())
}

fn describe(calc: &dyn PeriodCalculator, period: PeriodKind, date: NaiveDate) -> Result<PeriodReport> {
    Ok(PeriodReport {
        period,
        date,
        start_of_current: calc.start_of_current(date)?,
        end_of_current: calc.end_of_current(date)?,
        start_of_next: calc.start_of_next(date)?,
        end_of_previous: calc.end_of_previous(date)?,
    })
}
