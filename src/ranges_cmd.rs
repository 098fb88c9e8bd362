//! Ranges command: list the terms covering an interval.

use anyhow::{Context, Result};
use kalends_period::{PeriodCalculatorExt, PeriodRegistry};
use tracing::{info, info_span};

use crate::cli::IntervalArgs;
use crate::config::KalendsConfig;
use crate::output::{RangesReport, Render};

/// Run the ranges command.
pub fn run(args: IntervalArgs, config: &KalendsConfig) -> Result<()> {
    let _cmd = info_span!("ranges").entered();
    let report = build_report(&args, config, &PeriodRegistry::new())?;
    info!(n_ranges = report.ranges.len(), "computed term ranges");
    print!("{}", report.render(config.output_format(args.format))?);
    Ok(())
}

fn build_report(
    args: &IntervalArgs,
    config: &KalendsConfig,
    registry: &PeriodRegistry,
) -> Result<RangesReport> {
    let period = config.period_kind(args.period)?;
    let trim = config.trim_policy(args.trim_leading, args.trim_trailing);
    let calc = registry.get_provider(period)?;
    let ranges = calc
        .term_ranges(args.start, args.end, trim)
        .with_context(|| format!("failed to build {period} ranges"))?;
    Ok(RangesReport {
        period,
        trim,
        ranges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kalends_period::{PeriodError, PeriodKind, TrimPolicy};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn args(period: Option<PeriodKind>, start: NaiveDate, end: NaiveDate) -> IntervalArgs {
        IntervalArgs {
            period,
            start,
            end,
            trim_leading: None,
            trim_trailing: None,
            format: None,
        }
    }

    #[test]
    fn uses_config_defaults() {
        let config = KalendsConfig::default();
        let report = build_report(
            &args(None, d(2025, 1, 15), d(2025, 4, 10)),
            &config,
            &PeriodRegistry::new(),
        )
        .unwrap();
        assert_eq!(report.period, PeriodKind::Month);
        assert_eq!(report.trim, TrimPolicy::NONE);
        assert_eq!(report.ranges.len(), 4);
    }

    #[test]
    fn flags_override_config() {
        let mut a = args(Some(PeriodKind::Quarter), d(2024, 2, 15), d(2024, 10, 10));
        a.trim_leading = Some(true);
        a.trim_trailing = Some(true);
        let report = build_report(&a, &KalendsConfig::default(), &PeriodRegistry::new()).unwrap();
        assert_eq!(report.ranges.len(), 2);
    }

    #[test]
    fn inverted_interval_keeps_source_error() {
        let err = build_report(
            &args(None, d(2025, 2, 1), d(2025, 1, 1)),
            &KalendsConfig::default(),
            &PeriodRegistry::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PeriodError>(),
            Some(PeriodError::InvalidRange { .. })
        ));
    }

    #[test]
    fn missing_provider_is_reported() {
        let err = build_report(
            &args(Some(PeriodKind::Week), d(2025, 1, 1), d(2025, 2, 1)),
            &KalendsConfig::default(),
            &PeriodRegistry::empty(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "period provider 'week' is not implemented");
    }
}
