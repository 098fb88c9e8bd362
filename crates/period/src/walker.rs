//! Term boundary walks over an interval.

use chrono::NaiveDate;
use tracing::trace;

use crate::calculator::{BoundarySet, PeriodCalculator, PeriodCalculatorExt};
use crate::error::PeriodError;

/// Collects the start date of every term that begins within `[start, end]`.
///
/// The walk begins at the start of the term containing `start`. When
/// `trim_leading` is set and that term began before `start`, it is skipped
/// and the walk begins at the following term.
///
/// # Errors
///
/// Returns [`PeriodError::Calendar`] if a boundary is not representable.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kalends_period::{MonthCalculator, starting_dates};
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// let starts = starting_dates(&MonthCalculator, d(2024, 5, 15), d(2024, 7, 10), true).unwrap();
/// assert_eq!(starts.into_iter().collect::<Vec<_>>(), vec![d(2024, 6, 1), d(2024, 7, 1)]);
/// ```
pub fn starting_dates<C: PeriodCalculator + ?Sized>(
    calc: &C,
    start: NaiveDate,
    end: NaiveDate,
    trim_leading: bool,
) -> Result<BoundarySet, PeriodError> {
    let mut dates = BoundarySet::new();
    let mut cursor = calc.start_of_current(start)?;
    if trim_leading && cursor < start {
        cursor = calc.start_of_next(cursor)?;
    }
    while cursor <= end {
        dates.insert(cursor);
        cursor = calc.start_of_next(cursor)?;
    }
    trace!(%start, %end, trim_leading, n_starts = dates.len(), "collected starting dates");
    Ok(dates)
}

/// Collects the end date of every term from the one containing `start` up to
/// the last term allowed by `end`.
///
/// Without trimming the walk stops at the end of the term containing `end`.
/// With `trim_trailing` set it stops at the end of the previous term, so a
/// term still open on `end` is left out.
///
/// # Errors
///
/// Returns [`PeriodError::Calendar`] if a boundary is not representable.
pub fn ending_dates<C: PeriodCalculator + ?Sized>(
    calc: &C,
    start: NaiveDate,
    end: NaiveDate,
    trim_trailing: bool,
) -> Result<BoundarySet, PeriodError> {
    let mut dates = BoundarySet::new();
    let mut cursor = calc.end_of_current(start)?;
    let last = if trim_trailing {
        calc.end_of_previous(end)?
    } else {
        calc.end_of_current(end)?
    };
    while cursor <= last {
        dates.insert(cursor);
        // Re-derive from the next start: term lengths are not constant.
        cursor = calc.end_of_current(calc.start_of_next(cursor)?)?;
    }
    trace!(%start, %end, trim_trailing, n_ends = dates.len(), "collected ending dates");
    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DayCalculator, MonthCalculator, QuarterCalculator, WeekCalculator, YearCalculator};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn set(dates: &[NaiveDate]) -> BoundarySet {
        dates.iter().copied().collect()
    }

    #[test]
    fn day_starts_ignore_trim() {
        for trim in [true, false] {
            let starts = starting_dates(&DayCalculator, d(2024, 6, 3), d(2024, 6, 5), trim).unwrap();
            assert_eq!(starts, set(&[d(2024, 6, 3), d(2024, 6, 4), d(2024, 6, 5)]));
        }
    }

    #[test]
    fn day_ends_trailing_trim_drops_end_day() {
        let ends = ending_dates(&DayCalculator, d(2024, 6, 3), d(2024, 6, 5), true).unwrap();
        assert_eq!(ends, set(&[d(2024, 6, 3), d(2024, 6, 4)]));
        let ends = ending_dates(&DayCalculator, d(2024, 6, 3), d(2024, 6, 5), false).unwrap();
        assert_eq!(ends, set(&[d(2024, 6, 3), d(2024, 6, 4), d(2024, 6, 5)]));
    }

    #[test]
    fn week_starts() {
        // Monday 2024-06-03 through Thursday 2024-06-20.
        let start = d(2024, 6, 3);
        let end = d(2024, 6, 20);
        assert_eq!(
            starting_dates(&WeekCalculator, start, end, true).unwrap(),
            set(&[d(2024, 6, 9), d(2024, 6, 16)])
        );
        assert_eq!(
            starting_dates(&WeekCalculator, start, end, false).unwrap(),
            set(&[d(2024, 6, 2), d(2024, 6, 9), d(2024, 6, 16)])
        );
    }

    #[test]
    fn week_ends() {
        let start = d(2024, 6, 3);
        let end = d(2024, 6, 20);
        assert_eq!(
            ending_dates(&WeekCalculator, start, end, true).unwrap(),
            set(&[d(2024, 6, 8), d(2024, 6, 15)])
        );
        assert_eq!(
            ending_dates(&WeekCalculator, start, end, false).unwrap(),
            set(&[d(2024, 6, 8), d(2024, 6, 15), d(2024, 6, 22)])
        );
    }

    #[test]
    fn month_starts_and_ends() {
        let start = d(2024, 5, 15);
        let end = d(2024, 7, 10);
        assert_eq!(
            starting_dates(&MonthCalculator, start, end, false).unwrap(),
            set(&[d(2024, 5, 1), d(2024, 6, 1), d(2024, 7, 1)])
        );
        assert_eq!(
            ending_dates(&MonthCalculator, start, end, true).unwrap(),
            set(&[d(2024, 5, 31), d(2024, 6, 30)])
        );
        assert_eq!(
            ending_dates(&MonthCalculator, start, end, false).unwrap(),
            set(&[d(2024, 5, 31), d(2024, 6, 30), d(2024, 7, 31)])
        );
    }

    #[test]
    fn month_start_on_boundary_is_kept_when_trimming() {
        let starts = starting_dates(&MonthCalculator, d(2024, 5, 1), d(2024, 6, 10), true).unwrap();
        assert_eq!(starts, set(&[d(2024, 5, 1), d(2024, 6, 1)]));
    }

    #[test]
    fn month_ends_follow_varying_lengths() {
        let ends = ending_dates(&MonthCalculator, d(2024, 1, 31), d(2024, 4, 1), false).unwrap();
        assert_eq!(
            ends,
            set(&[d(2024, 1, 31), d(2024, 2, 29), d(2024, 3, 31), d(2024, 4, 30)])
        );
    }

    #[test]
    fn quarter_starts_and_ends() {
        let start = d(2024, 2, 15);
        let end = d(2024, 10, 10);
        assert_eq!(
            starting_dates(&QuarterCalculator, start, end, true).unwrap(),
            set(&[d(2024, 4, 1), d(2024, 7, 1), d(2024, 10, 1)])
        );
        assert_eq!(
            ending_dates(&QuarterCalculator, start, end, true).unwrap(),
            set(&[d(2024, 3, 31), d(2024, 6, 30), d(2024, 9, 30)])
        );
        assert_eq!(
            ending_dates(&QuarterCalculator, start, end, false).unwrap(),
            set(&[d(2024, 3, 31), d(2024, 6, 30), d(2024, 9, 30), d(2024, 12, 31)])
        );
    }

    #[test]
    fn year_starts_and_ends() {
        let start = d(2022, 3, 1);
        let end = d(2024, 6, 30);
        assert_eq!(
            starting_dates(&YearCalculator, start, end, true).unwrap(),
            set(&[d(2023, 1, 1), d(2024, 1, 1)])
        );
        assert_eq!(
            ending_dates(&YearCalculator, start, end, true).unwrap(),
            set(&[d(2022, 12, 31), d(2023, 12, 31)])
        );
    }

    #[test]
    fn trailing_trim_inside_single_term_is_empty() {
        let ends = ending_dates(&MonthCalculator, d(2024, 5, 2), d(2024, 5, 20), true).unwrap();
        assert!(ends.is_empty());
    }
}
