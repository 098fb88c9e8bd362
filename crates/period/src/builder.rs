//! Term range construction: pairs start and end boundaries into validated ranges.

use chrono::NaiveDate;
use tracing::debug;

use crate::calculator::PeriodCalculator;
use crate::error::PeriodError;
use crate::range::DateRange;
use crate::trim::TrimPolicy;
use crate::walker::{ending_dates, starting_dates};

/// Builds the ordered sequence of terms covering `[start, end]`.
///
/// Partial terms at either edge are kept or dropped according to `trim`.
/// The result is ascending and contiguous at the calculator's cadence.
///
/// # Errors
///
/// - [`PeriodError::InvalidRange`] if `start > end`.
/// - Any invalid-state error from [`pair_boundaries`], which indicates a
///   calculator producing inconsistent boundaries.
/// - [`PeriodError::Calendar`] if a boundary is not representable.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kalends_period::{MonthCalculator, TrimPolicy, term_ranges};
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// let ranges = term_ranges(&MonthCalculator, d(2025, 1, 15), d(2025, 4, 10), TrimPolicy::BOTH).unwrap();
/// assert_eq!(ranges.len(), 2);
/// assert_eq!(ranges[0].bounds(), Some((d(2025, 2, 1), d(2025, 2, 28))));
/// assert_eq!(ranges[1].bounds(), Some((d(2025, 3, 1), d(2025, 3, 31))));
/// ```
#[tracing::instrument(level = "debug", skip(calc))]
pub fn term_ranges<C: PeriodCalculator + ?Sized>(
    calc: &C,
    start: NaiveDate,
    end: NaiveDate,
    trim: TrimPolicy,
) -> Result<Vec<DateRange>, PeriodError> {
    if start > end {
        return Err(PeriodError::InvalidRange { start, end });
    }
    // BTreeSet iteration is ascending.
    let starts: Vec<NaiveDate> = starting_dates(calc, start, end, trim.leading)?
        .into_iter()
        .collect();
    let ends: Vec<NaiveDate> = ending_dates(calc, start, end, trim.trailing)?
        .into_iter()
        .collect();
    pair_boundaries(&starts, &ends, trim)
}

/// Pairs ascending start and end boundaries into date ranges.
///
/// The counts must agree with `trim`: equal when nothing is trimmed, and
/// otherwise the trimmed side may be exactly one shorter. End boundaries
/// before the first start are discarded. Pairing then proceeds by index over
/// the remaining ends and checks that starts and ends never decrease.
///
/// Returns an empty vector when either side is empty or no end follows the
/// first start.
///
/// # Errors
///
/// - [`PeriodError::BoundaryCountMismatch`] for counts that `trim` does not allow.
/// - [`PeriodError::UnsortedStarts`] / [`PeriodError::UnsortedEnds`] for
///   boundaries that are not ascending.
/// - [`PeriodError::InvertedTerm`] when a start is paired with an earlier end.
pub fn pair_boundaries(
    starts: &[NaiveDate],
    ends: &[NaiveDate],
    trim: TrimPolicy,
) -> Result<Vec<DateRange>, PeriodError> {
    validate_counts(starts.len(), ends.len(), trim)?;

    let Some(&first_start) = starts.first() else {
        return Ok(Vec::new());
    };
    if ends.is_empty() {
        return Ok(Vec::new());
    }

    let in_range_ends: Vec<NaiveDate> = ends
        .iter()
        .copied()
        .filter(|end| *end >= first_start)
        .collect();
    let Some(&first_end) = in_range_ends.first() else {
        return Ok(Vec::new());
    };

    let mut ranges = Vec::with_capacity(in_range_ends.len());
    let mut previous_start = first_start;
    let mut previous_end = first_end;
    for (i, &term_end) in in_range_ends.iter().enumerate() {
        let Some(&term_start) = starts.get(i) else {
            // More in-range ends than starts: the counts were valid but the
            // boundaries are not aligned.
            return Err(PeriodError::BoundaryCountMismatch {
                starts: starts.len(),
                ends: in_range_ends.len(),
                trim,
            });
        };
        if term_start < previous_start {
            return Err(PeriodError::UnsortedStarts {
                previous: previous_start,
                current: term_start,
            });
        }
        if term_end < previous_end {
            return Err(PeriodError::UnsortedEnds {
                previous: previous_end,
                current: term_end,
            });
        }
        if term_start > term_end {
            return Err(PeriodError::InvertedTerm {
                start: term_start,
                end: term_end,
            });
        }
        ranges.push(DateRange {
            start: Some(term_start),
            end: Some(term_end),
        });
        previous_start = term_start;
        previous_end = term_end;
    }

    debug!(
        n_starts = starts.len(),
        n_ends = ends.len(),
        n_ranges = ranges.len(),
        "paired term boundaries"
    );
    Ok(ranges)
}

/// Checks the start/end count relationship allowed by `trim`.
fn validate_counts(starts: usize, ends: usize, trim: TrimPolicy) -> Result<(), PeriodError> {
    let equal = starts == ends;
    let starts_short = starts + 1 == ends;
    let ends_short = ends + 1 == starts;
    let allowed = match (trim.leading, trim.trailing) {
        (false, false) => equal,
        (true, false) => equal || starts_short,
        (false, true) => equal || ends_short,
        (true, true) => equal || starts_short || ends_short,
    };
    if allowed {
        Ok(())
    } else {
        Err(PeriodError::BoundaryCountMismatch { starts, ends, trim })
    }
}
