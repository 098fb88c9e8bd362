//! The period calculator trait and the operations derived from it.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::builder;
use crate::error::PeriodError;
use crate::range::DateRange;
use crate::trim::TrimPolicy;
use crate::walker;

/// A set of unique period boundary dates, iterated in ascending order.
pub type BoundarySet = BTreeSet<NaiveDate>;

/// The three primitives that define a period granularity.
///
/// Everything else (term ends, next and previous terms, boundary walks and
/// term ranges) is provided by [`PeriodCalculatorExt`], which is implemented
/// for every calculator and cannot be overridden.
pub trait PeriodCalculator: fmt::Debug + Send + Sync {
    /// Returns the first date of the period containing `date`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::Calendar`] if the period start is not representable.
    fn start_of_current(&self, date: NaiveDate) -> Result<NaiveDate, PeriodError>;

    /// Moves `date` by `units` whole periods; negative `units` move backwards.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::Calendar`] if the result is not representable.
    fn increment(&self, date: NaiveDate, units: i32) -> Result<NaiveDate, PeriodError>;

    /// Returns the last date of the period beginning at `period_start`.
    ///
    /// Only ever called with a value produced by
    /// [`start_of_current`](Self::start_of_current). Use
    /// [`PeriodCalculatorExt::end_of_current`] for arbitrary dates.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::Calendar`] if the period end is not representable.
    fn end_of_boundary(&self, period_start: NaiveDate) -> Result<NaiveDate, PeriodError>;
}

/// Boundary and range operations shared by every [`PeriodCalculator`].
pub trait PeriodCalculatorExt: PeriodCalculator {
    /// Returns the last date of the period containing `date`.
    fn end_of_current(&self, date: NaiveDate) -> Result<NaiveDate, PeriodError> {
        let start = self.start_of_current(date)?;
        self.end_of_boundary(start)
    }

    /// Returns the first date of the period after the one containing `date`.
    fn start_of_next(&self, date: NaiveDate) -> Result<NaiveDate, PeriodError> {
        let start = self.start_of_current(date)?;
        self.increment(start, 1)
    }

    /// Returns the last date of the period before the one containing `date`.
    fn end_of_previous(&self, date: NaiveDate) -> Result<NaiveDate, PeriodError> {
        // Term lengths vary, so step back first and then find that term's end.
        let previous = self.increment(date, -1)?;
        self.end_of_current(previous)
    }

    /// Collects every period start in `[start, end]`. See [`crate::starting_dates`].
    fn starting_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        trim_leading: bool,
    ) -> Result<BoundarySet, PeriodError> {
        walker::starting_dates(self, start, end, trim_leading)
    }

    /// Collects every period end for `[start, end]`. See [`crate::ending_dates`].
    fn ending_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        trim_trailing: bool,
    ) -> Result<BoundarySet, PeriodError> {
        walker::ending_dates(self, start, end, trim_trailing)
    }

    /// Builds the ordered term ranges covering `[start, end]`. See [`crate::term_ranges`].
    fn term_ranges(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        trim: TrimPolicy,
    ) -> Result<Vec<DateRange>, PeriodError> {
        builder::term_ranges(self, start, end, trim)
    }
}

impl<C: PeriodCalculator + ?Sized> PeriodCalculatorExt for C {}
