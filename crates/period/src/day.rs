//! Daily periods.

use chrono::NaiveDate;
use kalends_calendar::shift_days;

use crate::calculator::PeriodCalculator;
use crate::error::PeriodError;

/// Calculator for single-day periods. Every date is its own term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayCalculator;

impl PeriodCalculator for DayCalculator {
    fn start_of_current(&self, date: NaiveDate) -> Result<NaiveDate, PeriodError> {
        Ok(date)
    }

    fn increment(&self, date: NaiveDate, units: i32) -> Result<NaiveDate, PeriodError> {
        Ok(shift_days(date, i64::from(units))?)
    }

    fn end_of_boundary(&self, period_start: NaiveDate) -> Result<NaiveDate, PeriodError> {
        Ok(period_start)
    }
}
