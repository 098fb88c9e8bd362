//! Calendar-year periods.

use chrono::NaiveDate;
use kalends_calendar::{first_of_year, last_of_year, shift_years};

use crate::calculator::PeriodCalculator;
use crate::error::PeriodError;

/// Calculator for calendar years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearCalculator;

impl PeriodCalculator for YearCalculator {
    fn start_of_current(&self, date: NaiveDate) -> Result<NaiveDate, PeriodError> {
        Ok(first_of_year(date))
    }

    fn increment(&self, date: NaiveDate, units: i32) -> Result<NaiveDate, PeriodError> {
        Ok(shift_years(date, units)?)
    }

    fn end_of_boundary(&self, period_start: NaiveDate) -> Result<NaiveDate, PeriodError> {
        Ok(last_of_year(period_start))
    }
}
