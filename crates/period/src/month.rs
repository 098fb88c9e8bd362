//! Calendar-month periods.

use chrono::NaiveDate;
use kalends_calendar::{first_of_month, last_of_month, shift_months};

use crate::calculator::PeriodCalculator;
use crate::error::PeriodError;

/// Calculator for calendar months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthCalculator;

impl PeriodCalculator for MonthCalculator {
    fn start_of_current(&self, date: NaiveDate) -> Result<NaiveDate, PeriodError> {
        Ok(first_of_month(date))
    }

    fn increment(&self, date: NaiveDate, units: i32) -> Result<NaiveDate, PeriodError> {
        Ok(shift_months(date, units)?)
    }

    fn end_of_boundary(&self, period_start: NaiveDate) -> Result<NaiveDate, PeriodError> {
        Ok(last_of_month(period_start))
    }
}
