//! Calendar-quarter periods.

use chrono::NaiveDate;
use kalends_calendar::{CalendarError, first_of_quarter, last_of_month, shift_months};

use crate::calculator::PeriodCalculator;
use crate::error::PeriodError;

/// Calculator for three-month quarters beginning in January, April, July and October.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuarterCalculator;

impl PeriodCalculator for QuarterCalculator {
    fn start_of_current(&self, date: NaiveDate) -> Result<NaiveDate, PeriodError> {
        Ok(first_of_quarter(date))
    }

    fn increment(&self, date: NaiveDate, units: i32) -> Result<NaiveDate, PeriodError> {
        let months = units.checked_mul(3).ok_or(CalendarError::OutOfRange {
            date,
            amount: i64::from(units) * 3,
            unit: "months",
        })?;
        Ok(shift_months(date, months)?)
    }

    fn end_of_boundary(&self, period_start: NaiveDate) -> Result<NaiveDate, PeriodError> {
        let third_month = shift_months(period_start, 2)?;
        Ok(last_of_month(third_month))
    }
}
