//! Sunday-anchored weekly periods.

use chrono::NaiveDate;
use kalends_calendar::{days_from_sunday, shift_days};

use crate::calculator::PeriodCalculator;
use crate::error::PeriodError;

/// Calculator for seven-day weeks running Sunday through Saturday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekCalculator;

impl PeriodCalculator for WeekCalculator {
    fn start_of_current(&self, date: NaiveDate) -> Result<NaiveDate, PeriodError> {
        Ok(shift_days(date, -i64::from(days_from_sunday(date)))?)
    }

    fn increment(&self, date: NaiveDate, units: i32) -> Result<NaiveDate, PeriodError> {
        Ok(shift_days(date, 7 * i64::from(units))?)
    }

    fn end_of_boundary(&self, period_start: NaiveDate) -> Result<NaiveDate, PeriodError> {
        Ok(shift_days(period_start, 6)?)
    }
}
