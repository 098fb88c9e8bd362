//! Calendar quarter computation.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Returns the quarter (1..=4) containing `month`.
///
/// Months are grouped in blocks of three starting in January.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
///
/// # Examples
///
/// ```
/// use kalends_calendar::quarter_of;
///
/// assert_eq!(quarter_of(1).unwrap(), 1);
/// assert_eq!(quarter_of(5).unwrap(), 2);
/// assert_eq!(quarter_of(12).unwrap(), 4);
/// ```
pub fn quarter_of(month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok((month - 1) / 3 + 1)
}

/// Returns the first month (1, 4, 7 or 10) of the quarter containing `month`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn quarter_start_month(month: u32) -> Result<u32, CalendarError> {
    let quarter = quarter_of(month)?;
    Ok((quarter - 1) * 3 + 1)
}

/// Returns the first day of the quarter containing `date`.
pub fn first_of_quarter(date: NaiveDate) -> NaiveDate {
    let month = (date.month() - 1) / 3 * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
}
