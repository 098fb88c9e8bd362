//! Calendar-aware date shifting.
//!
//! Day shifts use fixed day counts. Month and year shifts follow calendar
//! month arithmetic: the day of month is kept where possible and clamped to
//! the last day of the target month otherwise (Jan 31 + 1 month is the last
//! day of February).

use chrono::{Days, Months, NaiveDate};

use crate::error::CalendarError;

/// Shifts `date` by a signed number of days.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result is not representable.
pub fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(step)
    } else {
        date.checked_sub_days(step)
    };
    shifted.ok_or(CalendarError::OutOfRange {
        date,
        amount: days,
        unit: "days",
    })
}

/// Shifts `date` by a signed number of calendar months, clamping the day of month.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result is not representable.
pub fn shift_months(date: NaiveDate, months: i32) -> Result<NaiveDate, CalendarError> {
    let step = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    };
    shifted.ok_or(CalendarError::OutOfRange {
        date,
        amount: i64::from(months),
        unit: "months",
    })
}

/// Shifts `date` by a signed number of calendar years.
///
/// February 29 maps to February 28 in a common target year.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result is not representable.
pub fn shift_years(date: NaiveDate, years: i32) -> Result<NaiveDate, CalendarError> {
    let months = years.checked_mul(12).ok_or(CalendarError::OutOfRange {
        date,
        amount: i64::from(years) * 12,
        unit: "months",
    })?;
    shift_months(date, months)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn days_forward_and_back() {
        assert_eq!(shift_days(d(2024, 2, 28), 1).unwrap(), d(2024, 2, 29));
        assert_eq!(shift_days(d(2024, 3, 1), -1).unwrap(), d(2024, 2, 29));
        assert_eq!(shift_days(d(2023, 12, 31), 1).unwrap(), d(2024, 1, 1));
        assert_eq!(shift_days(d(2023, 6, 15), 0).unwrap(), d(2023, 6, 15));
    }

    #[test]
    fn days_out_of_range() {
        let err = shift_days(NaiveDate::MAX, 1).unwrap_err();
        assert_eq!(
            err,
            CalendarError::OutOfRange {
                date: NaiveDate::MAX,
                amount: 1,
                unit: "days"
            }
        );
        assert!(shift_days(NaiveDate::MIN, -1).is_err());
    }

    #[test]
    fn months_clamp_to_month_end() {
        assert_eq!(shift_months(d(2024, 1, 31), 1).unwrap(), d(2024, 2, 29));
        assert_eq!(shift_months(d(2023, 1, 31), 1).unwrap(), d(2023, 2, 28));
        assert_eq!(shift_months(d(2024, 3, 31), -1).unwrap(), d(2024, 2, 29));
        assert_eq!(shift_months(d(2024, 5, 31), -1).unwrap(), d(2024, 4, 30));
    }

    #[test]
    fn months_cross_years() {
        assert_eq!(shift_months(d(2024, 11, 1), 3).unwrap(), d(2025, 2, 1));
        assert_eq!(shift_months(d(2024, 1, 1), -1).unwrap(), d(2023, 12, 1));
        assert_eq!(shift_months(d(2024, 1, 1), -25).unwrap(), d(2021, 12, 1));
    }

    #[test]
    fn months_out_of_range() {
        assert!(matches!(
            shift_months(NaiveDate::MAX, 1),
            Err(CalendarError::OutOfRange { unit: "months", .. })
        ));
    }

    #[test]
    fn years_leap_day() {
        assert_eq!(shift_years(d(2024, 2, 29), 1).unwrap(), d(2025, 2, 28));
        assert_eq!(shift_years(d(2024, 2, 29), 4).unwrap(), d(2028, 2, 29));
        assert_eq!(shift_years(d(2024, 7, 4), -1).unwrap(), d(2023, 7, 4));
    }

    #[test]
    fn years_overflow_multiplication() {
        assert!(shift_years(d(2024, 1, 1), i32::MAX).is_err());
    }
}
