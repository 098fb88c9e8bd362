//! Date sequence generation.

use chrono::NaiveDate;

/// Generates every calendar date in the inclusive interval `[start, end]`.
///
/// Returns an empty vector when `start > end`. Month and year boundaries,
/// including leap days, are handled by the underlying date type.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kalends_calendar::daily_sequence;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let dates = daily_sequence(start, end);
/// assert_eq!(dates.len(), 3); // Feb 28, Feb 29, Mar 1
/// ```
pub fn daily_sequence(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let n_days = (end - start).num_days() as usize + 1;
    let mut dates = Vec::with_capacity(n_days);
    dates.extend(start.iter_days().take(n_days));
    dates
}
