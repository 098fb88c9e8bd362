//! Alignment of dated observations onto bucket dates.
//!
//! Typical use is filling a chart or report series: the bucket dates come
//! from [`starting_dates`](crate::starting_dates) or a daily sequence, the
//! observations from storage, and every bucket receives at most one value.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::PeriodError;

/// Places each observation at the index of its bucket date.
///
/// Buckets without an observation are `None`. Observations whose date is
/// not a bucket date are ignored.
///
/// # Errors
///
/// - [`PeriodError::EmptyDates`] if `dates` is empty.
/// - [`PeriodError::UnsortedDates`] if `dates` is not strictly ascending.
/// - [`PeriodError::DuplicateValue`] if two observations share a bucket date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kalends_period::align_to_dates;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
/// let aligned = align_to_dates(&[d(1), d(2), d(3)], [(d(3), 30), (d(1), 10)]).unwrap();
/// assert_eq!(aligned, vec![Some(10), None, Some(30)]);
/// ```
pub fn align_to_dates<T, I>(dates: &[NaiveDate], values: I) -> Result<Vec<Option<T>>, PeriodError>
where
    I: IntoIterator<Item = (NaiveDate, T)>,
{
    if dates.is_empty() {
        return Err(PeriodError::EmptyDates);
    }
    for (i, pair) in dates.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(PeriodError::UnsortedDates {
                index: i + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }

    let index: HashMap<NaiveDate, usize> = dates
        .iter()
        .enumerate()
        .map(|(i, date)| (*date, i))
        .collect();
    let mut points: Vec<Option<T>> = std::iter::repeat_with(|| None).take(dates.len()).collect();
    for (date, value) in values {
        let Some(&slot) = index.get(&date) else {
            continue;
        };
        if points[slot].is_some() {
            return Err(PeriodError::DuplicateValue { date });
        }
        points[slot] = Some(value);
    }
    Ok(points)
}

/// Like [`align_to_dates`], filling buckets without an observation with `T::default()`.
///
/// # Errors
///
/// Same as [`align_to_dates`].
pub fn align_to_dates_or_default<T, I>(dates: &[NaiveDate], values: I) -> Result<Vec<T>, PeriodError>
where
    T: Default,
    I: IntoIterator<Item = (NaiveDate, T)>,
{
    let points = align_to_dates(dates, values)?;
    Ok(points.into_iter().map(Option::unwrap_or_default).collect())
}
