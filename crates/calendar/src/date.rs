//! Date-only normalization and weekday anchoring.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

/// Conversion of date-like values to a date-only [`NaiveDate`].
///
/// Any time-of-day component is truncated. Zoned timestamps keep their
/// local calendar date; no time-zone conversion takes place.
pub trait CalendarDateExt {
    /// Returns the calendar date with the time component removed.
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDateExt for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDateExt for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDateExt for DateTime<Tz> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Returns the number of days elapsed since the most recent Sunday (0..=6).
///
/// Sunday itself yields 0 and Saturday yields 6.
pub fn days_from_sunday(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Returns January 1 of the year containing `date`.
pub fn first_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// Returns December 31 of the year containing `date`.
pub fn last_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}
