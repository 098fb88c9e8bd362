//! Error types for the kalends-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the kalends-calendar crate.
///
/// This enum covers invalid month or day components and arithmetic that
/// would leave the range of dates representable by [`NaiveDate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year/month/day triple does not name a Gregorian date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u32,
        /// The day that was provided.
        day: u32,
    },

    /// Returned when shifting a date leaves the supported date range.
    #[error("shifting {date} by {amount} {unit} leaves the supported date range")]
    OutOfRange {
        /// The date that was being shifted.
        date: NaiveDate,
        /// The signed shift amount.
        amount: i64,
        /// The unit of the shift (`"days"` or `"months"`).
        unit: &'static str,
    },
}
