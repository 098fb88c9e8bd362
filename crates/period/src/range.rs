//! Inclusive date ranges.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PeriodError;

/// An inclusive pair of calendar dates.
///
/// Either bound may be absent. Equality compares both fields as they are:
/// two absent bounds are equal, an absent bound never equals a present one.
/// Ranges built through [`DateRange::new`] always have `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First date of the range, if set.
    pub start: Option<NaiveDate>,
    /// Last date of the range, if set.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a bounded range.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidRange`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::InvalidRange { start, end });
        }
        Ok(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    /// Returns both bounds when the range is fully bounded.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }

    /// Returns `true` if `date` lies within the range. An absent bound is open.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| start <= date) && self.end.is_none_or(|end| date <= end)
    }

    /// Returns the number of days covered, counting both ends.
    ///
    /// `None` for ranges with an absent bound.
    pub fn num_days(&self) -> Option<i64> {
        let (start, end) = self.bounds()?;
        Some((end - start).num_days() + 1)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "{start}")?,
            None => f.write_str("unset")?,
        }
        f.write_str(" .. ")?;
        match self.end {
            Some(end) => write!(f, "{end}"),
            None => f.write_str("unset"),
        }
    }
}
