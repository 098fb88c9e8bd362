//! Error types for the kalends-period crate.

use chrono::NaiveDate;
use kalends_calendar::CalendarError;

use crate::kind::PeriodKind;
use crate::trim::TrimPolicy;

/// Error type for all fallible operations in the kalends-period crate.
///
/// Variants fall into three groups:
///
/// - invalid arguments supplied by the caller (see [`PeriodError::is_invalid_argument`]),
/// - invalid internal state detected while pairing boundaries, which points at
///   a defect in boundary generation (see [`PeriodError::is_invalid_state`]),
/// - [`PeriodError::NotImplemented`] for a registry lookup miss.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PeriodError {
    /// Returned when a range is requested with `start > end`.
    #[error("start date {start} cannot be after end date {end}")]
    InvalidRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// Returned when no bucket dates are supplied for alignment.
    #[error("dates cannot be empty")]
    EmptyDates,

    /// Returned when bucket dates are not strictly ascending.
    #[error("dates must be strictly ascending: dates[{index}] ({current}) follows {previous}")]
    UnsortedDates {
        /// Index of the offending date.
        index: usize,
        /// The date preceding the offending one.
        previous: NaiveDate,
        /// The offending date.
        current: NaiveDate,
    },

    /// Returned when more than one value targets the same bucket date.
    #[error("values must be unique per date: duplicate value for {date}")]
    DuplicateValue {
        /// The date that received more than one value.
        date: NaiveDate,
    },

    /// Returned when a period kind name cannot be parsed.
    #[error("unknown period kind: '{name}' (expected day, week, month, quarter or year)")]
    UnknownPeriodKind {
        /// The name that failed to parse.
        name: String,
    },

    /// Returned when the start and end boundary counts cannot be paired
    /// under the active trim policy.
    #[error("cannot pair {starts} start boundaries with {ends} end boundaries ({trim})")]
    BoundaryCountMismatch {
        /// Number of start boundaries.
        starts: usize,
        /// Number of end boundaries.
        ends: usize,
        /// The trim policy in effect.
        trim: TrimPolicy,
    },

    /// Returned when a paired start precedes the previously paired start.
    #[error("start dates missorted: {current} is earlier than the previous start {previous}")]
    UnsortedStarts {
        /// The previously paired start.
        previous: NaiveDate,
        /// The out-of-order start.
        current: NaiveDate,
    },

    /// Returned when a paired end precedes the previously paired end.
    #[error("end dates missorted: {current} is earlier than the previous end {previous}")]
    UnsortedEnds {
        /// The previously paired end.
        previous: NaiveDate,
        /// The out-of-order end.
        current: NaiveDate,
    },

    /// Returned when a paired start falls after its paired end.
    #[error("term starting {start} would end before it begins ({end})")]
    InvertedTerm {
        /// The paired start.
        start: NaiveDate,
        /// The paired end.
        end: NaiveDate,
    },

    /// Returned when no calculator is registered for a period kind.
    #[error("period provider '{kind}' is not implemented")]
    NotImplemented {
        /// The period kind that was requested.
        kind: PeriodKind,
    },

    /// Calendar arithmetic failed, usually at the edge of the representable range.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl PeriodError {
    /// Returns `true` for errors caused by caller-supplied input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. }
                | Self::EmptyDates
                | Self::UnsortedDates { .. }
                | Self::DuplicateValue { .. }
                | Self::UnknownPeriodKind { .. }
        )
    }

    /// Returns `true` for contract violations detected while pairing boundaries.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::BoundaryCountMismatch { .. }
                | Self::UnsortedStarts { .. }
                | Self::UnsortedEnds { .. }
                | Self::InvertedTerm { .. }
        )
    }
}
