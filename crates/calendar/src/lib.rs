//! # kalends-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar, built on
//! [`chrono::NaiveDate`].
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDateTime / DateTime"] -->|".calendar_date()"| B["NaiveDate"]
//!     B -->|"shift_days() / shift_months()"| B
//!     B -->|"first_of_month() / last_of_month()"| C["month bounds"]
//!     B -->|"first_of_quarter()"| D["quarter start"]
//!     B -->|"days_from_sunday()"| E["week anchor"]
//!     B -->|"daily_sequence()"| F["Vec of NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use kalends_calendar::{days_in_month, shift_months, quarter_of, daily_sequence};
//!
//! // Month lengths
//! assert_eq!(days_in_month(2024, 2).unwrap(), 29);
//!
//! // Calendar-aware shifting clamps to the month end
//! let jan31 = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
//! let feb = shift_months(jan31, 1).unwrap();
//! assert_eq!(feb, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
//!
//! // Quarters
//! assert_eq!(quarter_of(11).unwrap(), 4);
//!
//! // Sequences
//! let dates = daily_sequence(jan31, feb);
//! assert_eq!(dates.len(), 29);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Time truncation, Sunday anchoring, year bounds |
//! | `month` | Leap years, month lengths, month bounds |
//! | `quarter` | Quarter numbering and quarter starts |
//! | `shift` | Day, month and year shifting |
//! | `sequence` | Daily date sequences |
//! | `error` | Error types |

mod date;
mod error;
mod month;
mod quarter;
mod sequence;
mod shift;

pub use date::{CalendarDateExt, days_from_sunday, first_of_year, last_of_year};
pub use error::CalendarError;
pub use month::{days_in_month, first_of_month, is_leap_year, last_of_month, ymd};
pub use quarter::{first_of_quarter, quarter_of, quarter_start_month};
pub use sequence::daily_sequence;
pub use shift::{shift_days, shift_months, shift_years};
