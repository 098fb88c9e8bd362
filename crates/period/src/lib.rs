//! # kalends-period
//!
//! Period boundaries and period-aligned date ranges ("terms") for days,
//! Sunday-anchored weeks, months, quarters and years.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["PeriodKind"] -->|"PeriodRegistry::get_provider()"| B["dyn PeriodCalculator"]
//!     B -->|"start_of_current / increment / end_of_boundary"| C["PeriodCalculatorExt"]
//!     C -->|"starting_dates()"| D["BoundarySet (starts)"]
//!     C -->|"ending_dates()"| E["BoundarySet (ends)"]
//!     D --> F["pair_boundaries()"]
//!     E --> F
//!     F --> G["Vec of DateRange"]
//! ```
//!
//! Each calculator implements three primitives. Every other operation is
//! derived once in [`PeriodCalculatorExt`], so all five kinds share the same
//! end-of-term, next-term, previous-term and range logic.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use kalends_period::{PeriodCalculatorExt, PeriodKind, PeriodRegistry, TrimPolicy};
//!
//! let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
//! let registry = PeriodRegistry::new();
//! let month = registry.get_provider(PeriodKind::Month).unwrap();
//!
//! // Boundaries around a single date
//! assert_eq!(month.end_of_current(d(2024, 2, 10)).unwrap(), d(2024, 2, 29));
//! assert_eq!(month.end_of_previous(d(2024, 3, 31)).unwrap(), d(2024, 2, 29));
//!
//! // Terms over an interval
//! let ranges = month.term_ranges(d(2025, 1, 15), d(2025, 4, 10), TrimPolicy::NONE).unwrap();
//! assert_eq!(ranges.len(), 4);
//! assert_eq!(ranges[3].bounds(), Some((d(2025, 4, 1), d(2025, 4, 30))));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calculator` | `PeriodCalculator` primitives and derived `PeriodCalculatorExt` |
//! | `day`, `week`, `month`, `quarter`, `year` | Calculators per kind |
//! | `walker` | Start and end boundary walks over an interval |
//! | `builder` | Boundary pairing and validation into term ranges |
//! | `registry` | Kind to calculator lookup |
//! | `range` | `DateRange` value type |
//! | `trim` | Partial-term trimming policy |
//! | `kind` | `PeriodKind` tag |
//! | `series` | Aligning dated observations onto bucket dates |
//! | `error` | Error types |

mod builder;
mod calculator;
mod day;
mod error;
mod kind;
mod month;
mod quarter;
mod range;
mod registry;
mod series;
mod trim;
mod walker;
mod week;
mod year;

pub use builder::{pair_boundaries, term_ranges};
pub use calculator::{BoundarySet, PeriodCalculator, PeriodCalculatorExt};
pub use day::DayCalculator;
pub use error::PeriodError;
pub use kind::PeriodKind;
pub use month::MonthCalculator;
pub use quarter::QuarterCalculator;
pub use range::DateRange;
pub use registry::PeriodRegistry;
pub use series::{align_to_dates, align_to_dates_or_default};
pub use trim::TrimPolicy;
pub use walker::{ending_dates, starting_dates};
pub use week::WeekCalculator;
pub use year::YearCalculator;
