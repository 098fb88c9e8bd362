//! Period kind tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PeriodError;

/// The calendar granularity a calculator implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// A single calendar day.
    Day,
    /// A Sunday-anchored seven-day week.
    Week,
    /// A calendar month.
    Month,
    /// A three-month quarter starting in January, April, July or October.
    Quarter,
    /// A calendar year.
    Year,
}

impl PeriodKind {
    /// Every period kind, from finest to coarsest.
    pub const ALL: [PeriodKind; 5] = [
        PeriodKind::Day,
        PeriodKind::Week,
        PeriodKind::Month,
        PeriodKind::Quarter,
        PeriodKind::Year,
    ];

    /// Returns the lowercase name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            PeriodKind::Day => "day",
            PeriodKind::Week => "week",
            PeriodKind::Month => "month",
            PeriodKind::Quarter => "quarter",
            PeriodKind::Year => "year",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PeriodKind {
    type Err = PeriodError;

    /// Parses a kind name or one of the usual date-part abbreviations
    /// (`d`, `dd`, `wk`, `ww`, `m`, `mm`, `q`, `qq`, `yy`, `yyyy`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "d" | "dd" => Ok(PeriodKind::Day),
            "week" | "w" | "wk" | "ww" => Ok(PeriodKind::Week),
            "month" | "m" | "mm" => Ok(PeriodKind::Month),
            "quarter" | "q" | "qq" => Ok(PeriodKind::Quarter),
            "year" | "y" | "yy" | "yyyy" => Ok(PeriodKind::Year),
            _ => Err(PeriodError::UnknownPeriodKind {
                name: s.to_string(),
            }),
        }
    }
}
