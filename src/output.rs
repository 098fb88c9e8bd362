//! Rendering of command results as text or JSON.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use kalends_period::{DateRange, PeriodKind, TrimPolicy};
use serde::Serialize;

use crate::config::OutputFormat;

/// Term ranges computed for an interval.
#[derive(Debug, Serialize)]
pub struct RangesReport {
    pub period: PeriodKind,
    pub trim: TrimPolicy,
    pub ranges: Vec<DateRange>,
}

/// Start and end boundaries computed for an interval.
#[derive(Debug, Serialize)]
pub struct BoundariesReport {
    pub period: PeriodKind,
    pub trim: TrimPolicy,
    pub starts: Vec<NaiveDate>,
    pub ends: Vec<NaiveDate>,
}

/// The term containing a date and its neighbours.
#[derive(Debug, Serialize)]
pub struct PeriodReport {
    pub period: PeriodKind,
    pub date: NaiveDate,
    pub start_of_current: NaiveDate,
    pub end_of_current: NaiveDate,
    pub start_of_next: NaiveDate,
    pub end_of_previous: NaiveDate,
}

/// Something that can be printed in every [`OutputFormat`].
pub trait Render: Serialize {
    fn render_text(&self) -> String;

    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("failed to serialize output as JSON")
            }
        }
    }
}

impl Render for RangesReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for range in &self.ranges {
            let _ = writeln!(out, "{range}");
        }
        out
    }
}

impl Render for BoundariesReport {
    fn render_text(&self) -> String {
        let mut out = String::from("starts:\n");
        for date in &self.starts {
            let _ = writeln!(out, "  {date}");
        }
        out.push_str("ends:\n");
        for date in &self.ends {
            let _ = writeln!(out, "  {date}");
        }
        out
    }
}

impl Render for PeriodReport {
    fn render_text(&self) -> String {
        format!(
            "period:           {}\n\
             date:             {}\n\
             start of current: {}\n\
             end of current:   {}\n\
             start of next:    {}\n\
             end of previous:  {}\n",
            self.period,
            self.date,
            self.start_of_current,
            self.end_of_current,
            self.start_of_next,
            self.end_of_previous,
        )
    }
}
