// src/models/catalog.rs

//! Periodical catalog: the year/month index of a publication.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A year and month pair, 1-based month.
///
/// The archive deals in plain calendar months with no day component, so
/// this is its own small type rather than a full date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A periodical's description plus its browsable year/month index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodicalCatalog {
    /// Publication kind as reported by the archive (e.g. "Газета")
    #[serde(rename = "type")]
    pub kind: String,

    /// Publication display name
    pub name: String,

    /// Free-text description, absent for some publications
    pub description: Option<String>,

    /// Archive URL of the publication
    pub url: String,

    /// Years with issues, in server-supplied order
    pub years: Vec<YearEntry>,
}

/// One year of a periodical's index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearEntry {
    pub year: i32,

    /// Archive URL for browsing this year
    pub url: String,

    /// Number of issues in this year
    pub count: u32,

    /// Months with issues, in server-supplied order.
    /// Each entry's `year_month.year` equals this entry's `year`.
    pub months: Vec<MonthEntry>,
}

/// One month of a year's index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthEntry {
    pub year_month: YearMonth,

    /// Archive URL for browsing this month, when the server provides one
    pub url: Option<String>,

    /// Number of issues in this month
    pub count: u32,
}
