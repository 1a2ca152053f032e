// src/models/issue.rs

//! Issue listings: one paginated page of a periodical's issues for a month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A structured issue-number annotation, as in "№ 5 (120)":
/// the 5th issue of its year, 120th since the publication began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueNumber {
    /// Sequence number within the publication year
    pub year_sequence: u32,

    /// Sequence number since the first issue
    pub total_sequence: u32,
}

/// One page of a month's issue listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssuePage {
    /// Publication kind as reported by the archive
    #[serde(rename = "type")]
    pub kind: String,

    /// Publication display name
    pub name: String,

    /// Archive URL of the listing
    pub url: String,

    /// Issues on this page, in server-supplied order
    pub issues: Vec<IssueEntry>,

    /// Offset to resupply for the next page; `None` at the end of the
    /// sequence. The client keeps no pagination state of its own.
    pub next_offset: Option<u32>,
}

/// A single issue of a periodical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueEntry {
    /// Free-text title, e.g. "Русское слово, 7 января 1917, №5 (298)"
    pub title: String,

    /// URL of the cover thumbnail
    pub image_url: String,

    /// Relative URL of the issue's detail page, `/books/<id>/...`
    pub detail_url: String,

    /// Publication date, when the title carries one
    pub date: Option<NaiveDate>,

    /// Issue-number annotation, when the title carries one
    pub issue_number: Option<IssueNumber>,

    /// Numeric book id extracted from `detail_url`; always present
    pub book_id: String,
}
