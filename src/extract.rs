// src/extract.rs

//! Free-text extraction from archive payloads.
//!
//! Issue titles optionally carry a publication date ("12 марта, 1905") and
//! an issue-number annotation ("№ 5 (120)"); book detail URLs carry the
//! numeric book id. Dates and issue numbers soft-fail to `None` because
//! most titles legitimately lack them. Book-id extraction is fatal: the
//! detail URL comes from the trusted API, so a mismatch means the upstream
//! contract changed.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{AppError, Result};
use crate::locale::{genitive_month_number, genitive_month_pattern};
use crate::models::IssueNumber;

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            r"(?P<day>\d+)\s*(?P<month>{})\s*,?\s*(?P<year>\d+)",
            genitive_month_pattern()
        );
        Regex::new(&pattern).expect("date pattern is valid")
    })
}

fn issue_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The archive serves the № sign either as proper UTF-8 or as the
    // mojibake sequence "â„–" (its UTF-8 bytes re-decoded as Latin-1),
    // so both literal markers are accepted.
    RE.get_or_init(|| {
        Regex::new(r"(?:№|â„–)\s*(?P<year>\d+)\s*\((?P<total>\d+)\)")
            .expect("issue number pattern is valid")
    })
}

fn book_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/books/(\d+)").expect("book id pattern is valid"))
}

/// Extract a publication date from an issue title.
///
/// Returns `Ok(None)` when the title carries no date pattern. A title that
/// matches the pattern but names an impossible date (day 30 of February)
/// is corrupt source data and fails the whole fetch.
pub fn extract_date(title: &str) -> Result<Option<NaiveDate>> {
    let Some(caps) = date_re().captures(title) else {
        return Ok(None);
    };
    let Some(month) = genitive_month_number(&caps["month"]) else {
        // Unreachable: the pattern only matches vocabulary names.
        return Ok(None);
    };
    let day: u32 = caps["day"]
        .parse()
        .map_err(|_| invalid_date(0, month, 0, title))?;
    let year: i32 = caps["year"]
        .parse()
        .map_err(|_| invalid_date(0, month, day, title))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(|| invalid_date(year, month, day, title))
}

fn invalid_date(year: i32, month: u32, day: u32, title: &str) -> AppError {
    AppError::InvalidDate {
        year,
        month,
        day,
        title: title.to_string(),
    }
}

/// Extract an issue-number annotation from an issue title.
///
/// Returns `None` when the title has no "№ <n> (<total>)" annotation.
pub fn extract_issue_number(title: &str) -> Option<IssueNumber> {
    let caps = issue_number_re().captures(title)?;
    Some(IssueNumber {
        year_sequence: caps["year"].parse().ok()?,
        total_sequence: caps["total"].parse().ok()?,
    })
}

/// Extract the book id from a relative detail URL of the form `/books/<id>`.
pub fn extract_book_id(url: &str) -> Result<String> {
    book_id_re()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| AppError::BookUrl(url.to_string()))
}
