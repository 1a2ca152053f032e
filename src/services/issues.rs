// src/services/issues.rs

//! Issue-page fetcher.
//!
//! Fetches one limit/offset page of a month's issues and runs the text
//! extractors over each item's title and detail URL.

use serde::Deserialize;

use crate::error::Result;
use crate::extract::{extract_book_id, extract_date, extract_issue_number};
use crate::models::{IssueEntry, IssuePage, YearMonth};
use crate::services::ArchiveClient;

/// Wire shape of `GET /editions/{periodicalId}/{year}/{month}?limit=&offset=`.
#[derive(Debug, Deserialize)]
struct IssuesResponse {
    response: RawIssuePage,
}

#[derive(Debug, Deserialize)]
struct RawIssuePage {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    // The server types these two inconsistently: year as a string,
    // month as a number.
    year: String,
    month: u32,
    url: String,
    items: Vec<RawIssueItem>,
    items_count: u32,
    items_left: u32,
}

#[derive(Debug, Deserialize)]
struct RawIssueItem {
    title: String,
    image: String,
    url: String,
}

/// Transform a validated payload into the typed page.
///
/// Date and issue-number extraction soft-fail to `None`; a matched but
/// impossible date and an off-contract detail URL are fatal.
fn build_issue_page(raw: RawIssuePage, limit: u32, offset: u32) -> Result<IssuePage> {
    let next_offset = if raw.items_left == 0 {
        None
    } else {
        Some(offset + limit)
    };

    let mut issues = Vec::with_capacity(raw.items.len());
    for item in raw.items {
        let date = extract_date(&item.title)?;
        let issue_number = extract_issue_number(&item.title);
        let book_id = extract_book_id(&item.url)?;
        issues.push(IssueEntry {
            title: item.title,
            image_url: item.image,
            detail_url: item.url,
            date,
            issue_number,
            book_id,
        });
    }

    Ok(IssuePage {
        kind: raw.kind,
        name: raw.name,
        url: raw.url,
        issues,
        next_offset,
    })
}

impl ArchiveClient {
    /// Fetch one page of a periodical's issues for the given month.
    ///
    /// The cursor is stateless: resupply the returned `next_offset` to get
    /// the following page; `None` marks the end of the sequence.
    pub async fn fetch_issue_page(
        &self,
        periodical_id: &str,
        year_month: YearMonth,
        limit: u32,
        offset: u32,
    ) -> Result<IssuePage> {
        let url = self.endpoint(&format!(
            "editions/{periodical_id}/{}/{}?limit={limit}&offset={offset}",
            year_month.year, year_month.month
        ));
        let payload: IssuesResponse = self.get_json(&url).await?;
        let raw = payload.response;
        log::debug!(
            "issues {}/{}: {} of {} items on page, {} left",
            raw.year,
            raw.month,
            raw.items.len(),
            raw.items_count,
            raw.items_left
        );
        build_issue_page(raw, limit, offset)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::error::AppError;
    use crate::models::IssueNumber;

    fn raw_page(items: Vec<RawIssueItem>, items_left: u32) -> RawIssuePage {
        RawIssuePage {
            kind: "Газета".to_string(),
            name: "Русское слово".to_string(),
            year: "1917".to_string(),
            month: 1,
            url: "/editions/39/1917/1".to_string(),
            items_count: items.len() as u32,
            items,
            items_left,
        }
    }

    fn raw_item(title: &str, url: &str) -> RawIssueItem {
        RawIssueItem {
            title: title.to_string(),
            image: format!("{url}/cover"),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_build_issue_page_extracts_all_fields() {
        let raw = raw_page(
            vec![raw_item("Русское слово, 7 января 1917, №5 (298)", "/books/4821")],
            0,
        );

        let page = build_issue_page(raw, 10, 0).unwrap();
        assert_eq!(page.issues.len(), 1);
        let issue = &page.issues[0];
        assert_eq!(issue.book_id, "4821");
        assert_eq!(issue.date, NaiveDate::from_ymd_opt(1917, 1, 7));
        assert_eq!(
            issue.issue_number,
            Some(IssueNumber {
                year_sequence: 5,
                total_sequence: 298,
            })
        );
    }

    #[test]
    fn test_build_issue_page_plain_title_soft_fails() {
        let raw = raw_page(vec![raw_item("Приложение", "/books/77")], 0);

        let page = build_issue_page(raw, 10, 0).unwrap();
        let issue = &page.issues[0];
        assert_eq!(issue.date, None);
        assert_eq!(issue.issue_number, None);
        assert_eq!(issue.book_id, "77");
    }

    #[test]
    fn test_cursor_end_of_sequence() {
        let raw = raw_page(vec![], 0);
        let page = build_issue_page(raw, 25, 50).unwrap();
        assert_eq!(page.next_offset, None);
    }

    #[test]
    fn test_cursor_advances_by_limit() {
        let raw = raw_page(vec![raw_item("x", "/books/1")], 7);
        let page = build_issue_page(raw, 25, 50).unwrap();
        assert_eq!(page.next_offset, Some(75));
    }

    #[test]
    fn test_off_contract_detail_url_is_fatal() {
        let raw = raw_page(vec![raw_item("x", "/other/4821")], 0);
        let err = build_issue_page(raw, 10, 0).unwrap_err();
        assert!(matches!(err, AppError::BookUrl(url) if url == "/other/4821"));
    }

    #[test]
    fn test_matched_but_invalid_date_is_fatal() {
        let raw = raw_page(vec![raw_item("31 апреля, 1905", "/books/1")], 0);
        let err = build_issue_page(raw, 10, 0).unwrap_err();
        assert!(matches!(err, AppError::InvalidDate { .. }));
    }
}
