// src/lib.rs

//! Read-only client for the Nekrasovka digital periodical archive.
//!
//! The archive's REST API serves catalog metadata (periodical descriptions,
//! a year/month index, paginated issue listings) and raw page images. This
//! crate fetches those endpoints and normalizes the server's free text —
//! Russian month names, issue-number annotations, relative book URLs — into
//! strongly-typed records. It performs no caching, retrying, or rendering;
//! each call is one request, one validation pass, one transform.

pub mod config;
pub mod error;
pub mod extract;
pub mod locale;
pub mod models;
pub mod services;

pub use config::ClientConfig;
pub use error::{AppError, Result};
pub use models::{
    IssueEntry, IssueNumber, IssuePage, MonthEntry, PeriodicalCatalog, YearEntry, YearMonth,
};
pub use services::ArchiveClient;
