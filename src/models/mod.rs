// src/models/mod.rs

//! Domain models for the archive client.
//!
//! All types are plain immutable data, built once per fetch call and owned
//! by the caller. Ordering of years, months, and issues always follows the
//! server-supplied order.

mod catalog;
mod issue;

pub use catalog::{MonthEntry, PeriodicalCatalog, YearEntry, YearMonth};
pub use issue::{IssueEntry, IssueNumber, IssuePage};
