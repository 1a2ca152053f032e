// src/services/mod.rs

//! Fetch services for the archive API.
//!
//! One `ArchiveClient` method per endpoint. Every fetch is a linear
//! pipeline: network call → status check → schema validation → transform.

mod catalog;
mod client;
mod issues;

pub use client::ArchiveClient;
