//! Crawler module for episode page harvesting
//!
//! This module contains the harvest stage of the pipeline:
//! - HTTP fetching with retry on transient server errors
//! - Episode link discovery from the index page
//! - Per-page metadata extraction
//! - Overall crawl coordination with dedup and pacing

mod coordinator;
mod discover;
mod extract;
mod fetcher;

pub use coordinator::{Coordinator, CrawlEvent, CrawlReport, CrawlSummary};
pub use discover::discover;
pub use extract::extract;
pub use fetcher::{build_http_client, fetch_page};
