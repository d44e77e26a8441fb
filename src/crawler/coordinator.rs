//! Crawl coordinator - drives fetch-then-extract over discovered links
//!
//! The coordinator owns the crawl loop: fetch the index, discover episode
//! links, then fetch and extract each page sequentially with visited-set
//! deduplication and fixed inter-request pacing. Individual page failures
//! never abort the run; only an index fetch failure is fatal.

use crate::config::CrawlerConfig;
use crate::crawler::discover::discover;
use crate::crawler::extract::extract;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::records::EpisodeRecord;
use crate::{HarvestError, Result};
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// A structured event emitted during a crawl
///
/// The crawl loop returns data plus events instead of printing; the
/// presentation layer decides how to render them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    /// The index page yielded this many candidate links
    LinksDiscovered { count: usize },

    /// A link was skipped because its page was already visited this run
    DuplicateSkipped { url: String },

    /// A page fetch failed; the crawl continued with the next link
    PageFailed { url: String, error: String },

    /// A page was fetched but contained no playable audio
    NoAudioFound { url: String },

    /// A record was extracted from this page
    RecordExtracted { url: String },
}

/// Counts summarizing one crawl run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub links_discovered: usize,
    pub records_extracted: usize,
    pub duplicates_skipped: usize,
    pub pages_failed: usize,
    pub pages_without_audio: usize,
}

/// The result of one crawl run: records in discovery order plus the event
/// trail and summary counts
#[derive(Debug)]
pub struct CrawlReport {
    pub records: Vec<EpisodeRecord>,
    pub events: Vec<CrawlEvent>,
    pub summary: CrawlSummary,
}

/// Per-run crawl state, created fresh for every invocation
struct CrawlState {
    visited: HashSet<String>,
    records: Vec<EpisodeRecord>,
    events: Vec<CrawlEvent>,
    summary: CrawlSummary,
}

impl CrawlState {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            records: Vec::new(),
            events: Vec::new(),
            summary: CrawlSummary::default(),
        }
    }
}

/// Main crawl coordinator
pub struct Coordinator {
    config: CrawlerConfig,
    client: Client,
}

impl Coordinator {
    /// Creates a coordinator with its own HTTP client
    pub fn new(config: CrawlerConfig) -> Result<Self> {
        let client = build_http_client(&config)?;
        Ok(Self { config, client })
    }

    /// Runs one crawl: fetch index, discover links, fetch and extract each
    /// episode page
    ///
    /// State is created fresh here, so a coordinator can be reused for
    /// independent runs without carrying a visited set across them.
    ///
    /// # Errors
    ///
    /// Only an index fetch failure is returned as an error; per-page
    /// failures are reported through events and skipped.
    pub async fn run(&self) -> Result<CrawlReport> {
        let mut state = CrawlState::new();
        let base_url = Url::parse(&self.config.base_url)?;

        tracing::info!("Fetching index: {}", self.config.index_url);
        let index_html = fetch_page(&self.client, &self.config.index_url, &self.config)
            .await
            .map_err(|source| HarvestError::IndexFetch {
                url: self.config.index_url.clone(),
                source,
            })?;

        let links = discover(&index_html, &base_url);
        tracing::info!("Found {} episode links", links.len());
        state.summary.links_discovered = links.len();
        state
            .events
            .push(CrawlEvent::LinksDiscovered { count: links.len() });

        let total = links.len();
        let mut fetched_any = false;

        for (idx, link) in links.into_iter().enumerate() {
            let url = link.to_string();

            if !state.visited.insert(url.clone()) {
                tracing::debug!("Skipping (already visited): {}", url);
                state.summary.duplicates_skipped += 1;
                state.events.push(CrawlEvent::DuplicateSkipped { url });
                continue;
            }

            // Fixed pacing between page fetches to bound the request rate
            if fetched_any && self.config.request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.request_delay_ms)).await;
            }
            fetched_any = true;

            tracing::info!("[{}/{}] Fetching: {}", idx + 1, total, url);
            let body = match fetch_page(&self.client, &url, &self.config).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Error fetching {}: {}", url, e);
                    state.summary.pages_failed += 1;
                    state.events.push(CrawlEvent::PageFailed {
                        url,
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            match extract(&body, &link) {
                Some(record) => {
                    tracing::info!("Audio URL: {}", record.audio_url.as_deref().unwrap_or(""));
                    state.summary.records_extracted += 1;
                    state.events.push(CrawlEvent::RecordExtracted { url });
                    state.records.push(record);
                }
                None => {
                    tracing::debug!("No audio found on {}", url);
                    state.summary.pages_without_audio += 1;
                    state.events.push(CrawlEvent::NoAudioFound { url });
                }
            }
        }

        tracing::info!(
            "Crawl complete: {} extracted, {} failed, {} duplicates, {} without audio",
            state.summary.records_extracted,
            state.summary.pages_failed,
            state.summary.duplicates_skipped,
            state.summary.pages_without_audio
        );

        Ok(CrawlReport {
            records: state.records,
            events: state.events,
            summary: state.summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_state_starts_empty() {
        let state = CrawlState::new();
        assert!(state.visited.is_empty());
        assert!(state.records.is_empty());
        assert_eq!(state.summary, CrawlSummary::default());
    }

    #[test]
    fn test_summary_default_counts_are_zero() {
        let summary = CrawlSummary::default();
        assert_eq!(summary.links_discovered, 0);
        assert_eq!(summary.records_extracted, 0);
        assert_eq!(summary.duplicates_skipped, 0);
        assert_eq!(summary.pages_failed, 0);
        assert_eq!(summary.pages_without_audio, 0);
    }

    // Full crawl behavior (dedup, failure tolerance, fatal index failure)
    // is covered with wiremock in tests/pipeline_tests.rs
}
