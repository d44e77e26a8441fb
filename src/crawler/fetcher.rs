//! HTTP fetcher
//!
//! Builds the shared HTTP client and fetches single pages with retry on
//! transient server errors. The coordinator treats this module as a black
//! box that eventually returns a page body or a terminal failure.

use crate::config::CrawlerConfig;
use crate::FetchError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Status codes retried with backoff before giving up
const RETRYABLE_STATUSES: [u16; 4] = [500, 502, 503, 504];

/// Builds the HTTP client used for every request in a crawl
///
/// The client carries the configured user agent and a per-request timeout.
/// Redirects follow reqwest's default policy.
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body text
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | 2xx | Return body |
/// | 500/502/503/504 | Retry up to `retry_attempts` times, doubling backoff |
/// | Other non-2xx | Immediate error |
/// | Timeout | Immediate error (distinguished) |
/// | Other transport error | Immediate error |
pub async fn fetch_page(
    client: &Client,
    url: &str,
    config: &CrawlerConfig,
) -> Result<String, FetchError> {
    let mut backoff = Duration::from_millis(config.retry_backoff_ms);
    let mut attempt = 0;

    loop {
        attempt += 1;

        match client.get(url).send().await {
            Ok(response) => {
                let status = response.status();

                if status.is_success() {
                    return response.text().await.map_err(|e| FetchError::Network {
                        url: url.to_string(),
                        message: e.to_string(),
                    });
                }

                if is_retryable(status) {
                    if attempt <= config.retry_attempts {
                        tracing::warn!(
                            "HTTP {} for {}, retrying in {:?} (attempt {}/{})",
                            status.as_u16(),
                            url,
                            backoff,
                            attempt,
                            config.retry_attempts
                        );
                        tokio::time::sleep(backoff).await;
                        backoff *= 2;
                        continue;
                    }
                    return Err(FetchError::RetriesExhausted {
                        url: url.to_string(),
                        status: status.as_u16(),
                        attempts: attempt,
                    });
                }

                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            Err(e) => {
                if e.is_timeout() {
                    return Err(FetchError::Timeout {
                        url: url.to_string(),
                    });
                }
                return Err(FetchError::Network {
                    url: url.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }
}

/// Classifies a status code as retryable
fn is_retryable(status: StatusCode) -> bool {
    RETRYABLE_STATUSES.contains(&status.as_u16())
}
