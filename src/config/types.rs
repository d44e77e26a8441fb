use serde::Deserialize;

/// Main configuration structure for podharvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub channel: ChannelConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URL of the episode index page to start from
    #[serde(rename = "index-url")]
    pub index_url: String,

    /// Base URL used to resolve relative links and decide same-origin
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// User agent string sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Fixed delay between page fetches (milliseconds)
    #[serde(rename = "request-delay-ms", default = "default_delay_ms")]
    pub request_delay_ms: u64,

    /// Retry attempts for transient server errors (500/502/503/504)
    #[serde(rename = "retry-attempts", default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Base backoff between retries (milliseconds), doubled per attempt
    #[serde(rename = "retry-backoff-ms", default = "default_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_delay_ms() -> u64 {
    500
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    500
}

/// Channel-level feed metadata, fixed configuration supplied by the operator
/// rather than derived from harvested records
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    pub title: String,
    pub link: String,
    pub description: String,

    #[serde(default = "default_language")]
    pub language: String,

    pub author: String,

    #[serde(rename = "owner-name")]
    pub owner_name: String,

    #[serde(rename = "owner-email")]
    pub owner_email: String,

    pub category: String,

    /// iTunes explicit flag, "yes" or "no"
    #[serde(default = "default_explicit")]
    pub explicit: String,

    #[serde(rename = "image-url")]
    pub image_url: String,
}

fn default_language() -> String {
    "en-us".to_string()
}

fn default_explicit() -> String {
    "yes".to_string()
}

/// Output file paths
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV interchange file
    #[serde(rename = "csv-path")]
    pub csv_path: String,

    /// Path to the JSON interchange file
    #[serde(rename = "json-path")]
    pub json_path: String,

    /// Path to the generated RSS feed
    #[serde(rename = "feed-path")]
    pub feed_path: String,
}
