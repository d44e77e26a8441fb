//! Configuration loading and validation
//!
//! Configuration is a TOML file with three sections: [crawler] for the
//! harvest run parameters, [channel] for the fixed feed metadata, and
//! [output] for the interchange and feed file paths.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{ChannelConfig, Config, CrawlerConfig, OutputConfig};
pub use validation::validate;

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Builds a valid in-memory configuration for unit tests
    pub fn create_test_config() -> Config {
        Config {
            crawler: CrawlerConfig {
                index_url: "https://example.com/episodes".to_string(),
                base_url: "https://example.com".to_string(),
                user_agent: "Mozilla/5.0 (test)".to_string(),
                request_timeout_secs: 10,
                request_delay_ms: 10,
                retry_attempts: 3,
                retry_backoff_ms: 10,
            },
            channel: ChannelConfig {
                title: "Test Podcast".to_string(),
                link: "https://example.com/".to_string(),
                description: "A test podcast".to_string(),
                language: "en-us".to_string(),
                author: "Test Author".to_string(),
                owner_name: "Test Owner".to_string(),
                owner_email: "owner@example.com".to_string(),
                category: "Comedy".to_string(),
                explicit: "yes".to_string(),
                image_url: "https://example.com/image.jpg".to_string(),
            },
            output: OutputConfig {
                csv_path: "./podcast_data/episodes.csv".to_string(),
                json_path: "./podcast_data/episodes.json".to_string(),
                feed_path: "./feed.xml".to_string(),
            },
        }
    }
}
