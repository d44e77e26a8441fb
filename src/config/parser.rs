use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use podharvest::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Index: {}", config.crawler.index_url);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const VALID_CONFIG: &str = r#"
[crawler]
index-url = "https://example.com/episodes"
base-url = "https://example.com"
user-agent = "Mozilla/5.0 (test)"
request-timeout-secs = 10
request-delay-ms = 500
retry-attempts = 3
retry-backoff-ms = 500

[channel]
title = "Test Podcast"
link = "https://example.com/"
description = "A test podcast"
language = "en-us"
author = "Test Author"
owner-name = "Test Owner"
owner-email = "owner@example.com"
category = "Comedy"
explicit = "yes"
image-url = "https://example.com/image.jpg"

[output]
csv-path = "./podcast_data/episodes.csv"
json-path = "./podcast_data/episodes.json"
feed-path = "./feed.xml"
"#;

    #[test]
    fn test_load_valid_config() {
        let file = create_temp_config(VALID_CONFIG);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.index_url, "https://example.com/episodes");
        assert_eq!(config.crawler.request_delay_ms, 500);
        assert_eq!(config.channel.title, "Test Podcast");
        assert_eq!(config.output.feed_path, "./feed.xml");
    }

    #[test]
    fn test_defaults_applied() {
        // Omit optional crawler fields and channel language/explicit
        let content = r#"
[crawler]
index-url = "https://example.com/episodes"
base-url = "https://example.com"
user-agent = "Mozilla/5.0 (test)"

[channel]
title = "Test Podcast"
link = "https://example.com/"
description = "A test podcast"
author = "Test Author"
owner-name = "Test Owner"
owner-email = "owner@example.com"
category = "Comedy"
image-url = "https://example.com/image.jpg"

[output]
csv-path = "./episodes.csv"
json-path = "./episodes.json"
feed-path = "./feed.xml"
"#;
        let file = create_temp_config(content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.request_timeout_secs, 10);
        assert_eq!(config.crawler.retry_attempts, 3);
        assert_eq!(config.channel.language, "en-us");
        assert_eq!(config.channel.explicit, "yes");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let content = VALID_CONFIG.replace("explicit = \"yes\"", "explicit = \"nope\"");
        let file = create_temp_config(&content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
