use crate::config::types::{ChannelConfig, Config, CrawlerConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_channel_config(&config.channel)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    validate_http_url("index-url", &config.index_url)?;
    validate_http_url("base-url", &config.base_url)?;

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs < 1 || config.request_timeout_secs > 120 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be between 1 and 120, got {}",
            config.request_timeout_secs
        )));
    }

    if config.request_delay_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "request-delay-ms must be <= 60000, got {}",
            config.request_delay_ms
        )));
    }

    if config.retry_attempts > 10 {
        return Err(ConfigError::Validation(format!(
            "retry-attempts must be <= 10, got {}",
            config.retry_attempts
        )));
    }

    Ok(())
}

/// Validates channel metadata
fn validate_channel_config(config: &ChannelConfig) -> Result<(), ConfigError> {
    if config.title.is_empty() {
        return Err(ConfigError::Validation(
            "channel title cannot be empty".to_string(),
        ));
    }

    if config.description.is_empty() {
        return Err(ConfigError::Validation(
            "channel description cannot be empty".to_string(),
        ));
    }

    validate_http_url("channel link", &config.link)?;
    validate_http_url("image-url", &config.image_url)?;

    if config.explicit != "yes" && config.explicit != "no" {
        return Err(ConfigError::Validation(format!(
            "explicit must be \"yes\" or \"no\", got '{}'",
            config.explicit
        )));
    }

    if !config.owner_email.contains('@') {
        return Err(ConfigError::Validation(format!(
            "owner-email does not look like an email address: '{}'",
            config.owner_email
        )));
    }

    Ok(())
}

/// Validates output paths
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    for (name, path) in [
        ("csv-path", &config.csv_path),
        ("json-path", &config.json_path),
        ("feed-path", &config.feed_path),
    ] {
        if path.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    Ok(())
}

/// Checks that a value parses as an absolute http(s) URL
fn validate_http_url(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", name, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must be http or https, got '{}'",
            name,
            url.scheme()
        )));
    }

    Ok(())
}
