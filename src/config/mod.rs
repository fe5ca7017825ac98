//! Configuration management for vitrin
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::models::Locale;
use crate::routing::pathnames::PathnameRegistry;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Content API configuration
    pub api: ApiConfig,

    /// Routing configuration
    pub routing: RoutingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Content-API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API origin, e.g. `http://localhost:8000`
    pub base_url: String,

    /// Request timeout in seconds; bounds every locale-switch fetch
    pub request_timeout_secs: u64,

    /// Maximum number of retry attempts on transient failures
    pub max_retries: u32,

    /// Rate limit (requests per second)
    pub rate_limit: u32,

    /// User agent string
    pub user_agent: String,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Default locale; the supported set itself is fixed in code
    pub default_locale: Locale,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("VITRIN_API_URL")
            .unwrap_or_else(|_| String::from("http://localhost:8000"));

        let request_timeout_secs = std::env::var("VITRIN_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);

        let max_retries = std::env::var("VITRIN_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(3);

        let rate_limit = std::env::var("VITRIN_RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        let user_agent = std::env::var("VITRIN_USER_AGENT")
            .unwrap_or_else(|_| format!("vitrin/{}", env!("CARGO_PKG_VERSION")));

        let default_locale = std::env::var("VITRIN_DEFAULT_LOCALE")
            .ok()
            .and_then(|v| Locale::parse(&v))
            .unwrap_or(Locale::DEFAULT);

        let log_level = std::env::var("VITRIN_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format = std::env::var("VITRIN_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            api: ApiConfig {
                base_url,
                request_timeout_secs,
                max_retries,
                rate_limit,
                user_agent,
            },
            routing: RoutingConfig { default_locale },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values and the route table
    ///
    /// Runs the registry completeness check too: a process with a broken
    /// localized path table must fail at startup, not at the first locale
    /// switch.
    pub fn validate(&self) -> Result<()> {
        if self.api.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if self.api.rate_limit == 0 {
            anyhow::bail!("rate_limit must be greater than 0");
        }

        url::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.api.base_url))?;

        PathnameRegistry::new()
            .validate()
            .context("Localized path table failed validation")?;

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::from("http://localhost:8000"),
                request_timeout_secs: 10,
                max_retries: 3,
                rate_limit: 10,
                user_agent: format!("vitrin/{}", env!("CARGO_PKG_VERSION")),
            },
            routing: RoutingConfig {
                default_locale: Locale::DEFAULT,
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.api.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_rate_limit_rejected() {
        let mut config = Config::default();
        config.api.rate_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut config = Config::default();
        config.api.base_url = String::from("not a url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }
}
