//! Error types for the vitrin routing core
//!
//! This module defines custom error types used throughout the application.

use thiserror::Error;

/// Errors that can occur while talking to the content API
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Item does not exist (404)
    #[error("Content not found")]
    NotFound,

    /// Server error with status code
    #[error("Server error: {0}")]
    ServerError(u16),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Maximum retry attempts exceeded
    #[error("Maximum retry attempts exceeded")]
    MaxRetriesExceeded,

    /// Response body was not the expected JSON shape
    #[error("Malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Whether retrying the request could help
    ///
    /// 404 and other client errors are final; transport failures and
    /// 5xx-class responses are transient.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout | Self::MaxRetriesExceeded => true,
            Self::ServerError(status) => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::NotFound | Self::Json(_) | Self::InvalidUrl(_) => false,
        }
    }
}

/// Errors raised by the localized path table
#[derive(Error, Debug)]
pub enum RouteError {
    /// A (template, locale) pair is missing from the registry.
    /// This is a configuration defect and fatal at startup.
    #[error("No localized pattern for template {template} in locale {locale}")]
    UnknownTemplate { template: String, locale: String },

    /// Locale code outside the supported set
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Registry failed its startup completeness check
    #[error("Route table invalid: {reason}")]
    IncompleteTable { reason: String },
}
