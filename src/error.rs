//! Unified error handling for the vitrin crate
//!
//! This module provides a unified error type that consolidates all domain-specific
//! errors into a single `Error` enum, while maintaining the ability to use
//! domain-specific errors when needed.
//!
//! # Architecture
//!
//! - [`VitrinErrorTrait`] - Common interface implemented by all error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping all domain-specific errors
//!
//! # Usage
//!
//! ```rust,ignore
//! use vitrin::error::{Error, ErrorCategory, VitrinErrorTrait};
//!
//! fn handle_error(err: Error) {
//!     if err.is_recoverable() {
//!         println!("Degrading: {}", err.localized_desc());
//!     } else {
//!         eprintln!("Fatal error: {}", err);
//!     }
//! }
//! ```

use std::io;
use thiserror::Error;

// Re-export domain-specific errors for convenience
pub use crate::utils::error::{FetchError, RouteError};

/// Common trait for all vitrin error types
///
/// This trait provides a unified interface for error handling across
/// all modules, enabling consistent error processing strategies.
pub trait VitrinErrorTrait: std::error::Error {
    /// Check if this error is recoverable (the resolver can degrade
    /// to the root-path fallback instead of failing)
    fn is_recoverable(&self) -> bool;

    /// Get localized description for user-facing messages
    fn localized_desc(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (HTTP, timeout, rate limit)
    Network,
    /// Routing and localized path table errors
    Routing,
    /// Response parsing and data shape errors
    Parsing,
    /// Configuration and validation errors
    Config,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Get localized description for the category
    pub fn localized_desc(&self) -> String {
        match self {
            Self::Network => crate::i18n::t!("errors.category.network").to_string(),
            Self::Routing => crate::i18n::t!("errors.category.routing").to_string(),
            Self::Parsing => crate::i18n::t!("errors.category.parsing").to_string(),
            Self::Config => crate::i18n::t!("errors.category.config").to_string(),
            Self::Other => crate::i18n::t!("errors.category.other").to_string(),
        }
    }
}

/// Unified error type for the vitrin crate
///
/// This enum wraps all domain-specific errors, providing a single error type
/// that can be used across module boundaries while preserving the detailed
/// error information.
#[derive(Error, Debug)]
pub enum Error {
    /// Content API fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Localized path table errors
    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl VitrinErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            // The resolver degrades every fetch failure to the root fallback
            Self::Fetch(_) | Self::Http(_) => true,
            Self::Io(_) => true,
            // A broken route table or config is a deployment defect
            Self::Route(_) => false,
            Self::Json(_) => false,
            Self::Config(_) => false,
            Self::Other { .. } => false,
        }
    }

    fn localized_desc(&self) -> String {
        match self {
            Self::Fetch(e) => format!("{}: {e}", crate::i18n::t!("errors.fetch.error")),
            Self::Route(e) => format!("{}: {e}", crate::i18n::t!("errors.route.error")),
            Self::Io(e) => format!("{}: {e}", crate::i18n::t!("errors.io.error")),
            Self::Json(e) => format!("{}: {e}", crate::i18n::t!("errors.json.error")),
            Self::Http(e) => format!("{}: {e}", crate::i18n::t!("errors.http.error")),
            Self::Config(msg) => format!("{}: {msg}", crate::i18n::t!("errors.config.error")),
            Self::Other { context, .. } => context.clone(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Fetch(FetchError::Json(_)) => ErrorCategory::Parsing,
            Self::Fetch(_) | Self::Http(_) => ErrorCategory::Network,
            Self::Route(_) => ErrorCategory::Routing,
            Self::Json(_) => ErrorCategory::Parsing,
            Self::Io(_) | Self::Other { .. } => ErrorCategory::Other,
            Self::Config(_) => ErrorCategory::Config,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Conversion from anyhow::Error
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        let fetch_err = Error::Fetch(FetchError::Timeout);
        assert_eq!(fetch_err.category(), ErrorCategory::Network);

        let route_err = Error::Route(RouteError::UnsupportedLocale("de".to_string()));
        assert_eq!(route_err.category(), ErrorCategory::Routing);
    }

    #[test]
    fn test_is_recoverable() {
        let fetch_err = Error::Fetch(FetchError::Timeout);
        assert!(fetch_err.is_recoverable());

        let route_err = Error::Route(RouteError::UnknownTemplate {
            template: "/product/[slug]".to_string(),
            locale: "tr".to_string(),
        });
        assert!(!route_err.is_recoverable());
    }

    #[test]
    fn test_error_conversion() {
        let fetch_err = FetchError::NotFound;
        let unified: Error = fetch_err.into();
        assert!(matches!(unified, Error::Fetch(_)));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("Invalid base URL");
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_other_error() {
        let err = Error::other("Something went wrong");
        assert_eq!(err.category(), ErrorCategory::Other);
    }

    #[test]
    fn test_malformed_body_is_parsing() {
        let json_err = serde_json::from_str::<i32>("{").unwrap_err();
        let err = Error::Fetch(FetchError::Json(json_err));
        assert_eq!(err.category(), ErrorCategory::Parsing);
    }
}
