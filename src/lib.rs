//! vitrin - locale-aware routing core for a bilingual catalog site
//!
//! The library behind a localized (English/Turkish) content and product
//! catalog: the localized path table, the locale-switch path resolver, and
//! the client for the remote content API they both depend on.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`routing`] - Localized path table, classifier, resolver, switcher
//! - [`client`] - Content-API HTTP client
//! - [`models`] - Core data structures and types
//! - [`error`] - Unified error handling
//! - [`metrics`] - Prometheus metrics
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use vitrin::client::ContentClient;
//! use vitrin::models::Locale;
//! use vitrin::routing::{LocaleSwitchResolver, LocaleSwitcher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ContentClient::new("http://localhost:8000", 10)?;
//!     let switcher = LocaleSwitcher::new(LocaleSwitchResolver::new(client));
//!     let target = switcher
//!         .request_switch("/en/product/red-orange", Locale::En, Locale::Tr)
//!         .await;
//!     println!("{target:?}");
//!     Ok(())
//! }
//! ```

// Initialize rust-i18n at crate root level
rust_i18n::i18n!("locales", fallback = "en");

pub mod client;
pub mod config;
pub mod error;
pub mod i18n;
pub mod metrics;
pub mod models;
pub mod routing;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::{ContentClient, ContentSource};
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, Result, VitrinErrorTrait};
    pub use crate::models::{ContentItem, Locale, MenuItem};
    pub use crate::routing::{
        ContentKind, LocaleSwitchResolver, LocaleSwitcher, Navigator, PathnameRegistry,
        RouteTemplate,
    };
}

// Direct re-exports for convenience
pub use models::{ContentItem, Locale};
pub use routing::{ContentKind, PathnameRegistry, RouteTemplate};
