//! CLI command implementations

pub mod menu;
pub mod resolve;
pub mod routes;
pub mod search;
pub mod show;

// Re-export command functions for convenience
pub use menu::menu;
pub use resolve::resolve;
pub use routes::routes;
pub use search::search;
pub use show::show;

use anyhow::{anyhow, Result};

use vitrin::models::Locale;

/// Parse a locale argument or fail with a readable message
pub fn parse_locale(code: &str) -> Result<Locale> {
    Locale::parse(code).ok_or_else(|| anyhow!("Unsupported locale: {code} (expected en or tr)"))
}
