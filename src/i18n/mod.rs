//! Internationalization (i18n) support for vitrin
//!
//! This module provides bilingual support for CLI messages, errors,
//! and user-facing text. Supported languages: English (en), Turkish (tr) —
//! the same closed set the routing core serves.
//!
//! # Environment Variables
//!
//! - `VITRIN_LANG`: Set the preferred language (en, tr). Defaults to English.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vitrin::i18n::{t, set_locale};
//!
//! // Set language from environment or default
//! set_locale("tr");
//!
//! // Translate a message
//! let msg = t!("cli.resolve.resolving");
//! ```

use std::sync::OnceLock;

use crate::models::Locale;

// Note: rust_i18n::i18n! macro is declared in lib.rs (crate root)

static CURRENT_LOCALE: OnceLock<String> = OnceLock::new();

/// Set the current locale for translations
///
/// # Arguments
///
/// * `locale` - Language code (en, tr)
pub fn set_locale(locale: &str) {
    let normalized = normalize_locale(locale);
    rust_i18n::set_locale(normalized);
    CURRENT_LOCALE.get_or_init(|| normalized.to_string());
}

/// Get the current locale
///
/// Returns the currently active locale or the default fallback.
pub fn current_locale() -> &'static str {
    CURRENT_LOCALE.get().map(|s| s.as_str()).unwrap_or("en")
}

/// Initialize i18n from environment variables
///
/// Reads `VITRIN_LANG` to set the locale. Falls back to English if not
/// set or invalid.
pub fn init_from_env() {
    let locale = std::env::var("VITRIN_LANG").unwrap_or_else(|_| "en".to_string());
    set_locale(&locale);
}

/// Normalize a locale code to the supported message languages
///
/// Region-qualified and spelled-out forms collapse onto the site's two
/// locales; anything unrecognized falls back to English.
fn normalize_locale(locale: &str) -> &'static str {
    Locale::parse(locale).unwrap_or(Locale::DEFAULT).as_str()
}

/// Translate a key with optional parameters
///
/// This is a re-export of rust_i18n::t! for convenience.
#[doc(inline)]
pub use rust_i18n::t;
