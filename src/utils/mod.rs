//! Common utilities and helper functions
//!
//! This module provides shared utilities used across the application.

pub mod error;

use regex::Regex;
use std::sync::OnceLock;

/// Check whether a string is a valid content slug
///
/// The content API restricts slugs to word characters and hyphens
/// (`[-\w]+`); anything else never resolves and is rejected before a
/// request is made.
pub fn is_valid_slug(slug: &str) -> bool {
    static SLUG_RE: OnceLock<Regex> = OnceLock::new();

    let re = SLUG_RE.get_or_init(|| Regex::new(r"^[-\w]+$").expect("Invalid regex pattern"));

    !slug.is_empty() && re.is_match(slug)
}

/// Split a path into its non-empty segments
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}

/// Join non-empty segments back into a `/`-prefixed path
pub fn join_segments(segments: &[&str]) -> String {
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}
