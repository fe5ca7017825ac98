//! Content-kind classification of request paths
//!
//! Decides what kind of content a URL addresses (page, post, product) so the
//! locale switcher knows which detail endpoint to ask for a translation
//! cross-reference. The classifier is table-driven over the localized path
//! table: a path is classified as kind K when one of its segments equals the
//! localized static prefix of K's detail template in either supported locale
//! and a slug segment follows. Paths addressing anything else (listings,
//! categories, tags, the root) are not classified and resolve structurally.

use crate::models::Locale;
use crate::routing::pathnames::{PathnameRegistry, RouteTemplate};
use crate::utils::split_segments;

/// Kind of content a URL addresses
///
/// "No kind" is expressed as `Option::<ContentKind>::None`; the set of
/// classified kinds is exactly the content types with per-locale slugs and
/// a `langslug` cross-reference in the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Page,
    Post,
    Product,
}

impl ContentKind {
    /// All classified kinds
    pub fn all() -> &'static [Self] {
        &[Self::Page, Self::Post, Self::Product]
    }

    /// The detail route template for this kind
    pub fn detail_template(&self) -> RouteTemplate {
        match self {
            Self::Page => RouteTemplate::PageDetail,
            Self::Post => RouteTemplate::PostDetail,
            Self::Product => RouteTemplate::ProductDetail,
        }
    }

    /// Locale-neutral path segment the content API addresses this kind by.
    /// The API uses the English names for both locales.
    pub fn api_segment(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Post => "post",
            Self::Product => "product",
        }
    }

    /// Parse a kind from its API segment
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "page" => Some(Self::Page),
            "post" => Some(Self::Post),
            "product" => Some(Self::Product),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.api_segment())
    }
}

/// Classify a path against the route table
///
/// Checks both locale spellings for every kind, since the current path may
/// already be in either locale: `/en/product/red-orange` and
/// `/tr/urun/kirmizi-portakal` both classify as `Product`.
///
/// Returns `None` for listing pages, category/tag pages, the root, and
/// anything unrecognized.
pub fn classify(registry: &PathnameRegistry, path: &str) -> Option<ContentKind> {
    let segments = split_segments(path);

    for &kind in ContentKind::all() {
        for &locale in Locale::all() {
            let Ok(prefix) = registry.static_prefix(kind.detail_template(), locale) else {
                continue;
            };
            // Prefix segment must be followed by a slug segment
            if segments
                .windows(2)
                .any(|pair| pair[0] == prefix && !pair[1].is_empty())
            {
                return Some(kind);
            }
        }
    }

    None
}
