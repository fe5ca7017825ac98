// Core data structures for the vitrin routing core and content-API client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported site locale
///
/// The set is closed: the content API and the routing table both know
/// exactly these two languages. Extending the site to a third language
/// means extending this enum and the route table, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Tr,
}

impl Locale {
    /// Default locale of the site
    pub const DEFAULT: Self = Self::En;

    /// Get the URL/API code for this locale
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }

    /// Parse a locale code, accepting region-qualified forms
    /// (`en-US`, `tr_TR`) and full names
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if lower == "en" || lower.starts_with("en-") || lower.starts_with("en_") || lower == "english"
        {
            Some(Self::En)
        } else if lower == "tr"
            || lower.starts_with("tr-")
            || lower.starts_with("tr_")
            || lower == "turkish"
        {
            Some(Self::Tr)
        } else {
            None
        }
    }

    /// The other supported locale (the translation target of `langslug`)
    pub fn other(&self) -> Self {
        match self {
            Self::En => Self::Tr,
            Self::Tr => Self::En,
        }
    }

    /// Root path for this locale, e.g. `/tr`
    pub fn root_path(&self) -> String {
        format!("/{}", self.as_str())
    }

    /// Get all supported locales
    pub fn all() -> &'static [Self] {
        &[Self::En, Self::Tr]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal cross-kind view of a content item, as returned by
/// `GET /api/{locale}/{kind}/{slug}/`
///
/// Only the fields the locale switcher needs are required; everything
/// else the detail endpoints return is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentItem {
    pub slug: String,
    pub lang: String,
    /// Slug of the equivalent item in the other locale; absent (or empty,
    /// the API serializes missing cross-references as "") when no
    /// translation exists
    #[serde(default)]
    pub langslug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ContentItem {
    /// The translated counterpart's slug, with the API's empty-string
    /// encoding of "no translation" normalized to `None`
    pub fn translated_slug(&self) -> Option<&str> {
        self.langslug.as_deref().filter(|s| !s.is_empty())
    }
}

/// Navigation menu entry from `GET /api/menuitems/`
///
/// The API returns a flat list across both locales with children already
/// nested; consumers filter by `lang` and order by `order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub parent: Option<u64>,
    #[serde(default)]
    pub newtab: bool,
    pub lang: String,
    #[serde(default)]
    pub children: Option<Vec<MenuItem>>,
}

/// Content category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub lang: String,
    pub title: String,
    pub slug: String,
}

/// Content tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
    pub slug: String,
}

/// Attached image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentImage {
    pub id: u64,
    pub image: String,
    #[serde(default)]
    pub alt_text: String,
}

/// Product from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub langslug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub lang: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub images: Option<Vec<ContentImage>>,
    #[serde(default)]
    pub shoplink: Option<String>,
    #[serde(default)]
    pub date_posted: Option<DateTime<Utc>>,
}

/// Static site page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub langslug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub lang: String,
    #[serde(default)]
    pub images: Option<Vec<ContentImage>>,
    /// Whether the page is linked from the navigation menu
    #[serde(default)]
    pub menu: bool,
}

/// Blog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub langslug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub lang: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub images: Option<Vec<ContentImage>>,
    #[serde(default)]
    pub date_posted: Option<DateTime<Utc>>,
}

/// Homepage content block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homepage {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub lang: String,
    #[serde(default)]
    pub images: Option<Vec<ContentImage>>,
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

/// A single keyword-search result, merged over products and categories
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub slug: String,
    pub kind: SearchHitKind,
}

/// What a search hit points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchHitKind {
    Product,
    Category,
}

/// Filter a flat menu list down to one locale and sort top-level entries
/// by their `order` field
pub fn menu_for_locale(items: Vec<MenuItem>, locale: Locale) -> Vec<MenuItem> {
    let mut filtered: Vec<MenuItem> = items
        .into_iter()
        .filter(|item| item.lang == locale.as_str())
        .collect();
    filtered.sort_by_key(|item| item.order);
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("tr"), Some(Locale::Tr));
        assert_eq!(Locale::parse("tr_TR"), Some(Locale::Tr));
        assert_eq!(Locale::parse("turkish"), Some(Locale::Tr));
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_locale_other() {
        assert_eq!(Locale::En.other(), Locale::Tr);
        assert_eq!(Locale::Tr.other(), Locale::En);
    }

    #[test]
    fn test_locale_root_path() {
        assert_eq!(Locale::En.root_path(), "/en");
        assert_eq!(Locale::Tr.root_path(), "/tr");
    }

    #[test]
    fn test_locale_serde_roundtrip() {
        let json = serde_json::to_string(&Locale::Tr).unwrap();
        assert_eq!(json, "\"tr\"");
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::Tr);
    }

    #[test]
    fn test_translated_slug_empty_is_absent() {
        let mut item = ContentItem {
            slug: "red-orange".to_string(),
            lang: "en".to_string(),
            langslug: Some("kirmizi-portakal".to_string()),
            title: None,
        };
        assert_eq!(item.translated_slug(), Some("kirmizi-portakal"));

        item.langslug = Some(String::new());
        assert_eq!(item.translated_slug(), None);

        item.langslug = None;
        assert_eq!(item.translated_slug(), None);
    }

    #[test]
    fn test_content_item_deserialize_minimal() {
        let json = r#"{"slug": "about", "lang": "en"}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.slug, "about");
        assert!(item.langslug.is_none());
    }

    #[test]
    fn test_menu_filter_and_order() {
        let raw = vec![
            MenuItem {
                id: 1,
                title: "Products".to_string(),
                link: "/products".to_string(),
                order: 2,
                parent: None,
                newtab: false,
                lang: "en".to_string(),
                children: None,
            },
            MenuItem {
                id: 2,
                title: "Ürünler".to_string(),
                link: "/urunler".to_string(),
                order: 1,
                parent: None,
                newtab: false,
                lang: "tr".to_string(),
                children: None,
            },
            MenuItem {
                id: 3,
                title: "Home".to_string(),
                link: "/".to_string(),
                order: 1,
                parent: None,
                newtab: false,
                lang: "en".to_string(),
                children: None,
            },
        ];

        let en = menu_for_locale(raw, Locale::En);
        assert_eq!(en.len(), 2);
        assert_eq!(en[0].title, "Home");
        assert_eq!(en[1].title, "Products");
    }
}
