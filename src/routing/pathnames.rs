//! Localized path table
//!
//! A static bidirectional mapping between canonical, locale-neutral route
//! patterns (`/product/[slug]`) and their per-locale surface forms
//! (en `/product/[slug]`, tr `/urun/[slug]`). The routing layer uses it to
//! emit locale-prefixed URLs; the locale switcher consults it in reverse to
//! translate the current URL when the user changes language.
//!
//! The table is pure data. It is total over the registered templates and
//! both supported locales, and [`PathnameRegistry::validate`] enforces that
//! at startup — a missing pair is a deployment defect, not a runtime case.

use crate::models::Locale;
use crate::utils::error::RouteError;

/// Placeholder used in route patterns for the dynamic slug segment
pub const SLUG_PLACEHOLDER: &str = "[slug]";

/// Canonical, locale-neutral route pattern
///
/// The set is closed and enumerable; it mirrors the page tree of the site
/// one to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteTemplate {
    Home,
    Products,
    ProductDetail,
    Pages,
    PageDetail,
    Posts,
    PostDetail,
    Categories,
    CategoryDetail,
    TagIndex,
    TagDetail,
}

impl RouteTemplate {
    /// Get all registered templates
    pub fn all() -> &'static [Self] {
        &[
            Self::Home,
            Self::Products,
            Self::ProductDetail,
            Self::Pages,
            Self::PageDetail,
            Self::Posts,
            Self::PostDetail,
            Self::Categories,
            Self::CategoryDetail,
            Self::TagIndex,
            Self::TagDetail,
        ]
    }

    /// Canonical pattern string, e.g. `/product/[slug]`
    pub fn canonical(&self) -> &'static str {
        entry_for(*self).canonical
    }

    /// Whether the pattern carries a dynamic slug segment
    pub fn has_slug(&self) -> bool {
        self.canonical().contains(SLUG_PLACEHOLDER)
    }
}

impl std::fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

/// One row of the localized path table
struct RouteEntry {
    template: RouteTemplate,
    canonical: &'static str,
    en: &'static str,
    tr: &'static str,
}

/// The site's route table, one entry per canonical template.
///
/// Adding a locale means adding a column here and a variant to [`Locale`];
/// the resolver logic is untouched.
const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry {
        template: RouteTemplate::Home,
        canonical: "/home",
        en: "/home",
        tr: "/anasayfa",
    },
    RouteEntry {
        template: RouteTemplate::Products,
        canonical: "/products",
        en: "/products",
        tr: "/urunler",
    },
    RouteEntry {
        template: RouteTemplate::ProductDetail,
        canonical: "/product/[slug]",
        en: "/product/[slug]",
        tr: "/urun/[slug]",
    },
    RouteEntry {
        template: RouteTemplate::Pages,
        canonical: "/pages",
        en: "/pages",
        tr: "/sayfalar",
    },
    RouteEntry {
        template: RouteTemplate::PageDetail,
        canonical: "/page/[slug]",
        en: "/page/[slug]",
        tr: "/sayfa/[slug]",
    },
    RouteEntry {
        template: RouteTemplate::Posts,
        canonical: "/posts",
        en: "/posts",
        tr: "/yazilar",
    },
    RouteEntry {
        template: RouteTemplate::PostDetail,
        canonical: "/post/[slug]",
        en: "/post/[slug]",
        tr: "/yazi/[slug]",
    },
    RouteEntry {
        template: RouteTemplate::Categories,
        canonical: "/categories",
        en: "/categories",
        tr: "/kategoriler",
    },
    RouteEntry {
        template: RouteTemplate::CategoryDetail,
        canonical: "/category/[slug]",
        en: "/category/[slug]",
        tr: "/kategori/[slug]",
    },
    RouteEntry {
        template: RouteTemplate::TagIndex,
        canonical: "/tag",
        en: "/tag",
        tr: "/etiket",
    },
    RouteEntry {
        template: RouteTemplate::TagDetail,
        canonical: "/tag/[slug]",
        en: "/tag/[slug]",
        tr: "/etiket/[slug]",
    },
];

fn entry_for(template: RouteTemplate) -> &'static RouteEntry {
    // The table covers every variant; the enum and the table change together.
    ROUTE_TABLE
        .iter()
        .find(|e| e.template == template)
        .expect("route table covers all templates")
}

/// Lookup view over the localized path table
#[derive(Debug, Clone, Copy, Default)]
pub struct PathnameRegistry;

impl PathnameRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Localized pattern (placeholders intact) for a template/locale pair,
    /// e.g. (`ProductDetail`, tr) → `/urun/[slug]`
    pub fn localized_pattern(
        &self,
        template: RouteTemplate,
        locale: Locale,
    ) -> Result<&'static str, RouteError> {
        let entry = ROUTE_TABLE
            .iter()
            .find(|e| e.template == template)
            .ok_or_else(|| RouteError::UnknownTemplate {
                template: format!("{template:?}"),
                locale: locale.as_str().to_string(),
            })?;

        let pattern = match locale {
            Locale::En => entry.en,
            Locale::Tr => entry.tr,
        };

        if pattern.is_empty() {
            return Err(RouteError::UnknownTemplate {
                template: entry.canonical.to_string(),
                locale: locale.as_str().to_string(),
            });
        }

        Ok(pattern)
    }

    /// Static prefix of a slugged template's localized pattern,
    /// e.g. (`ProductDetail`, tr) → `urun`
    pub fn static_prefix(
        &self,
        template: RouteTemplate,
        locale: Locale,
    ) -> Result<&'static str, RouteError> {
        let pattern = self.localized_pattern(template, locale)?;
        Ok(pattern
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or(""))
    }

    /// Reverse lookup: which static (non-slugged) template does this
    /// locale-stripped path spell, and in which locale?
    ///
    /// `/products` → (Products, en); `/urunler` → (Products, tr).
    /// Slugged templates are never matched here.
    pub fn template_for_static_path(&self, path: &str) -> Option<(RouteTemplate, Locale)> {
        for entry in ROUTE_TABLE {
            if entry.template.has_slug() {
                continue;
            }
            for &locale in Locale::all() {
                let pattern = match locale {
                    Locale::En => entry.en,
                    Locale::Tr => entry.tr,
                };
                if pattern == path {
                    return Some((entry.template, locale));
                }
            }
        }
        None
    }

    /// All registered templates, for validation and testing
    pub fn all_templates(&self) -> &'static [RouteTemplate] {
        RouteTemplate::all()
    }

    /// Startup completeness check over the whole table
    ///
    /// Verifies that every (template, locale) pair has a pattern, that
    /// patterns are rooted, and that slugged-ness agrees between the
    /// canonical and localized forms. Failure is fatal: a registry that
    /// does not validate must not serve traffic.
    pub fn validate(&self) -> Result<(), RouteError> {
        for &template in RouteTemplate::all() {
            let canonical = template.canonical();
            for &locale in Locale::all() {
                let pattern = self.localized_pattern(template, locale)?;

                if !pattern.starts_with('/') {
                    return Err(RouteError::IncompleteTable {
                        reason: format!(
                            "pattern {pattern} for {canonical} ({locale}) is not rooted"
                        ),
                    });
                }

                if pattern.contains(SLUG_PLACEHOLDER) != canonical.contains(SLUG_PLACEHOLDER) {
                    return Err(RouteError::IncompleteTable {
                        reason: format!(
                            "slug placeholder mismatch between {canonical} and {pattern} ({locale})"
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Substitute the slug placeholder in a localized pattern
pub fn fill_slug(pattern: &str, slug: &str) -> String {
    pattern.replace(SLUG_PLACEHOLDER, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_completeness() {
        let registry = PathnameRegistry::new();
        assert!(registry.validate().is_ok());

        for &template in registry.all_templates() {
            for &locale in Locale::all() {
                let pattern = registry.localized_pattern(template, locale).unwrap();
                assert!(!pattern.is_empty());
                assert!(pattern.starts_with('/'));
            }
        }
    }

    #[test]
    fn test_localized_patterns() {
        let registry = PathnameRegistry::new();
        assert_eq!(
            registry
                .localized_pattern(RouteTemplate::ProductDetail, Locale::Tr)
                .unwrap(),
            "/urun/[slug]"
        );
        assert_eq!(
            registry
                .localized_pattern(RouteTemplate::PageDetail, Locale::En)
                .unwrap(),
            "/page/[slug]"
        );
        assert_eq!(
            registry
                .localized_pattern(RouteTemplate::Products, Locale::Tr)
                .unwrap(),
            "/urunler"
        );
    }

    #[test]
    fn test_static_prefix() {
        let registry = PathnameRegistry::new();
        assert_eq!(
            registry
                .static_prefix(RouteTemplate::ProductDetail, Locale::Tr)
                .unwrap(),
            "urun"
        );
        assert_eq!(
            registry
                .static_prefix(RouteTemplate::PostDetail, Locale::En)
                .unwrap(),
            "post"
        );
    }

    #[test]
    fn test_reverse_lookup_static() {
        let registry = PathnameRegistry::new();
        assert_eq!(
            registry.template_for_static_path("/products"),
            Some((RouteTemplate::Products, Locale::En))
        );
        assert_eq!(
            registry.template_for_static_path("/urunler"),
            Some((RouteTemplate::Products, Locale::Tr))
        );
        assert_eq!(registry.template_for_static_path("/nonsense"), None);
        // Slugged templates never match the static lookup
        assert_eq!(registry.template_for_static_path("/urun/[slug]"), None);
    }

    #[test]
    fn test_fill_slug() {
        assert_eq!(fill_slug("/urun/[slug]", "elma"), "/urun/elma");
        assert_eq!(fill_slug("/products", "elma"), "/products");
    }

    #[test]
    fn test_has_slug() {
        assert!(RouteTemplate::ProductDetail.has_slug());
        assert!(!RouteTemplate::Products.has_slug());
        assert!(RouteTemplate::TagDetail.has_slug());
        assert!(!RouteTemplate::TagIndex.has_slug());
    }
}
