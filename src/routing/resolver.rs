//! Locale-switch path resolution
//!
//! Computes the destination path when the user requests a locale change,
//! preserving their place in the content graph whenever a valid translation
//! exists and degrading to the target locale's root path otherwise.
//!
//! [`LocaleSwitchResolver::resolve_target_path`] is a pure function of its
//! three inputs plus the injected content source; it holds no ambient state
//! and never returns an error. Every failure inside — unreachable API,
//! missing translation, unknown template — is logged and folded into the
//! root fallback, so the only user-visible failure mode is landing on the
//! target locale's home page instead of the translated content page.

use tracing::{debug, error, warn};

use crate::client::ContentSource;
use crate::metrics;
use crate::models::Locale;
use crate::routing::classify::classify;
use crate::routing::pathnames::{fill_slug, PathnameRegistry};
use crate::utils::{is_valid_slug, join_segments, split_segments};

/// Resolves locale-switch requests against the route table and the
/// content API
pub struct LocaleSwitchResolver<S> {
    registry: PathnameRegistry,
    source: S,
}

impl<S: ContentSource> LocaleSwitchResolver<S> {
    /// Create a resolver over the given content source
    pub fn new(source: S) -> Self {
        Self {
            registry: PathnameRegistry::new(),
            source,
        }
    }

    /// The route table this resolver consults
    pub fn registry(&self) -> &PathnameRegistry {
        &self.registry
    }

    /// Compute the path to navigate to when switching `current_path` from
    /// `current` to `target`
    ///
    /// Resolution order:
    /// 1. Same-locale switch is the identity.
    /// 2. Paths addressing a content item (page, post, product) are
    ///    translated through the item's `langslug` cross-reference,
    ///    fetched from the API in the current locale.
    /// 3. Static listing paths are translated through the route table
    ///    without touching the API.
    /// 4. Everything else — including every failure above — resolves to
    ///    the target locale's root path.
    pub async fn resolve_target_path(
        &self,
        current_path: &str,
        current: Locale,
        target: Locale,
    ) -> String {
        if current == target {
            return current_path.to_string();
        }

        metrics::record_locale_switch(current.as_str(), target.as_str());

        let segments = split_segments(current_path);

        // Strip the locale prefix; the URL always carries one, but a bare
        // or prefix-less path must not confuse the classifier.
        let rest: &[&str] = match segments.first() {
            Some(first) if Locale::parse(first).is_some() => &segments[1..],
            _ => &segments[..],
        };

        if rest.is_empty() {
            return target.root_path();
        }

        let slug = rest.last().copied().unwrap_or_default();

        if let Some(kind) = classify(&self.registry, current_path) {
            if !is_valid_slug(slug) {
                warn!(slug = %slug, "Slug failed validation, skipping content lookup");
                metrics::record_switch_fallback("invalid_slug");
                return target.root_path();
            }
            return self.resolve_content_path(kind, slug, current, target).await;
        }

        self.resolve_structural_path(rest, target)
    }

    /// Translate a content-item path via its `langslug` cross-reference
    async fn resolve_content_path(
        &self,
        kind: crate::routing::classify::ContentKind,
        slug: &str,
        current: Locale,
        target: Locale,
    ) -> String {
        let item = match self.source.fetch_item(current, kind, slug).await {
            Ok(item) => item,
            Err(e) => {
                // Recoverable by contract: navigation must never fail
                warn!(
                    kind = %kind,
                    slug = %slug,
                    error = %e,
                    "Content fetch failed, falling back to root"
                );
                metrics::record_switch_fallback("fetch_error");
                return target.root_path();
            }
        };

        let Some(langslug) = item.translated_slug() else {
            // No translated counterpart exists; linking into the target
            // locale would 404, so land on its home page instead.
            debug!(kind = %kind, slug = %slug, "Item has no langslug, falling back to root");
            metrics::record_switch_fallback("missing_langslug");
            return target.root_path();
        };

        match self.registry.localized_pattern(kind.detail_template(), target) {
            Ok(pattern) => format!("/{}{}", target.as_str(), fill_slug(pattern, langslug)),
            Err(e) => {
                // Registry misses validated at startup; reaching this at
                // request time is a programming error.
                debug_assert!(false, "route table invalid at request time: {e}");
                error!(error = %e, "Route table lookup failed, falling back to root");
                metrics::record_switch_fallback("route_table");
                target.root_path()
            }
        }
    }

    /// Translate a static (non-slugged) route through the table, or fall
    /// back to the target locale's root
    fn resolve_structural_path(&self, rest: &[&str], target: Locale) -> String {
        let remaining = join_segments(rest);

        if let Some((template, _)) = self.registry.template_for_static_path(&remaining) {
            match self.registry.localized_pattern(template, target) {
                Ok(pattern) => {
                    metrics::record_switch_fallback("structural");
                    return format!("/{}{}", target.as_str(), pattern);
                }
                Err(e) => {
                    debug_assert!(false, "route table invalid at request time: {e}");
                    error!(error = %e, "Route table lookup failed, falling back to root");
                }
            }
        } else {
            debug!(path = %remaining, "Path not recognized, falling back to root");
        }

        metrics::record_switch_fallback("unclassified");
        target.root_path()
    }
}
