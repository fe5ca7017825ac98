//! Locale switch orchestration
//!
//! Wraps the resolver with the two concerns the UI trigger needs: stale
//! result suppression and navigation. Rapid repeated locale switches race
//! on the single shared resource (browser history); instead of letting the
//! last write win accidentally, every request takes a monotonically
//! increasing generation and a resolution whose generation is stale by the
//! time it completes is discarded without navigating. Exactly one history
//! replace happens per burst of switches, and it belongs to the latest
//! request.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::client::ContentSource;
use crate::metrics;
use crate::models::Locale;
use crate::routing::resolver::LocaleSwitchResolver;

/// Navigation seam: history-replace semantics, supplied by the caller
///
/// The presentation layer replaces the current history entry rather than
/// pushing a new one, so switching locale does not pollute the back stack.
pub trait Navigator: Send + Sync {
    fn replace(&self, path: &str);
}

/// Drives locale switches end to end: resolve, discard if stale, navigate
pub struct LocaleSwitcher<S> {
    resolver: LocaleSwitchResolver<S>,
    generation: AtomicU64,
}

impl<S: ContentSource> LocaleSwitcher<S> {
    pub fn new(resolver: LocaleSwitchResolver<S>) -> Self {
        Self {
            resolver,
            generation: AtomicU64::new(0),
        }
    }

    /// The wrapped resolver
    pub fn resolver(&self) -> &LocaleSwitchResolver<S> {
        &self.resolver
    }

    /// Resolve a switch request, returning the target path only if no newer
    /// request started while this one was in flight
    ///
    /// A `None` means the result was stale and has been discarded; the
    /// newer request is responsible for navigation.
    pub async fn request_switch(
        &self,
        current_path: &str,
        current: Locale,
        target: Locale,
    ) -> Option<String> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let path = self
            .resolver
            .resolve_target_path(current_path, current, target)
            .await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(
                generation = generation,
                path = %path,
                "Discarding stale locale-switch resolution"
            );
            metrics::record_stale_resolution();
            return None;
        }

        Some(path)
    }

    /// Resolve and navigate: performs a history replace to the computed
    /// path unless the resolution went stale. Returns the path navigated
    /// to, if any. Never fails.
    pub async fn switch(
        &self,
        navigator: &dyn Navigator,
        current_path: &str,
        current: Locale,
        target: Locale,
    ) -> Option<String> {
        let path = self.request_switch(current_path, current, target).await?;
        navigator.replace(&path);
        Some(path)
    }
}
