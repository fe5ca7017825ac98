//! Locale-aware routing core
//!
//! Everything needed to move a visitor between the site's two languages
//! without losing their place:
//!
//! - [`pathnames`] - the static localized path table
//! - [`classify`] - content-kind classification of request paths
//! - [`resolver`] - the locale-switch path resolution algorithm
//! - [`switcher`] - stale-result suppression and navigation

pub mod classify;
pub mod pathnames;
pub mod resolver;
pub mod switcher;

pub use classify::{classify, ContentKind};
pub use pathnames::{fill_slug, PathnameRegistry, RouteTemplate};
pub use resolver::LocaleSwitchResolver;
pub use switcher::{LocaleSwitcher, Navigator};
