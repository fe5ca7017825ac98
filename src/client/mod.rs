//! HTTP client for the remote content API
//!
//! Thin GET+JSON client over the catalog backend with the resilience the
//! locale switcher's contract needs: a request timeout (a hung fetch must
//! not leave a switch pending forever), rate limiting, and bounded retry
//! with exponential backoff on transient server errors. 404 is a normal
//! outcome ([`FetchError::NotFound`]), not a retry case.
//!
//! [`ContentSource`] is the capability the resolver consumes; tests swap in
//! in-memory sources, production uses [`ContentClient`].

use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;
use crate::metrics;
use crate::models::{
    menu_for_locale, Category, ContentItem, Homepage, Locale, MenuItem, Page, Product, SearchHit,
    SearchHitKind,
};
use crate::routing::classify::ContentKind;
use crate::utils::error::FetchError;

/// Capability of looking up a single content item in a given locale
///
/// This is the only operation the locale-switch resolver needs from the
/// content API.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_item(
        &self,
        locale: Locale,
        kind: ContentKind,
        slug: &str,
    ) -> Result<ContentItem, FetchError>;
}

/// Content-API client with rate limiting and bounded retry
pub struct ContentClient {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// Rate limiter to control request frequency
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,

    /// Maximum number of retry attempts for failed requests
    max_retries: u32,

    /// Base delay in milliseconds for exponential backoff
    base_delay_ms: u64,

    /// API origin, e.g. `http://localhost:8000`; test setups point this at
    /// a mock server
    base_url: String,
}

impl ContentClient {
    /// Create a client with default retry and timeout settings
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` for an unparsable base URL and
    /// `FetchError::Http` if the HTTP client cannot be created.
    pub fn new(base_url: &str, requests_per_second: u32) -> Result<Self, FetchError> {
        Self::with_config(base_url, requests_per_second, 3, Duration::from_secs(10))
    }

    /// Create a client with custom retry and timeout settings
    pub fn with_config(
        base_url: &str,
        requests_per_second: u32,
        max_retries: u32,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let user_agent = format!("vitrin/{}", env!("CARGO_PKG_VERSION"));
        Self::build(base_url, requests_per_second, max_retries, timeout, &user_agent)
    }

    fn build(
        base_url: &str,
        requests_per_second: u32,
        max_retries: u32,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(user_agent)
            .build()?;

        let rate = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::new(1).unwrap());
        let quota = Quota::per_second(rate);
        let rate_limiter = RateLimiter::direct(quota);

        Ok(Self {
            client,
            rate_limiter,
            max_retries,
            base_delay_ms: 500,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the application configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        Self::build(
            &config.base_url,
            config.rate_limit,
            config.max_retries,
            Duration::from_secs(config.request_timeout_secs),
            &config.user_agent,
        )
    }

    /// Navigation menu entries for one locale, ordered
    ///
    /// The menuitems endpoint returns both locales in one flat list;
    /// filtering happens client-side.
    pub async fn menu_items(&self, locale: Locale) -> Result<Vec<MenuItem>, FetchError> {
        let items: Vec<MenuItem> = self.get_json("/api/menuitems/").await?;
        Ok(menu_for_locale(items, locale))
    }

    /// Homepage content blocks for one locale
    pub async fn homepage(&self, locale: Locale) -> Result<Vec<Homepage>, FetchError> {
        self.get_json(&format!("/api/{locale}/homepage/")).await
    }

    /// All products in one locale
    pub async fn products(&self, locale: Locale) -> Result<Vec<Product>, FetchError> {
        self.get_json(&format!("/api/{locale}/products/")).await
    }

    /// All pages in one locale
    pub async fn pages(&self, locale: Locale) -> Result<Vec<Page>, FetchError> {
        self.get_json(&format!("/api/{locale}/pages/")).await
    }

    /// Products in a category
    pub async fn category_products(
        &self,
        locale: Locale,
        slug: &str,
    ) -> Result<Vec<Product>, FetchError> {
        self.get_json(&format!("/api/{locale}/category/{slug}/"))
            .await
    }

    /// Products carrying a tag
    pub async fn tag_products(&self, locale: Locale, slug: &str) -> Result<Vec<Product>, FetchError> {
        self.get_json(&format!("/api/{locale}/tags/{slug}/")).await
    }

    /// Keyword search over products, filtered to one locale
    pub async fn search_products(
        &self,
        locale: Locale,
        query: &str,
    ) -> Result<Vec<Product>, FetchError> {
        let products: Vec<Product> = self.get_json(&search_endpoint("products", query)).await?;
        Ok(products
            .into_iter()
            .filter(|p| p.lang == locale.as_str())
            .collect())
    }

    /// Keyword search over categories, filtered to one locale
    pub async fn search_categories(
        &self,
        locale: Locale,
        query: &str,
    ) -> Result<Vec<Category>, FetchError> {
        let categories: Vec<Category> = self.get_json(&search_endpoint("categories", query)).await?;
        Ok(categories
            .into_iter()
            .filter(|c| c.lang == locale.as_str())
            .collect())
    }

    /// Merged keyword search over products and categories
    pub async fn search(&self, locale: Locale, query: &str) -> Result<Vec<SearchHit>, FetchError> {
        let products = self.search_products(locale, query).await?;
        let categories = self.search_categories(locale, query).await?;

        let mut hits: Vec<SearchHit> = products
            .into_iter()
            .map(|p| SearchHit {
                title: p.title,
                slug: p.slug,
                kind: SearchHitKind::Product,
            })
            .collect();
        hits.extend(categories.into_iter().map(|c| SearchHit {
            title: c.title,
            slug: c.slug,
            kind: SearchHitKind::Category,
        }));
        Ok(hits)
    }

    /// GET an endpoint and decode the JSON body, with rate limiting and
    /// retry on transient failures
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        // Wait for rate limiter
        self.rate_limiter.until_ready().await;

        self.fetch_with_retry(endpoint).await
    }

    /// Fetch with exponential backoff retry logic
    async fn fetch_with_retry<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            // Apply exponential backoff for retries
            if attempt > 0 {
                let delay = self.base_delay_ms * 2_u64.pow(attempt - 1);
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }

            let started = Instant::now();
            match self.client.get(&url).send().await {
                Ok(response) => {
                    let status = response.status();
                    metrics::record_api_request(endpoint, status.as_u16());
                    metrics::observe_api_duration(endpoint, started.elapsed().as_secs_f64());

                    if status.is_success() {
                        let body = response.text().await?;
                        return serde_json::from_str(&body).map_err(FetchError::Json);
                    } else if status.as_u16() == 404 {
                        // Not found is a terminal, recoverable outcome
                        return Err(FetchError::NotFound);
                    } else if Self::should_retry(status.as_u16()) {
                        last_error = Some(FetchError::ServerError(status.as_u16()));
                        continue;
                    } else {
                        return Err(FetchError::ServerError(status.as_u16()));
                    }
                }
                Err(e) => {
                    metrics::record_api_request(endpoint, 0);
                    if e.is_timeout() {
                        last_error = Some(FetchError::Timeout);
                    } else {
                        last_error = Some(FetchError::Http(e));
                    }
                }
            }
        }

        // All retries exhausted; surface the last failure if we have one
        Err(last_error.unwrap_or(FetchError::MaxRetriesExceeded))
    }

    /// Determine if a status code should trigger a retry
    ///
    /// Retry on 429 and the transient 5xx family; never on other 4xx.
    fn should_retry(status: u16) -> bool {
        matches!(status, 429 | 500 | 502 | 503 | 504)
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn fetch_item(
        &self,
        locale: Locale,
        kind: ContentKind,
        slug: &str,
    ) -> Result<ContentItem, FetchError> {
        self.get_json(&item_endpoint(locale, kind, slug)).await
    }
}

/// Detail endpoint for a single item: `/api/{locale}/{kind}/{slug}/`
fn item_endpoint(locale: Locale, kind: ContentKind, slug: &str) -> String {
    format!("/api/{}/{}/{}/", locale.as_str(), kind.api_segment(), slug)
}

/// Search endpoint with a URL-encoded query: `/api/{resource}?search=...`
fn search_endpoint(resource: &str, query: &str) -> String {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("search", query)
        .finish();
    format!("/api/{resource}?{encoded}")
}
