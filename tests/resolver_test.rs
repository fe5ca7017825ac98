//! End-to-end locale-switch resolution against a mock content API
//!
//! These tests exercise the full resolve path through ContentClient.

mod common;

use std::time::Duration;

use vitrin::client::ContentClient;
use vitrin::models::Locale;
use vitrin::routing::LocaleSwitchResolver;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver_for(server: &MockServer) -> LocaleSwitchResolver<ContentClient> {
    let client =
        ContentClient::with_config(&server.uri(), 100, 0, Duration::from_secs(5)).unwrap();
    LocaleSwitchResolver::new(client)
}

/// Content path with a translation lands on the localized detail route
#[tokio::test]
async fn test_product_detail_resolves_to_translated_slug() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/en/product/red-orange/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::item_with_translation("red-orange", "en", "kirmizi-portakal")),
        )
        .mount(&mock_server)
        .await;

    let resolver = resolver_for(&mock_server);
    let target = resolver
        .resolve_target_path("/en/product/red-orange", Locale::En, Locale::Tr)
        .await;

    assert_eq!(target, "/tr/urun/kirmizi-portakal");
}

/// Reverse direction, Turkish page to English
#[tokio::test]
async fn test_page_detail_resolves_from_turkish() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tr/page/hakkimizda/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::item_with_translation("hakkimizda", "tr", "about")),
        )
        .mount(&mock_server)
        .await;

    let resolver = resolver_for(&mock_server);
    let target = resolver
        .resolve_target_path("/tr/sayfa/hakkimizda", Locale::Tr, Locale::En)
        .await;

    assert_eq!(target, "/en/page/about");
}

/// Item without a translation falls back to the target locale root
#[tokio::test]
async fn test_missing_translation_falls_back_to_root() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/en/post/english-only/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::item_without_translation("english-only", "en")),
        )
        .mount(&mock_server)
        .await;

    let resolver = resolver_for(&mock_server);
    let target = resolver
        .resolve_target_path("/en/post/english-only", Locale::En, Locale::Tr)
        .await;

    assert_eq!(target, "/tr");
}

/// A 404 from the API degrades to the target locale root, never an error
#[tokio::test]
async fn test_not_found_falls_back_to_root() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/en/product/ghost/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let resolver = resolver_for(&mock_server);
    let target = resolver
        .resolve_target_path("/en/product/ghost", Locale::En, Locale::Tr)
        .await;

    assert_eq!(target, "/tr");
}

/// A server error also degrades to the target locale root
#[tokio::test]
async fn test_server_error_falls_back_to_root() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/en/product/red-orange/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let resolver = resolver_for(&mock_server);
    let target = resolver
        .resolve_target_path("/en/product/red-orange", Locale::En, Locale::Tr)
        .await;

    assert_eq!(target, "/tr");
}

/// An unreachable API still resolves, to the target root
#[tokio::test]
async fn test_unreachable_api_falls_back_to_root() {
    // Nothing listens on this port
    let client = ContentClient::with_config(
        "http://127.0.0.1:9",
        100,
        0,
        Duration::from_millis(500),
    )
    .unwrap();
    let resolver = LocaleSwitchResolver::new(client);

    let target = resolver
        .resolve_target_path("/en/page/about", Locale::En, Locale::Tr)
        .await;

    assert_eq!(target, "/tr");
}

/// Structural listing paths translate without touching the API
#[tokio::test]
async fn test_listing_path_needs_no_fetch() {
    let mock_server = MockServer::start().await;

    // Any API call would violate the expectation
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let resolver = resolver_for(&mock_server);

    let target = resolver
        .resolve_target_path("/en/products", Locale::En, Locale::Tr)
        .await;
    assert_eq!(target, "/tr/urunler");

    let target = resolver
        .resolve_target_path("/tr/kategoriler", Locale::Tr, Locale::En)
        .await;
    assert_eq!(target, "/en/categories");
}

/// Bare locale root switches to the other root
#[tokio::test]
async fn test_root_switches_to_root() {
    let mock_server = MockServer::start().await;
    let resolver = resolver_for(&mock_server);

    let target = resolver
        .resolve_target_path("/en", Locale::En, Locale::Tr)
        .await;
    assert_eq!(target, "/tr");

    let target = resolver.resolve_target_path("/", Locale::En, Locale::Tr).await;
    assert_eq!(target, "/tr");
}

/// Same-locale switch is the identity
#[tokio::test]
async fn test_same_locale_is_identity() {
    let mock_server = MockServer::start().await;
    let resolver = resolver_for(&mock_server);

    let target = resolver
        .resolve_target_path("/en/product/red-orange", Locale::En, Locale::En)
        .await;
    assert_eq!(target, "/en/product/red-orange");
}

/// Category and tag detail pages are structural, not content lookups
#[tokio::test]
async fn test_category_detail_falls_back_without_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let resolver = resolver_for(&mock_server);
    let target = resolver
        .resolve_target_path("/en/category/citrus", Locale::En, Locale::Tr)
        .await;

    assert_eq!(target, "/tr");
}
