use std::sync::Arc;
use std::time::Duration;

use kstmart_core::api::{ApiClient, ApiError, ProductSource};
use kstmart_core::cache::{FileStore, HydrationStore, ProductsCache, PRODUCTS_CACHE_KEY};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn products_body() -> serde_json::Value {
    serde_json::json!({
        "products": [
            {"id": 1, "title": "Phone X", "price": 999, "category": "smartphones", "stock": 5, "thumbnail": "t1", "rating": 4.5},
            {"id": 2, "title": "Laptop Z", "price": 1999, "category": "laptops", "stock": 3, "images": ["i2"]},
            {"id": 5, "title": "Phone Y", "price": 799, "category": "smartphones", "stock": 2}
        ],
        "total": 3,
        "skip": 0,
        "limit": 200
    })
}

async fn mount_products(server: &MockServer, response: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("limit", "200"))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_products_success() {
    let server = MockServer::start().await;
    mount_products(&server, ResponseTemplate::new(200).set_body_json(products_body()), 1).await;

    let client = ApiClient::with_base_url(server.uri()).unwrap();
    let products = client.fetch_products(&CancellationToken::new()).await.unwrap();

    assert_eq!(products.len(), 3);
    assert_eq!(products[0].thumbnail.as_deref(), Some("t1"));
    assert_eq!(products[1].images, vec!["i2".to_string()]);
}

#[tokio::test]
async fn test_missing_products_field_degrades_to_empty() {
    let server = MockServer::start().await;
    mount_products(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"total": 0})),
        1,
    )
    .await;

    let client = ApiClient::with_base_url(server.uri()).unwrap();
    let products = client.fetch_products(&CancellationToken::new()).await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_network_error() {
    let server = MockServer::start().await;
    mount_products(&server, ResponseTemplate::new(503).set_body_string("maintenance"), 1).await;

    let client = ApiClient::with_base_url(server.uri()).unwrap();
    let err = client.fetch_products(&CancellationToken::new()).await.unwrap_err();

    assert!(!err.is_cancelled());
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_malformed_body_is_network_error_with_status() {
    let server = MockServer::start().await;
    mount_products(&server, ResponseTemplate::new(200).set_body_string("<html>"), 1).await;

    let client = ApiClient::with_base_url(server.uri()).unwrap();
    let err = client.fetch_products(&CancellationToken::new()).await.unwrap_err();

    assert_eq!(err.status(), Some(200));
    assert!(err.to_string().contains("Invalid JSON response"));
}

#[tokio::test]
async fn test_connection_refused_is_network_error_without_status() {
    // Bind then drop a listener so the port is known to be closed
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let client = ApiClient::with_base_url(uri).unwrap();
    let err = client.fetch_products(&CancellationToken::new()).await.unwrap_err();

    assert!(matches!(err, ApiError::Network { status: None, .. }));
}

#[tokio::test]
async fn test_cancel_in_flight_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(products_body())
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let cache = ProductsCache::new(ApiClient::with_base_url(server.uri()).unwrap());
    let cancel = CancellationToken::new();

    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let result = tokio::time::timeout(Duration::from_secs(5), cache.fetch_all(&cancel))
        .await
        .expect("cancellation should abort the request promptly");

    assert_eq!(result, Err(ApiError::Cancelled));
    assert_eq!(cache.expires_at(), None);
}

#[tokio::test]
async fn test_cache_issues_one_request_within_ttl() {
    let server = MockServer::start().await;
    mount_products(&server, ResponseTemplate::new(200).set_body_json(products_body()), 1).await;

    let cache = ProductsCache::new(ApiClient::with_base_url(server.uri()).unwrap());
    let cancel = CancellationToken::new();

    let first = cache.fetch_all(&cancel).await.unwrap();
    let second = cache.fetch_all(&cancel).await.unwrap();
    assert_eq!(first, second);

    let categories = cache.categories(&cancel).await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "smartphones");
    assert_eq!(categories[0].products_count, 2);
    assert_eq!(categories[0].total_stock, 7);
    assert_eq!(categories[0].thumbnail.as_deref(), Some("t1"));
    assert_eq!(categories[1].thumbnail.as_deref(), Some("i2"));
    // `expect(1)` is verified when the server drops
}

#[tokio::test]
async fn test_invalidate_issues_new_request() {
    let server = MockServer::start().await;
    mount_products(&server, ResponseTemplate::new(200).set_body_json(products_body()), 2).await;

    let cache = ProductsCache::new(ApiClient::with_base_url(server.uri()).unwrap());
    let cancel = CancellationToken::new();

    cache.fetch_all(&cancel).await.unwrap();
    cache.invalidate();
    cache.fetch_all(&cancel).await.unwrap();
}

#[tokio::test]
async fn test_file_store_survives_restart() {
    let server = MockServer::start().await;
    mount_products(&server, ResponseTemplate::new(200).set_body_json(products_body()), 1).await;

    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().to_path_buf()).unwrap());
    let cancel = CancellationToken::new();

    let first = ProductsCache::new(ApiClient::with_base_url(server.uri()).unwrap())
        .with_store(store.clone());
    let fetched = first.fetch_all(&cancel).await.unwrap();
    drop(first);

    let raw = store.read(PRODUCTS_CACHE_KEY).unwrap().expect("durable copy written");
    let durable: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(durable["expiresAt"].is_i64());
    assert_eq!(durable["value"].as_array().map(Vec::len), Some(3));

    let second = ProductsCache::new(ApiClient::with_base_url(server.uri()).unwrap())
        .with_store(store.clone());
    assert_eq!(second.fetch_all(&cancel).await.unwrap(), fetched);
}
