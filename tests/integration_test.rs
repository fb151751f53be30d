use httpmock::prelude::*;
use order_aggregator::aggregator::OrderAggregator;
use order_aggregator::clients::mock::MockProductGateway;
use order_aggregator::lifecycle::{AppConfig, OrderSystem};
use order_aggregator::model::Product;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Starts the full system on a free local port against `product_base_url`.
async fn start_system(product_base_url: String) -> OrderSystem {
    let config = AppConfig::new(product_base_url.parse().unwrap())
        .with_bind_addr("127.0.0.1:0".parse().unwrap())
        .with_timeout(Duration::from_secs(2));
    OrderSystem::start(config).await.expect("Failed to start system")
}

async fn get_order(system: &OrderSystem, order_id: &str) -> (u16, Value) {
    let url = format!("http://{}/orders/{}", system.local_addr(), order_id);
    let resp = reqwest::get(&url).await.expect("Failed to call order service");
    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.expect("Body is not JSON");
    (status, body)
}

/// Full end-to-end test: real server, real HTTP client, stubbed product provider.
#[tokio::test]
async fn test_order_is_enriched_with_product() {
    let provider = MockServer::start_async().await;
    let product_mock = provider
        .mock_async(|when, then| {
            when.method(GET).path("/api/products/1001");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "id": "1001", "name": "Laptop" }));
        })
        .await;

    let system = start_system(provider.base_url()).await;

    let (status, body) = get_order(&system, "123").await;
    assert_eq!(status, 200);
    assert_eq!(body["orderId"], "123");
    assert_eq!(body["product"]["name"], "Laptop");

    // Exactly one provider call per order lookup
    product_mock.assert_async().await;

    system.shutdown().await.expect("Failed to shutdown system");
}

/// A 200 body with a numeric id and no name is still the requested product.
#[tokio::test]
async fn test_loosely_shaped_product_is_passed_through() {
    let provider = MockServer::start_async().await;
    provider
        .mock_async(|when, then| {
            when.method(GET).path("/api/products/1001");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "id": 1001, "price": 5 }));
        })
        .await;

    let system = start_system(provider.base_url()).await;

    let (status, body) = get_order(&system, "123").await;
    assert_eq!(status, 200);
    assert_eq!(body["product"]["id"], "1001");
    assert!(body["product"]["name"].is_null());
    assert_eq!(body["product"]["price"], 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_product_yields_null() {
    let provider = MockServer::start_async().await;
    let product_mock = provider
        .mock_async(|when, then| {
            when.method(GET).path("/api/products/1001");
            then.status(404);
        })
        .await;

    let system = start_system(provider.base_url()).await;

    let (status, body) = get_order(&system, "999").await;
    assert_eq!(status, 200);
    assert_eq!(body["orderId"], "999");
    assert!(body["product"].is_null());
    product_mock.assert_async().await;

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_provider_outage_yields_null() {
    let provider = MockServer::start_async().await;
    provider
        .mock_async(|when, then| {
            when.method(GET).path("/api/products/1001");
            then.status(503);
        })
        .await;

    let system = start_system(provider.base_url()).await;

    let (status, body) = get_order(&system, "42").await;
    assert_eq!(status, 200);
    assert_eq!(body["orderId"], "42");
    assert!(body["product"].is_null());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_provider_yields_null() {
    // Reserve a port, then release it so connections are refused
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let system = start_system(format!("http://127.0.0.1:{}", port)).await;

    let (status, body) = get_order(&system, "123").await;
    assert_eq!(status, 200);
    assert_eq!(body["orderId"], "123");
    assert!(body["product"].is_null());

    system.shutdown().await.unwrap();
}

/// Concurrent lookups against a slow provider complete independently.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_order_lookups() {
    let provider = MockServer::start_async().await;
    let product_mock = provider
        .mock_async(|when, then| {
            when.method(GET).path("/api/products/1001");
            then.status(200)
                .delay(Duration::from_millis(100))
                .header("content-type", "application/json")
                .json_body(json!({ "id": "1001", "name": "Laptop" }));
        })
        .await;

    let system = start_system(provider.base_url()).await;
    let base = format!("http://{}", system.local_addr());
    let client = reqwest::Client::new();

    let mut handles = vec![];
    for i in 0..10 {
        let client = client.clone();
        let url = format!("{}/orders/order-{}", base, i);
        handles.push(tokio::spawn(async move {
            let body: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
            (i, body)
        }));
    }

    for handle in handles {
        let (i, body) = handle.await.unwrap();
        assert_eq!(body["orderId"], format!("order-{}", i));
        assert_eq!(body["product"]["name"], "Laptop");
    }

    assert_eq!(product_mock.hits_async().await, 10);

    system.shutdown().await.unwrap();
}

/// A prebuilt aggregator can be served directly, e.g. with a scripted gateway.
#[tokio::test]
async fn test_start_with_serves_given_aggregator() {
    let gateway = MockProductGateway::new();
    gateway.expect_fetch("1001").return_product(Product::new("1001", "Desk"));

    let aggregator = OrderAggregator::with_fixed_lookup(Arc::new(gateway.clone()));
    let system = OrderSystem::start_with("127.0.0.1:0".parse().unwrap(), aggregator)
        .await
        .unwrap();

    let (status, body) = get_order(&system, "7").await;
    assert_eq!(status, 200);
    assert_eq!(body["product"]["name"], "Desk");

    system.shutdown().await.unwrap();
    gateway.verify();
}
