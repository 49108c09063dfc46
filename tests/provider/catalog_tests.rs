// Model catalog tests - sorted listing and the static fallback path.

use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use dwitulis_core::OpenRouterClient;
use dwitulis_core::constants::DEFAULT_MODELS;
use serde_json::json;
use std::net::SocketAddr;
use tokio::net::TcpListener;

async fn spawn_stub(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });
    addr
}

#[tokio::test]
async fn catalog_is_sorted_regardless_of_provider_order() {
    let app = Router::new().route(
        "/models",
        get(|| async {
            Json(json!({"data": [
                {"id": "zulu/last"},
                {"id": "alpha/first"},
                {"id": "mike/middle"}
            ]}))
        }),
    );
    let addr = spawn_stub(app).await;
    let client = OpenRouterClient::new(format!("http://{addr}"), Some("sk-test".to_string()));

    let catalog = client.models().await;

    assert_eq!(
        catalog.models,
        vec!["alpha/first", "mike/middle", "zulu/last"]
    );
    assert!(!catalog.is_fallback());
    assert!(catalog.advisory.is_none());
}

#[tokio::test]
async fn failing_lookup_falls_back_to_the_default_list() {
    let app = Router::new().route(
        "/models",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "down"}))) }),
    );
    let addr = spawn_stub(app).await;
    let client = OpenRouterClient::new(format!("http://{addr}"), Some("sk-test".to_string()));

    let catalog = client.models().await;

    assert!(catalog.is_fallback());
    assert_eq!(catalog.models, DEFAULT_MODELS.map(String::from).to_vec());
}

#[tokio::test]
async fn two_failing_lookups_yield_identical_fallbacks() {
    let app = Router::new().route(
        "/models",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "No auth"}))) }),
    );
    let addr = spawn_stub(app).await;
    let client = OpenRouterClient::new(format!("http://{addr}"), Some("sk-bad".to_string()));

    let first = client.models().await;
    let second = client.models().await;

    assert!(first.is_fallback());
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_listing_also_falls_back() {
    let app = Router::new().route("/models", get(|| async { Json(json!({"data": []})) }));
    let addr = spawn_stub(app).await;
    let client = OpenRouterClient::new(format!("http://{addr}"), Some("sk-test".to_string()));

    let catalog = client.models().await;

    assert!(catalog.is_fallback());
    assert_eq!(catalog.models, DEFAULT_MODELS.map(String::from).to_vec());
}

#[tokio::test]
async fn missing_api_key_never_blocks_the_caller() {
    let client = OpenRouterClient::new("http://127.0.0.1:1", None);

    let catalog = client.models().await;

    assert!(catalog.is_fallback());
    assert!(catalog.advisory.as_deref().unwrap().contains("API key"));
}
