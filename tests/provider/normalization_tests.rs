// Error normalization tests against a stubbed provider.
//
// The stub answers every chat-completion call with a fixed status; the
// client must fold each one into its normalized category without ever
// returning an error.

use axum::{Json, Router, http::StatusCode, routing::post};
use dwitulis_core::{ChatClient, ModelRequest, OpenRouterClient};
use serde_json::{Value, json};
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

fn fixed_status_app(status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/chat/completions",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

async fn complete_against(status: StatusCode, body: Value) -> dwitulis_core::TaskOutcome {
    let addr = spawn_stub(fixed_status_app(status, body)).await;
    let client = OpenRouterClient::new(format!("http://{addr}"), Some("sk-test".to_string()));
    client
        .complete(ModelRequest::rewrite(
            "test-model",
            "Echo the text",
            "Hello world",
        ))
        .await
}

#[tokio::test]
async fn http_401_maps_to_invalid_credentials() {
    let outcome =
        complete_against(StatusCode::UNAUTHORIZED, json!({"error": "No auth"})).await;
    assert!(!outcome.success);
    assert_eq!(outcome.content, "API key tidak valid atau sudah kedaluwarsa.");
}

#[tokio::test]
async fn http_402_maps_to_insufficient_balance() {
    let outcome =
        complete_against(StatusCode::PAYMENT_REQUIRED, json!({"error": "Payment"})).await;
    assert!(!outcome.success);
    assert_eq!(outcome.content, "Saldo akun tidak mencukupi, silakan isi ulang.");
}

#[tokio::test]
async fn http_429_maps_to_throttled() {
    let outcome =
        complete_against(StatusCode::TOO_MANY_REQUESTS, json!({"error": "slow down"})).await;
    assert!(!outcome.success);
    assert_eq!(
        outcome.content,
        "Permintaan terlalu sering, coba beberapa saat lagi."
    );
}

#[tokio::test]
async fn unrecognized_failure_passes_through_behind_marker() {
    let outcome = complete_against(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "exploded"}),
    )
    .await;
    assert!(!outcome.success);
    assert!(outcome.content.starts_with("Kesalahan:"));
}

#[tokio::test]
async fn malformed_success_body_is_normalized_not_raised() {
    // 200 with no choices at all
    let outcome = complete_against(StatusCode::OK, json!({"choices": []})).await;
    assert!(!outcome.success);
    assert!(outcome.content.starts_with("Kesalahan:"));
    assert!(outcome.content.contains("tidak valid"));
}

#[tokio::test]
async fn successful_body_yields_first_choice_content() {
    let outcome = complete_against(
        StatusCode::OK,
        json!({"choices": [
            {"message": {"role": "assistant", "content": "Halo dunia"}},
            {"message": {"role": "assistant", "content": "ignored"}}
        ]}),
    )
    .await;
    assert!(outcome.success);
    assert_eq!(outcome.content, "Halo dunia");
}
