//! GroqClient against a local fake completion service.
//!
//! Each test starts an axum server on an ephemeral port that plays the
//! provider, so success, error, timeout and unreachable paths run offline.

use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use groq_client::{ChatError, CompletionService, ConversationTurn, GroqClient, GroqConfig, ProviderCredential};
use serde_json::{json, Value};

const COMPLETIONS: &str = "/v1/chat/completions";

/// Serve `router` on 127.0.0.1 and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str, timeout: Duration) -> GroqClient {
    let config = GroqConfig::builder()
        .api_url(base_url)
        .model("test-model")
        .timeout(timeout)
        .build();
    GroqClient::new(config).unwrap()
}

fn transcript() -> Vec<ConversationTurn> {
    vec![
        ConversationTurn::system("You are Nova."),
        ConversationTurn::user("How am I doing?"),
    ]
}

async fn echo_completion(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if auth != "Bearer good-key" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "missing key", "type": "auth" } })),
        );
    }

    let turns = body["messages"].as_array().map(Vec::len).unwrap_or(0);
    let first_role = body["messages"][0]["role"].clone();
    (
        StatusCode::OK,
        Json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": body["model"],
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": format!("{} turns, first {}", turns, first_role)
                },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
        })),
    )
}

#[tokio::test]
async fn test_success_returns_reply_and_payload() {
    let base = spawn(Router::new().route(COMPLETIONS, post(echo_completion))).await;
    let client = client_for(&base, Duration::from_secs(5));

    let reply = client
        .complete(&transcript(), &ProviderCredential::new("good-key"))
        .await
        .unwrap();

    assert_eq!(reply.content, "2 turns, first \"system\"");
    assert_eq!(reply.model.as_deref(), Some("test-model"));
    assert_eq!(reply.payload["id"], "chatcmpl-1");
}

#[tokio::test]
async fn test_error_body_message_relayed_and_key_redacted() {
    let router = Router::new().route(
        COMPLETIONS,
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": {
                        "message": "Invalid API Key: gsk_leaky_secret",
                        "type": "invalid_request_error"
                    }
                })),
            )
        }),
    );
    let base = spawn(router).await;
    let client = client_for(&base, Duration::from_secs(5));

    let err = client
        .complete(&transcript(), &ProviderCredential::new("gsk_leaky_secret"))
        .await
        .unwrap_err();

    match &err {
        ChatError::Upstream { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "Invalid API Key: [redacted]");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
    assert!(!format!("{:?} {}", err, err).contains("gsk_leaky_secret"));
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let router = Router::new().route(
        COMPLETIONS,
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "over capacity") }),
    );
    let base = spawn(router).await;
    let client = client_for(&base, Duration::from_secs(5));

    let err = client
        .complete(&transcript(), &ProviderCredential::new("k"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ChatError::Upstream {
            status: 503,
            message: "over capacity".to_string()
        }
    );
}

#[tokio::test]
async fn test_timeout_is_unavailable() {
    let router = Router::new().route(
        COMPLETIONS,
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let base = spawn(router).await;
    let client = client_for(&base, Duration::from_millis(200));

    let err = client
        .complete(&transcript(), &ProviderCredential::new("k"))
        .await
        .unwrap_err();

    assert_eq!(err, ChatError::UpstreamUnavailable);
}

#[tokio::test]
async fn test_unreachable_is_unavailable() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr), Duration::from_secs(2));
    let err = client
        .complete(&transcript(), &ProviderCredential::new("k"))
        .await
        .unwrap_err();

    assert_eq!(err, ChatError::UpstreamUnavailable);
}

#[tokio::test]
async fn test_reply_without_choices_is_malformed() {
    let router = Router::new().route(
        COMPLETIONS,
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let base = spawn(router).await;
    let client = client_for(&base, Duration::from_secs(5));

    let err = client
        .complete(&transcript(), &ProviderCredential::new("k"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::MalformedReply(_)));
}
