//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use std::time::{Duration, Instant};
use test_case::test_case;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert!(config.base_url.is_none());
    assert!(matches!(config.auth, AuthConfig::None));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .auth(AuthConfig::bearer("tok"))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 5);
    assert!(matches!(config.auth, AuthConfig::Bearer { .. }));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("max_results", "100")
        .query("pagination_token", "abc")
        .header("X-Request-Id", "req-1")
        .json(serde_json::json!({"key": "value"}));

    assert_eq!(
        config.query,
        vec![
            ("max_results".to_string(), "100".to_string()),
            ("pagination_token".to_string(), "abc".to_string()),
        ]
    );
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"req-1".to_string())
    );
    assert!(config.body.is_some());
}

#[test_case(0 => Duration::from_secs(2); "first attempt waits two seconds")]
#[test_case(1 => Duration::from_secs(4); "second attempt waits four seconds")]
#[test_case(2 => Duration::from_secs(6); "third attempt waits six seconds")]
fn test_fallback_backoff(attempt: u32) -> Duration {
    fallback_backoff(attempt)
}

#[tokio::test]
async fn test_http_client_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/12/tweets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"id": "1", "text": "hi", "created_at": "2024-01-01T00:00:00.000Z"}]
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let response = client.get("/users/12/tweets").await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let data: serde_json::Value = client.get_json("/api/data").await.unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_http_client_bearer_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/by/username/ada"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .auth(AuthConfig::bearer("secret-token"))
        .build();

    let client = HttpClient::with_config(config);
    let response = client.get("/users/by/username/ada").await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/12/tweets"))
        .and(query_param("max_results", "100"))
        .and(query_param("pagination_token", "cursor-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let response = client
        .get_with_config(
            "/users/12/tweets",
            RequestConfig::new()
                .query("max_results", "100")
                .query("pagination_token", "cursor-1"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_returns_404_to_caller() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    // Non-429 statuses are not errors at this layer; the caller classifies.
    let client = HttpClient::with_config(config);
    let response = client.get("/api/missing").await.unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_http_client_no_retry_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(3)
        .build();

    let client = HttpClient::with_config(config);
    let response = client.get("/api/broken").await.unwrap();

    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn test_http_client_retry_honors_retry_after() {
    let mock_server = MockServer::start().await;

    // First two calls are rate limited with a one-second hint
    Mock::given(method("GET"))
        .and(path("/api/limited"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "1")
                .set_body_string("Rate limited"),
        )
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/limited"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(3)
        .build();

    let client = HttpClient::with_config(config);
    let start = Instant::now();
    let response = client.get("/api/limited").await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(response.status(), 200);
    // Two waits driven by the header value, not the fallback (2s + 4s)
    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Duration::from_secs(4));
}

#[tokio::test]
async fn test_http_client_retry_exhausted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/always-limited"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "0")
                .set_body_string("Rate limited"),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(3)
        .build();

    let client = HttpClient::with_config(config);
    let result = client.get("/api/always-limited").await;

    assert!(matches!(
        result.unwrap_err(),
        crate::error::Error::RetryExhausted { max_retries: 3 }
    ));
}

#[tokio::test]
async fn test_http_client_full_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/test"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    // Client without base URL
    let client = HttpClient::new();

    let response = client
        .get(&format!("{}/api/test", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("config"));
}
