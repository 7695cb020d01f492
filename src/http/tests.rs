//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for_tests() -> HttpClient {
    let config = HttpClientConfig::builder().no_rate_limit().build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.rate_limit.is_some());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("help-center-articles/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .rate_limit(RateLimiterConfig::new(2, 4))
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(2, 4)));
    assert_eq!(
        config.default_headers,
        vec![(
            "Authorization".to_string(),
            "Basic dXNlcjpwYXNz".to_string()
        )]
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_http_client_rejects_invalid_header() {
    let config = HttpClientConfig::builder()
        .header("Bad Header", "value")
        .build();
    let err = HttpClient::with_config(config).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "header"));
}

#[test]
fn test_http_client_debug_hides_header_values() {
    let config = HttpClientConfig::builder()
        .header("Authorization", "Bearer secret-token")
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let debug = format!("{client:?}");

    assert!(!debug.contains("secret-token"));
    assert!(!client.has_rate_limiter());
}

#[tokio::test]
async fn test_get_sends_accept_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/help_center/articles/"))
        .and(header("Accept", JSON_MEDIA_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\": true}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for_tests();
    let body = client
        .get_bytes(&format!("{}/api/v2/help_center/articles/", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(&body[..], b"{\"ok\": true}");
}

#[tokio::test]
async fn test_get_passes_headers_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/protected"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("Authorization", "Bearer test-token")
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let body = client
        .fetch(&format!("{}/protected", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(&body[..], b"{}");
}

#[tokio::test]
async fn test_get_non_success_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for_tests();
    let url = format!("{}/missing", mock_server.uri());
    let err = client.get_bytes(&url).await.unwrap_err();

    assert!(err.is_transport());
    match err {
        Error::HttpStatus { status, url: u, body } => {
            assert_eq!(status, 404);
            assert_eq!(u, url);
            assert_eq!(body, "Not found");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_error_body_is_truncated() {
    let mock_server = MockServer::start().await;
    let page = format!("<html><body>{}</body></html>", "é".repeat(2000));

    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(403).set_body_string(page))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for_tests();
    let err = client
        .get_bytes(&format!("{}/login", mock_server.uri()))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body, .. } => {
            assert_eq!(status, 403);
            assert!(body.starts_with("<html><body>"));
            assert!(body.ends_with("..."));
            assert!(body.len() <= ERROR_BODY_LIMIT + 3);
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn test_error_excerpt_short_body_unchanged() {
    assert_eq!(super::client::error_excerpt(b"Not found"), "Not found");
    assert_eq!(super::client::error_excerpt(b""), "");
}

#[tokio::test]
async fn test_get_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for_tests();
    let err = client
        .get_bytes(&format!("{}/flaky", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_get_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(100))
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client
        .get_bytes(&format!("{}/slow", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 100 }));
}

#[tokio::test]
async fn test_get_connection_refused() {
    let client = client_for_tests();
    let err = client.get_bytes("http://127.0.0.1:1/").await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_get_bytes_keeps_body_undecoded() {
    let mock_server = MockServer::start().await;
    let raw = b"{\"title\":\"caf\xE9\"}".to_vec();

    Mock::given(method("GET"))
        .and(path("/latin1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(raw.clone()))
        .mount(&mock_server)
        .await;

    let client = client_for_tests();
    let body = client
        .fetch(&format!("{}/latin1", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(&body[..], &raw[..]);
}
