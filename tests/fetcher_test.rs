//! Worker proxy client tests against a local mock server.

use serde_json::json;
use terapeek::fetcher::{MetadataFetcher, MetadataSource};
use terapeek::utils::{AppSettings, TeraPeekError, TransportKind};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(server: &MockServer) -> MetadataFetcher {
    let settings = AppSettings {
        worker_base_url: server.uri(),
        ..AppSettings::default()
    };
    MetadataFetcher::new(&settings)
}

#[tokio::test]
async fn returns_worker_object_unchanged() {
    let server = MockServer::start().await;
    let body = json!({
        "directlink": "https://x/y.mp4",
        "file_name": "a.mp4",
        "sizebytes": 1024
    });
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("url", "https://terabox.com/s/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let result = fetcher_for(&server)
        .fetch_metadata("abc123")
        .await
        .expect("metadata");

    assert_eq!(result.into_value(), body);
}

#[tokio::test]
async fn encoded_identifier_reaches_worker_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("url", "https://terabox.com/s/a b&c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"directlink": "https://x"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = fetcher_for(&server).fetch_metadata("a b&c").await;
    assert!(result.is_ok(), "{:?}", result);
}

#[tokio::test]
async fn missing_directlink_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"file_name": "a.mp4", "size": "1 KB"})),
        )
        .mount(&server)
        .await;

    let err = fetcher_for(&server).fetch_metadata("abc").await.unwrap_err();
    assert!(matches!(err, TeraPeekError::MissingDirectLink));
    assert_eq!(err.user_message(), "No direct link found in response.");
}

#[tokio::test]
async fn non_success_status_carries_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"directlink": "https://x"})))
        .mount(&server)
        .await;

    let err = fetcher_for(&server).fetch_metadata("abc").await.unwrap_err();
    assert!(matches!(err, TeraPeekError::RequestFailed { status: 503 }));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let err = fetcher_for(&server).fetch_metadata("abc").await.unwrap_err();
    assert!(matches!(err, TeraPeekError::MalformedResponse(_)));
}

#[tokio::test]
async fn non_object_json_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["https://x"])))
        .mount(&server)
        .await;

    let err = fetcher_for(&server).fetch_metadata("abc").await.unwrap_err();
    assert!(matches!(err, TeraPeekError::MalformedResponse(_)));
}

#[tokio::test]
async fn single_attempt_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = fetcher_for(&server).fetch_metadata("abc").await;
    assert!(matches!(result, Err(TeraPeekError::RequestFailed { status: 500 })));
    // `expect(1)` is verified when the server drops
}

#[tokio::test]
async fn unreachable_worker_is_a_transport_error() {
    let settings = AppSettings {
        worker_base_url: "http://127.0.0.1:1".to_string(),
        ..AppSettings::default()
    };
    let err = MetadataFetcher::new(&settings)
        .fetch_metadata("abc")
        .await
        .unwrap_err();

    match err {
        TeraPeekError::Transport { kind, .. } => assert_eq!(kind, TransportKind::Unreachable),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn thumbnail_bytes_are_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/thumb.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
        .mount(&server)
        .await;

    let bytes = fetcher_for(&server)
        .fetch_thumbnail(&format!("{}/thumb.jpg", server.uri()))
        .await
        .expect("thumbnail");
    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn tls_handshake_failure_is_unreachable() {
    let server = MockServer::start().await;
    let settings = AppSettings {
        worker_base_url: server.uri().replacen("http://", "https://", 1),
        ..AppSettings::default()
    };
    let err = MetadataFetcher::new(&settings)
        .fetch_metadata("abc")
        .await
        .unwrap_err();

    match err {
        TeraPeekError::Transport { kind, .. } => assert_eq!(kind, TransportKind::Unreachable),
        other => panic!("expected transport error, got {:?}", other),
    }
}
