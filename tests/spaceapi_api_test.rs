// Integration tests for GET /v14 and /v15

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use spaceapi_bridge::api::{create_spaceapi_router, SpaceApiAppState};
use spaceapi_bridge::schema::{StateReading, StatusDocument};
use spaceapi_bridge::translator::{TranslateError, Translator};
use spaceapi_bridge::upstream::{HttpStateSource, StateSource, StatusMapping, UpstreamConfig};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Always answers with the same outcome.
struct FixedSource(Result<StateReading, TranslateError>);

#[async_trait]
impl StateSource for FixedSource {
    async fn fetch(&self) -> Result<StateReading, TranslateError> {
        self.0.clone()
    }
}

/// Answers the n-th call with `open = n is even` and `last_change = n`,
/// after a call-dependent delay so that concurrent requests interleave.
struct SequenceSource {
    next: AtomicI64,
}

#[async_trait]
impl StateSource for SequenceSource {
    async fn fetch(&self) -> Result<StateReading, TranslateError> {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(std::time::Duration::from_millis((7 * n % 13) as u64)).await;
        Ok(StateReading {
            open: n % 2 == 0,
            last_change: Some(n),
        })
    }
}

fn create_test_app(source: Arc<dyn StateSource>) -> Router {
    let translator = Translator::new(StatusDocument::metalab(), source);
    create_spaceapi_router(SpaceApiAppState { translator })
}

fn create_http_app(url: String) -> Router {
    let source = HttpStateSource::new(&UpstreamConfig {
        url,
        timeout_seconds: 2,
        schema: StatusMapping::Status,
    })
    .unwrap();
    create_test_app(Arc::new(source))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::ORIGIN, "https://spaceapi.io")
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// GET /v15 with an open upstream returns the document with open = true.
#[tokio::test]
async fn test_get_v15_open() {
    let app = create_test_app(Arc::new(FixedSource(Ok(StateReading::open()))));

    let response = app.oneshot(get("/v15")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let body = body_bytes(response).await;
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(doc["space"], "Metalab");
    assert_eq!(doc["state"]["open"], true);
    assert!(doc["state"].get("lastchange").is_none());
}

/// GET /v14 with a closed upstream returns open = false.
#[tokio::test]
async fn test_get_v14_closed() {
    let app = create_test_app(Arc::new(FixedSource(Ok(StateReading::closed()))));

    let response = app.oneshot(get("/v14")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(doc["state"]["open"], false);
    assert_eq!(doc["api_compatibility"], serde_json::json!(["14", "15"]));
}

/// Both routes serve byte-identical documents.
#[tokio::test]
async fn test_v14_and_v15_identical() {
    let app = create_test_app(Arc::new(FixedSource(Ok(StateReading::open()))));

    let v14 = body_bytes(app.clone().oneshot(get("/v14")).await.unwrap()).await;
    let v15 = body_bytes(app.oneshot(get("/v15")).await.unwrap()).await;

    assert_eq!(v14, v15);
}

/// Translation failure maps to 500 with the error text as plain text.
#[tokio::test]
async fn test_unknown_state_returns_500() {
    let app = create_test_app(Arc::new(FixedSource(Err(TranslateError::UnknownState(
        "maybe".to_string(),
    )))));

    let response = app.oneshot(get("/v15")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    let body = body_bytes(response).await;
    assert_eq!(String::from_utf8(body).unwrap(), "unknown state: maybe");
}

/// Only GET is routed.
#[tokio::test]
async fn test_post_not_allowed() {
    let app = create_test_app(Arc::new(FixedSource(Ok(StateReading::open()))));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v15")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Unknown paths are 404.
#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_test_app(Arc::new(FixedSource(Ok(StateReading::open()))));

    let response = app.oneshot(get("/v13")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Health check does not consult the upstream.
#[tokio::test]
async fn test_health_skips_upstream() {
    let app = create_test_app(Arc::new(FixedSource(Err(TranslateError::Transport(
        "down".to_string(),
    )))));

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ok");
}

/// Sequential requests with the same upstream answer are byte-identical.
#[tokio::test]
async fn test_sequential_requests_identical() {
    let app = create_test_app(Arc::new(FixedSource(Ok(StateReading::closed()))));

    let first = body_bytes(app.clone().oneshot(get("/v15")).await.unwrap()).await;
    let second = body_bytes(app.oneshot(get("/v15")).await.unwrap()).await;

    assert_eq!(first, second);
}

/// Concurrent requests each see exactly the state of their own fetch.
#[tokio::test]
async fn test_concurrent_requests_do_not_leak_state() {
    const N: i64 = 32;
    let app = create_test_app(Arc::new(SequenceSource {
        next: AtomicI64::new(0),
    }));

    let handles: Vec<_> = (0..N)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let response = app.oneshot(get("/v15")).await.unwrap();
                assert_eq!(response.status(), StatusCode::OK);
                let doc: serde_json::Value =
                    serde_json::from_slice(&body_bytes(response).await).unwrap();
                (
                    doc["state"]["open"].as_bool().unwrap(),
                    doc["state"]["lastchange"].as_i64().unwrap(),
                )
            })
        })
        .collect();

    let mut seen = Vec::new();
    for handle in handles {
        let (open, last_change) = handle.await.unwrap();
        // open and lastchange must come from the same fetch
        assert_eq!(open, last_change % 2 == 0);
        seen.push(last_change);
    }

    seen.sort_unstable();
    assert_eq!(seen, (0..N).collect::<Vec<_>>());
}

/// End to end: upstream says open.
#[tokio::test]
async fn test_upstream_open_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/status.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"open"}"#)
        .create_async()
        .await;

    let app = create_http_app(format!("{}/status.json", server.url()));
    let response = app.oneshot(get("/v15")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(doc["state"]["open"], true);
}

/// End to end: upstream says closed.
#[tokio::test]
async fn test_upstream_closed_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/status.json")
        .with_status(200)
        .with_body(r#"{"status":"closed"}"#)
        .create_async()
        .await;

    let app = create_http_app(format!("{}/status.json", server.url()));
    let response = app.oneshot(get("/v14")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(doc["state"]["open"], false);
}

/// End to end: upstream answers with an unrecognized literal.
#[tokio::test]
async fn test_upstream_maybe_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/status.json")
        .with_status(200)
        .with_body(r#"{"status":"maybe"}"#)
        .create_async()
        .await;

    let app = create_http_app(format!("{}/status.json", server.url()));
    let response = app.oneshot(get("/v15")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(body, "unknown state: maybe");
}

/// End to end: upstream unreachable.
#[tokio::test]
async fn test_upstream_connection_refused_end_to_end() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = create_http_app(format!("http://{}/status.json", addr));
    let response = app.oneshot(get("/v15")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.starts_with("state api request failed"));
}

/// End to end: upstream answers with a server error.
#[tokio::test]
async fn test_upstream_error_status_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/status.json")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let app = create_http_app(format!("{}/status.json", server.url()));
    let response = app.oneshot(get("/v15")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("503"));
}

/// End to end: upstream accepts the connection but never answers.
#[tokio::test]
async fn test_upstream_timeout_end_to_end() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let hold = tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            if let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        }
    });

    let app = create_http_app(format!("http://{}/status.json", addr));
    let started = std::time::Instant::now();
    let response = app.oneshot(get("/v14")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(started.elapsed() < std::time::Duration::from_secs(10));
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.starts_with("state api request failed"));
    hold.abort();
}
