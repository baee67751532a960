use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

mod common;

use common::{FailingTransport, RecordingTransport};

#[tokio::test]
async fn test_health_returns_200() {
    let app = common::test_app(Arc::new(RecordingTransport::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Server is up and running");
}

#[tokio::test]
async fn test_health_unaffected_by_broken_transport() {
    let app = common::test_app(Arc::new(FailingTransport::failing_after(0)));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
