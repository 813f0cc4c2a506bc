// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway tests over a real TCP socket.

use reqwest::StatusCode;
use trigon_test_utils::TestServer;

#[tokio::test]
async fn classifies_over_http() {
    let server = TestServer::start().await.unwrap();

    let (status, report) = server.identify(5.0, 5.0, 3.0).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report.kind, "Isosceles");
    assert!(report.is_valid);

    let (status, report) = server.identify(0.0, 1.0, 1.0).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert!(!report.is_valid);
    assert_eq!(
        report.error.as_deref(),
        Some("All sides must be positive numbers")
    );

    server.stop().await.unwrap();
}

#[tokio::test]
async fn malformed_body_over_http_is_400() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("not json at all").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Invalid request format");

    server.stop().await.unwrap();
}

#[tokio::test]
async fn body_limit_applies_over_http() {
    let server = TestServer::builder()
        .with_max_body_bytes(64)
        .build()
        .await
        .unwrap();

    let body = format!(r#"{{"sideA":1,"sideB":1,"sideC":1,"pad":"{}"}}"#, "y".repeat(128));
    let response = server.post_raw(body).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    server.stop().await.unwrap();
}

#[tokio::test]
async fn form_page_can_be_disabled() {
    let server = TestServer::builder().with_form(false).build().await.unwrap();
    let response = server.client().get(server.url("/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    server.stop().await.unwrap();
}
