// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the complete Trigon pipeline.
//!
//! Each test starts an isolated gateway on an ephemeral port and talks to it
//! over real HTTP. Tests are independent and order-insensitive.

use std::sync::Arc;

use trigon_core::{classify, TriangleReport};
use trigon_test_utils::fixtures::{valid_cases, IMPOSSIBLE_TRIANGLE_ERROR, POSITIVE_SIDES_ERROR};
use trigon_test_utils::{TestServer, REFERENCE_CASES};

// ---- HTTP agrees with in-process classification ----

#[tokio::test]
async fn http_matches_library_for_every_reference_case() {
    let server = TestServer::start().await.unwrap();

    for case in REFERENCE_CASES {
        let (a, b, c) = case.sides;
        let (status, report) = server.identify(a, b, c).await.unwrap();
        let local = TriangleReport::from(classify(a, b, c));

        assert_eq!(status, 200, "{}", case.description);
        assert_eq!(report.kind, local.kind, "{}", case.description);
        assert_eq!(report.is_valid, local.is_valid, "{}", case.description);
        assert_eq!(report.error, local.error, "{}", case.description);
    }

    server.stop().await.unwrap();
}

#[tokio::test]
async fn rejection_messages_reach_the_client_verbatim() {
    let server = TestServer::start().await.unwrap();

    let (_, report) = server.identify(0.0, 1.0, 1.0).await.unwrap();
    assert_eq!(report.error.as_deref(), Some(POSITIVE_SIDES_ERROR));
    assert_eq!(report.kind, "");

    let (_, report) = server.identify(1.0, 2.0, 10.0).await.unwrap();
    assert_eq!(report.error.as_deref(), Some(IMPOSSIBLE_TRIANGLE_ERROR));
    assert!(!report.is_valid);

    server.stop().await.unwrap();
}

// ---- Request validation over the wire ----

#[tokio::test]
async fn malformed_and_non_numeric_bodies_are_bad_requests() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("{not json").await.unwrap();
    assert_eq!(response.status(), 400);
    let report: TriangleReport = response.json().await.unwrap();
    assert_eq!(report.error.as_deref(), Some("Invalid request format"));

    let response = server
        .post_raw(r#"{"sideA": 3, "sideB": "four", "sideC": 5}"#)
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let report: TriangleReport = response.json().await.unwrap();
    assert_eq!(report.error.as_deref(), Some("All sides must be valid numbers"));
    assert_eq!((report.side_a, report.side_b, report.side_c), (3.0, 0.0, 5.0));

    server.stop().await.unwrap();
}

// ---- Concurrency ----

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_are_independent() {
    let server = Arc::new(TestServer::start().await.unwrap());

    let mut handles = Vec::new();
    for case in valid_cases().cycle().take(64) {
        let server = Arc::clone(&server);
        handles.push(tokio::spawn(async move {
            let (a, b, c) = case.sides;
            let (status, report) = server.identify(a, b, c).await.unwrap();
            (case, status, report)
        }));
    }

    for handle in handles {
        let (case, status, report) = handle.await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(report.kind, case.expected_type, "{}", case.description);
        assert!(report.is_valid);
    }

    let server = Arc::into_inner(server).expect("all tasks finished");
    server.stop().await.unwrap();
}

// ---- Lifecycle ----

#[tokio::test]
async fn health_reports_ok_and_version() {
    let server = TestServer::start().await.unwrap();

    let body: serde_json::Value = server
        .client()
        .get(server.url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());

    server.stop().await.unwrap();
}

#[tokio::test]
async fn stopped_server_refuses_connections() {
    let server = TestServer::start().await.unwrap();
    let url = server.url("/health");
    server.stop().await.unwrap();

    let client = reqwest::Client::new();
    assert!(client.get(url).send().await.is_err());
}
