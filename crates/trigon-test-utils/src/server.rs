// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process gateway for end-to-end HTTP tests.
//!
//! `TestServer` starts a real [`Gateway`] on an ephemeral localhost port and
//! wraps a `reqwest` client pointed at it. The server stops when the
//! `TestServer` is dropped.

use std::net::SocketAddr;

use reqwest::StatusCode;
use trigon_core::{TriangleReport, TrigonError};
use trigon_gateway::{Gateway, ServerConfig};

/// Builder for test servers with non-default gateway settings.
pub struct TestServerBuilder {
    config: ServerConfig,
}

impl TestServerBuilder {
    fn new() -> Self {
        Self {
            config: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                ..ServerConfig::default()
            },
        }
    }

    /// Set the request body limit.
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.config.max_body_bytes = max_body_bytes;
        self
    }

    /// Enable or disable the HTML form route.
    pub fn with_form(mut self, serve_form: bool) -> Self {
        self.config.serve_form = serve_form;
        self
    }

    /// Start the gateway and return a connected test server.
    pub async fn build(self) -> Result<TestServer, TrigonError> {
        let gateway = Gateway::new(self.config);
        let addr = gateway.start().await?;
        Ok(TestServer {
            gateway,
            addr,
            client: reqwest::Client::new(),
        })
    }
}

/// A gateway listening on localhost plus an HTTP client for it.
pub struct TestServer {
    gateway: Gateway,
    addr: SocketAddr,
    client: reqwest::Client,
}

impl TestServer {
    /// Create a builder for custom configuration.
    pub fn builder() -> TestServerBuilder {
        TestServerBuilder::new()
    }

    /// Start a server with default settings.
    pub async fn start() -> Result<TestServer, TrigonError> {
        Self::builder().build().await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST a raw body to the classification endpoint.
    pub async fn post_raw(&self, body: impl Into<reqwest::Body>) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(self.url("/api/identify-triangle"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
    }

    /// POST three sides and decode the report.
    pub async fn identify(
        &self,
        a: f64,
        b: f64,
        c: f64,
    ) -> reqwest::Result<(StatusCode, TriangleReport)> {
        let body = serde_json::json!({ "sideA": a, "sideB": b, "sideC": c });
        let response = self
            .client
            .post(self.url("/api/identify-triangle"))
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        Ok((status, response.json().await?))
    }

    /// Stop the server and wait for it to finish.
    pub async fn stop(self) -> Result<(), TrigonError> {
        self.gateway.shutdown().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_binds_ephemeral_port() {
        let server = TestServer::start().await.unwrap();
        assert_ne!(server.addr().port(), 0);
        assert!(server.url("/health").starts_with("http://127.0.0.1:"));
        server.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_server_classifies() {
        let server = TestServer::start().await.unwrap();
        let (status, report) = server.identify(3.0, 4.0, 5.0).await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report.kind, "Scalene");
        server.stop().await.unwrap();
    }
}
