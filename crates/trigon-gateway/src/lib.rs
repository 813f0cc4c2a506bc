// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Trigon classifier.
//!
//! The gateway is the transport boundary: it strictly parses untrusted JSON
//! into three sides, calls [`trigon_core::classify_sides`], and returns the
//! result as JSON. Transport failures (malformed body, non-numeric fields)
//! are answered here and never reach the classifier.

pub mod handlers;
pub mod request;
pub mod server;

use std::net::SocketAddr;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use trigon_core::TrigonError;

pub use request::{parse_sides, RequestError};
pub use server::{build_router, GatewayState, ServerConfig};

/// A running (or startable) gateway server.
///
/// `start()` binds synchronously so bind failures surface to the caller,
/// then serves on a background task until `shutdown()` is called, the
/// gateway is dropped, or the parent token is cancelled.
pub struct Gateway {
    config: ServerConfig,
    shutdown: CancellationToken,
    server_handle: Mutex<Option<JoinHandle<Result<(), TrigonError>>>>,
}

impl Gateway {
    /// Create a new Gateway with its own shutdown token.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_shutdown(config, CancellationToken::new())
    }

    /// Create a Gateway that also stops when `parent` is cancelled.
    pub fn with_shutdown(config: ServerConfig, parent: CancellationToken) -> Self {
        Self {
            config,
            shutdown: parent.child_token(),
            server_handle: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind the listener and start serving in the background.
    ///
    /// Returns the bound address, which differs from the configured one when
    /// the configured port is 0.
    pub async fn start(&self) -> Result<SocketAddr, TrigonError> {
        let mut handle = self.server_handle.lock().await;
        if handle.is_some() {
            return Err(TrigonError::Internal("gateway already started".to_string()));
        }

        let listener = server::bind(&self.config).await?;
        let addr = server::local_addr(&listener)?;
        let app = server::build_router(&self.config, GatewayState::new());
        let shutdown = self.shutdown.clone();

        *handle = Some(tokio::spawn(async move {
            server::serve(listener, app, shutdown).await
        }));

        tracing::info!(%addr, "gateway started");
        Ok(addr)
    }

    /// Whether the background server task is still running.
    pub async fn is_running(&self) -> bool {
        let handle = self.server_handle.lock().await;
        handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Wait for the server task to finish, returning its result.
    ///
    /// Returns immediately with `Ok(())` if the gateway was never started.
    pub async fn wait(&self) -> Result<(), TrigonError> {
        let task = self.server_handle.lock().await.take();
        match task {
            Some(task) => task
                .await
                .map_err(|e| TrigonError::Internal(format!("gateway task failed: {e}")))?,
            None => Ok(()),
        }
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn shutdown(&self) -> Result<(), TrigonError> {
        self.shutdown.cancel();
        self.wait().await
    }
}

impl Drop for Gateway {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            port: 0, // Will bind to random port
            ..ServerConfig::default()
        }
    }

    #[tokio::test]
    async fn gateway_not_running_before_start() {
        let gateway = Gateway::new(test_config());
        assert!(!gateway.is_running().await);
        assert!(gateway.wait().await.is_ok());
    }

    #[tokio::test]
    async fn gateway_start_and_shutdown() {
        let gateway = Gateway::new(test_config());
        let addr = gateway.start().await.unwrap();
        assert_ne!(addr.port(), 0);
        assert!(gateway.is_running().await);

        gateway.shutdown().await.unwrap();
        assert!(!gateway.is_running().await);
    }

    #[tokio::test]
    async fn gateway_rejects_second_start() {
        let gateway = Gateway::new(test_config());
        gateway.start().await.unwrap();
        let err = gateway.start().await.unwrap_err();
        assert!(err.to_string().contains("already started"));
        gateway.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn parent_token_stops_gateway() {
        let parent = CancellationToken::new();
        let gateway = Gateway::with_shutdown(test_config(), parent.clone());
        gateway.start().await.unwrap();

        parent.cancel();
        gateway.wait().await.unwrap();
    }
}
