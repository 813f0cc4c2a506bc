// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::net::SocketAddr;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use trigon_core::TrigonError;

use crate::handlers;

/// Health state for the unauthenticated health endpoint.
#[derive(Debug, Clone)]
pub struct HealthState {
    /// Process start time for uptime calculation.
    pub start_time: std::time::Instant,
}

/// Shared state for axum request handlers.
#[derive(Debug, Clone)]
pub struct GatewayState {
    pub health: HealthState,
}

impl GatewayState {
    pub fn new() -> Self {
        Self {
            health: HealthState {
                start_time: std::time::Instant::now(),
            },
        }
    }
}

impl Default for GatewayState {
    fn default() -> Self {
        Self::new()
    }
}

/// Gateway server configuration.
///
/// Mirrors `GatewayConfig` from `trigon-config` to avoid a dependency on
/// the config crate from the gateway crate.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind (0 picks a free port).
    pub port: u16,
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
    /// Attach a permissive CORS layer.
    pub cors_permissive: bool,
    /// Serve the HTML form at `/`.
    pub serve_form: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_body_bytes: 16 * 1024,
            cors_permissive: true,
            serve_form: true,
        }
    }
}

/// Build the gateway router.
///
/// Routes:
/// - POST /api/identify-triangle
/// - GET /health
/// - GET / (only when `serve_form` is set)
pub fn build_router(config: &ServerConfig, state: GatewayState) -> Router {
    let mut routes = Router::new()
        .route(
            "/api/identify-triangle",
            post(handlers::post_identify_triangle),
        )
        .route("/health", get(handlers::get_health));

    if config.serve_form {
        routes = routes.route("/", get(handlers::get_form));
    }

    let app = routes
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http());

    if config.cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Bind the configured host:port.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, TrigonError> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| TrigonError::Gateway {
            message: format!("failed to bind gateway to {}:{}: {e}", config.host, config.port),
            source: Some(Box::new(e)),
        })
}

/// Serve `app` on an already-bound listener until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish after cancellation.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: CancellationToken,
) -> Result<(), TrigonError> {
    let addr = local_addr(&listener)?;
    tracing::info!("gateway server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(|e| TrigonError::Gateway {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("gateway server stopped");
    Ok(())
}

pub(crate) fn local_addr(listener: &TcpListener) -> Result<SocketAddr, TrigonError> {
    listener.local_addr().map_err(|e| TrigonError::Gateway {
        message: format!("failed to read gateway address: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_state_is_clone() {
        let state = GatewayState::new();
        let _cloned = state.clone();
    }

    #[test]
    fn server_config_debug() {
        let config = ServerConfig::default();
        let debug = format!("{config:?}");
        assert!(debug.contains("127.0.0.1"));
        assert!(debug.contains("3000"));
    }

    #[tokio::test]
    async fn bind_reports_occupied_port() {
        let first = bind(&ServerConfig {
            port: 0,
            ..ServerConfig::default()
        })
        .await
        .unwrap();
        let port = first.local_addr().unwrap().port();

        let err = bind(&ServerConfig {
            port,
            ..ServerConfig::default()
        })
        .await
        .unwrap_err();
        assert!(err.to_string().contains("failed to bind gateway"));
    }

    #[tokio::test]
    async fn serve_returns_after_cancellation() {
        let listener = bind(&ServerConfig {
            port: 0,
            ..ServerConfig::default()
        })
        .await
        .unwrap();
        let app = build_router(&ServerConfig::default(), GatewayState::new());
        let shutdown = CancellationToken::new();
        shutdown.cancel();

        serve(listener, app, shutdown).await.unwrap();
    }
}
