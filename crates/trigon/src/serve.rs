// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `trigon serve` command implementation.
//!
//! Maps the loaded configuration onto the gateway, installs signal handling,
//! and runs the HTTP server until SIGINT or SIGTERM.

use tracing::info;
use tracing_subscriber::EnvFilter;
use trigon_config::model::{GatewayConfig, TrigonConfig};
use trigon_core::TrigonError;
use trigon_gateway::{Gateway, ServerConfig};

use crate::shutdown;

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Default, Clone)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Runs the `trigon serve` command.
pub async fn run_serve(config: TrigonConfig, overrides: ServeOverrides) -> Result<(), TrigonError> {
    init_tracing(&config.service.normalized_log_level());

    let server_config = server_config(&config.gateway, &overrides);
    info!(
        host = %server_config.host,
        port = server_config.port,
        max_body_bytes = server_config.max_body_bytes,
        "starting trigon gateway"
    );

    let cancel = shutdown::install_signal_handler();
    let gateway = Gateway::with_shutdown(server_config, cancel);
    let addr = gateway.start().await?;
    info!(%addr, "trigon ready");

    gateway.wait().await?;
    info!("trigon shutdown complete");
    Ok(())
}

/// Builds the gateway's server configuration from the `[gateway]` section.
pub fn server_config(gateway: &GatewayConfig, overrides: &ServeOverrides) -> ServerConfig {
    ServerConfig {
        host: overrides.host.clone().unwrap_or_else(|| gateway.host.clone()),
        port: overrides.port.unwrap_or(gateway.port),
        max_body_bytes: gateway.max_body_bytes,
        cors_permissive: gateway.cors_permissive,
        serve_form: gateway.serve_form,
    }
}

/// Initialize tracing subscriber with the configured log level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

/// Filter used when `RUST_LOG` is unset. `log_level` must already be normalized.
fn default_filter(log_level: &str) -> EnvFilter {
    EnvFilter::new(format!("trigon={log_level},tower_http={log_level},warn"))
}
