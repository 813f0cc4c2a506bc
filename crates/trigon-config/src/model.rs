// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Trigon.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Trigon configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TrigonConfig {
    /// Process-wide settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Process-wide settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ServiceConfig {
    /// `log_level` trimmed and lowercased, as used in tracing filter directives.
    pub fn normalized_log_level(&self) -> String {
        self.log_level.trim().to_ascii_lowercase()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind. 0 picks a free port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted request body in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Allow cross-origin requests from any origin.
    #[serde(default = "default_true")]
    pub cors_permissive: bool,

    /// Serve the HTML form at `/`.
    #[serde(default = "default_true")]
    pub serve_form: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            cors_permissive: true,
            serve_form: true,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_body_bytes() -> usize {
    16 * 1024
}

fn default_true() -> bool {
    true
}

impl TrigonConfig {
    /// Render the configuration as TOML, as `trigon config show` prints it.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: TrigonConfig = toml::from_str("").unwrap();
        assert_eq!(config, TrigonConfig::default());
        assert_eq!(config.gateway.port, 3000);
        assert_eq!(config.gateway.max_body_bytes, 16384);
        assert!(config.gateway.serve_form);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: TrigonConfig = toml::from_str("[gateway]\nport = 8080\n").unwrap();
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert_eq!(config.service.log_level, "info");
    }

    #[test]
    fn unknown_top_level_section_is_rejected() {
        assert!(toml::from_str::<TrigonConfig>("[database]\npath = \"x\"\n").is_err());
    }

    #[test]
    fn log_level_is_normalized() {
        let service = ServiceConfig {
            log_level: " Info ".to_string(),
        };
        assert_eq!(service.normalized_log_level(), "info");
    }

    #[test]
    fn to_toml_round_trips() {
        let mut config = TrigonConfig::default();
        config.gateway.port = 9000;
        config.service.log_level = "debug".to_string();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[gateway]"));
        let parsed: TrigonConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
