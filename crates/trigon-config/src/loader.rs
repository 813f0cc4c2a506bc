// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./trigon.toml` > `~/.config/trigon/trigon.toml` > `/etc/trigon/trigon.toml`
//! with environment variable overrides via `TRIGON_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TrigonConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/trigon/trigon.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "trigon.toml";

/// Per-user config file under the XDG config directory, if one is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("trigon").join("trigon.toml"))
}

/// Every file the XDG hierarchy consults, lowest precedence first.
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG_PATH)];
    paths.extend(user_config_path());
    paths.push(PathBuf::from(LOCAL_CONFIG_FILE));
    paths
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/trigon/trigon.toml` (system-wide)
/// 3. `~/.config/trigon/trigon.toml` (user XDG config)
/// 4. `./trigon.toml` (local directory)
/// 5. `TRIGON_*` environment variables
pub fn load_config() -> Result<TrigonConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<TrigonConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TrigonConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// A missing file is an error here, unlike the optional XDG files.
pub fn load_config_from_path(path: &Path) -> Result<TrigonConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TrigonConfig::default()))
        .merge(Toml::file_exact(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for XDG config loading, before extraction.
pub fn build_figment() -> Figment {
    config_search_paths()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(TrigonConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Environment variable provider with explicit section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `TRIGON_GATEWAY_MAX_BODY_BYTES` must map to
/// `gateway.max_body_bytes`, not `gateway.max.body.bytes`.
fn env_provider() -> Env {
    Env::prefixed("TRIGON_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a config key path.
pub(crate) fn map_env_key(key: &str) -> String {
    key.replacen("service_", "service.", 1)
        .replacen("gateway_", "gateway.", 1)
}
