// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Trigon workspace.
//!
//! Two families live here. [`Rejection`] is the classifier's answer when the
//! sides do not describe a triangle; it is data, never propagated with `?`.
//! [`TrigonError`] covers operational failures of the service around the
//! classifier (config, binding a socket, serving).

use thiserror::Error;

const INVALID_MAGNITUDE: &str = "All sides must be positive numbers";
const GEOMETRICALLY_IMPOSSIBLE: &str = "These sides cannot form a valid triangle";

/// Why a set of sides was rejected by the classifier.
///
/// The `Display` text is the user-facing message carried in the `error`
/// field of a classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// A side is non-finite, zero, or negative.
    #[error("{}", INVALID_MAGNITUDE)]
    InvalidMagnitude,

    /// The sides violate the triangle inequality or are degenerate.
    #[error("{}", GEOMETRICALLY_IMPOSSIBLE)]
    GeometricallyImpossible,
}

impl Rejection {
    /// The message placed in the `error` field of the wire result.
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::InvalidMagnitude => INVALID_MAGNITUDE,
            Rejection::GeometricallyImpossible => GEOMETRICALLY_IMPOSSIBLE,
        }
    }
}

/// The primary error type for service-level operations.
#[derive(Debug, Error)]
pub enum TrigonError {
    /// Configuration errors (invalid TOML, unknown keys, failed validation).
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP gateway errors (bind failure, server crash).
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
