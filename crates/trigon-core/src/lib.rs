// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Trigon.
//!
//! This crate holds the triangle classifier, the result model it produces,
//! and the error types used across the workspace. The classifier is a pure
//! function; the gateway and CLI crates are thin callers around it.

pub mod classify;
pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use classify::{classify, classify_sides, EPSILON};
pub use error::{Rejection, TrigonError};
pub use types::{Classification, Sides, TriangleKind, TriangleReport};
