// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Trigon integration tests.
//!
//! # Components
//!
//! - [`fixtures`] - Reference classification cases shared across test suites
//! - [`TestServer`] - A real gateway on an ephemeral port with an HTTP client

pub mod fixtures;
pub mod server;

pub use fixtures::{ReferenceCase, REFERENCE_CASES};
pub use server::{TestServer, TestServerBuilder};
