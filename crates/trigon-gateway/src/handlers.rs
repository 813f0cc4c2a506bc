// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway.
//!
//! Handles POST /api/identify-triangle, GET /health, and GET / (form page).

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::request;
use crate::server::GatewayState;

/// Static form page collecting three sides and rendering the result.
const FORM_PAGE: &str = include_str!("form.html");

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the gateway state was created.
    pub uptime_secs: u64,
}

/// POST /api/identify-triangle
///
/// The body is read as raw bytes so malformed JSON and non-numeric fields map
/// to the documented 400 bodies instead of axum's extractor rejections. Any
/// well-formed request gets a 200, whether or not the sides form a triangle.
pub async fn post_identify_triangle(body: Bytes) -> Response {
    let sides = match request::parse_sides(&body) {
        Ok(sides) => sides,
        Err(e) => {
            warn!(error = %e, body_len = body.len(), "rejecting triangle request");
            return e.into_response();
        }
    };

    let classification = trigon_core::classify_sides(sides);
    debug!(
        a = sides.a,
        b = sides.b,
        c = sides.c,
        valid = classification.is_valid(),
        kind = ?classification.kind(),
        "classified triangle"
    );

    (StatusCode::OK, Json(classification)).into_response()
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.health.start_time.elapsed().as_secs(),
    })
}

/// GET /
pub async fn get_form() -> Html<&'static str> {
    Html(FORM_PAGE)
}
