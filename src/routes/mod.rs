// ABOUTME: Route module organization for the daily workout HTTP API
// ABOUTME: One module per domain with thin handlers that delegate to the generator and repositories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Every handler that touches user data authenticates the session first, so an
//! unauthenticated request never reaches a repository or the completion provider.

/// Admin listing routes
pub mod admin;
/// Home equipment catalog routes
pub mod equipment;
/// Health check and readiness routes
pub mod health;
/// Workout generation, listing, calendar and feedback routes
pub mod workouts;

pub use admin::AdminRoutes;
pub use equipment::EquipmentRoutes;
pub use health::HealthRoutes;
pub use workouts::WorkoutRoutes;

use crate::auth::AuthenticatedUser;
use crate::constants::headers::REQUEST_ID;
use crate::errors::{AppError, AppResult};
use crate::middleware::record_user_in_span;
use crate::server::ServerResources;
use http::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Verify the session on `headers` and tag the request span with the user
fn authenticate(headers: &HeaderMap, resources: &ServerResources) -> AppResult<AuthenticatedUser> {
    let user = resources.session_verifier.authenticate(headers)?;
    record_user_in_span(&user.user_id);
    debug!(user.id = %user.user_id, credential = ?user.source, "Request authenticated");
    Ok(user)
}

/// Attach the request id assigned by the tracing middleware to an error response
fn tag_request_id(error: AppError, headers: &HeaderMap) -> AppError {
    match headers.get(REQUEST_ID).and_then(|value| value.to_str().ok()) {
        Some(request_id) => error.with_request_id(request_id),
        None => error,
    }
}

/// Whether a request body carries no content
fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Parse a JSON request body after authentication, mapping failures to `InvalidInput`
fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    if is_blank(body) {
        return Err(AppError::invalid_input("Request body is required"));
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::invalid_input(format!("Invalid JSON body: {e}")))
}
