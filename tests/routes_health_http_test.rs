// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests liveness and readiness endpoints without authentication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use chrono::DateTime;
use common::TestApp;
use helpers::axum_test::AxumTestRequest;
use serde_json::Value;

// ============================================================================
// GET /health - Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = TestApp::new().await;

    let response = AxumTestRequest::get("/health").send(app.router()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "daily-workout-server");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
}

// ============================================================================
// GET /ready - Readiness Check Tests
// ============================================================================

#[tokio::test]
async fn test_ready_endpoint_checks_database() {
    let app = TestApp::new().await;

    let response = AxumTestRequest::get("/ready").send(app.router()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_ready_reports_unavailable_when_pool_is_closed() {
    let app = TestApp::new().await;
    app.database.pool().close().await;

    let response = AxumTestRequest::get("/ready").send(app.router()).await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new().await;
    let response = AxumTestRequest::get("/nonexistent").send(app.router()).await;
    assert_eq!(response.status(), 404);
}
