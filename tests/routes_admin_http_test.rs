// ABOUTME: HTTP integration tests for the admin workout listing
// ABOUTME: Verifies role gating through the profile table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use chrono::Duration;
use common::{mint_token, seed_profile, seed_workout, today, TestApp};
use daily_workout_server::models::ProfileRole;
use daily_workout_server::routes::workouts::WorkoutListResponse;
use helpers::axum_test::AxumTestRequest;
use serde_json::Value;
use uuid::Uuid;

#[tokio::test]
async fn test_admin_lists_every_users_workouts() {
    let app = TestApp::new().await;
    let admin = Uuid::new_v4();
    seed_profile(&app.database, admin, ProfileRole::Admin).await;
    seed_workout(&app.database, Uuid::new_v4(), today() - Duration::days(2), "a").await;
    seed_workout(&app.database, Uuid::new_v4(), today(), "b").await;

    let response = AxumTestRequest::get("/api/admin/workouts")
        .bearer(&mint_token(admin))
        .send(app.router())
        .await;

    assert_eq!(response.status(), 200);
    let list: WorkoutListResponse = response.json();
    assert_eq!(list.total, 2);
    assert_eq!(list.workouts[0].content, "b");
}

#[tokio::test]
async fn test_regular_user_is_forbidden() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();
    seed_profile(&app.database, user, ProfileRole::User).await;

    let response = AxumTestRequest::get("/api/admin/workouts")
        .bearer(&mint_token(user))
        .send(app.router())
        .await;

    assert_eq!(response.status(), 403);
    let body: Value = response.json();
    assert_eq!(body["code"], "PERMISSION_DENIED");
}

#[tokio::test]
async fn test_user_without_profile_is_forbidden() {
    let app = TestApp::new().await;

    let response = AxumTestRequest::get("/api/admin/workouts")
        .bearer(&mint_token(Uuid::new_v4()))
        .send(app.router())
        .await;

    assert_eq!(response.status(), 403);
}

#[tokio::test]
async fn test_admin_listing_requires_authentication() {
    let app = TestApp::new().await;

    let response = AxumTestRequest::get("/api/admin/workouts")
        .send(app.router())
        .await;

    assert_eq!(response.status(), 401);
    assert_eq!(app.repository_calls(), 0);
}
