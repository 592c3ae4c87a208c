// ABOUTME: Admin route handlers for listing workouts across all users
// ABOUTME: Access requires a valid session and a profile with the admin role
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{authenticate, tag_request_id};
use super::workouts::WorkoutListResponse;
use crate::constants::limits::{DEFAULT_ADMIN_LIST_LIMIT, MAX_ADMIN_LIST_LIMIT};
use crate::errors::{AppError, AppResult};
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// Query for `GET /api/admin/workouts`
#[derive(Debug, Default, Deserialize)]
pub struct AdminListQuery {
    /// Page size
    pub limit: Option<u32>,
}

/// Admin routes handler
pub struct AdminRoutes;

impl AdminRoutes {
    /// Create all admin routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/admin/workouts", get(Self::handle_list_all))
            .with_state(resources)
    }

    /// Handle GET /api/admin/workouts - All users' workouts, newest first
    async fn handle_list_all(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<AdminListQuery>,
    ) -> Result<Response, AppError> {
        Self::list_all_workouts(&resources, &headers, &query)
            .await
            .map_err(|e| tag_request_id(e, &headers))
    }

    async fn list_all_workouts(
        resources: &ServerResources,
        headers: &HeaderMap,
        query: &AdminListQuery,
    ) -> AppResult<Response> {
        let user = authenticate(headers, resources)?;

        let is_admin = resources
            .profiles
            .get(user.user_id)
            .await?
            .is_some_and(|profile| profile.is_admin());
        if !is_admin {
            warn!(user.id = %user.user_id, "Non-admin attempted admin workout listing");
            return Err(AppError::permission_denied("Admin role required"));
        }

        let limit = query
            .limit
            .unwrap_or(DEFAULT_ADMIN_LIST_LIMIT)
            .clamp(1, MAX_ADMIN_LIST_LIMIT);
        let workouts = resources.workouts.list_all(limit).await?;
        let total = resources.workouts.count_all().await?;

        Ok((StatusCode::OK, Json(WorkoutListResponse { workouts, total })).into_response())
    }
}
