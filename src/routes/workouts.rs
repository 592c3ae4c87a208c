// ABOUTME: Route handlers for daily workout generation, history, calendar and feedback
// ABOUTME: All endpoints authenticate the session before reading or writing workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout routes
//!
//! - `POST /api/workouts/today` (alias `POST /api/getWorkout`): today's workout, generated on first call
//! - `GET /api/workouts`: the caller's workouts, newest first
//! - `GET /api/workouts/calendar`: Monday-first month grid
//! - `POST /api/workouts/feedback`: store feedback on an owned workout

use super::{authenticate, is_blank, parse_json_body, tag_request_id};
use crate::constants::limits::{MAX_FEEDBACK_CHARS, MAX_LIST_LIMIT};
use crate::errors::{AppError, AppResult};
use crate::server::ServerResources;
use crate::workouts::calendar::month_bounds;
use crate::workouts::{build_calendar_month, WorkoutSettings};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use workout_core::models::{Difficulty, EquipmentMode, Workout};

/// Body of a generation request; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateWorkoutBody {
    /// Difficulty marker or English alias, `srednje` when absent
    pub level: Option<String>,
    /// Equipment marker or alias, `bodyweight` when absent
    pub equipment: Option<String>,
    /// Home equipment catalog ids
    #[serde(alias = "homeEquipment")]
    pub home_equipment: Vec<String>,
}

impl GenerateWorkoutBody {
    /// Convert into validated generation settings
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown level or equipment value
    pub fn into_settings(self) -> AppResult<WorkoutSettings> {
        let difficulty = self
            .level
            .as_deref()
            .map(str::parse::<Difficulty>)
            .transpose()
            .map_err(AppError::invalid_input)?
            .unwrap_or_default();
        let equipment = self
            .equipment
            .as_deref()
            .map(str::parse::<EquipmentMode>)
            .transpose()
            .map_err(AppError::invalid_input)?
            .unwrap_or_default();

        Ok(WorkoutSettings {
            difficulty,
            equipment,
            home_equipment: self.home_equipment,
        })
    }
}

/// Query for `GET /api/workouts`
#[derive(Debug, Default, Deserialize)]
pub struct ListWorkoutsQuery {
    /// Page size, capped at the list maximum
    pub limit: Option<u32>,
}

/// Query for `GET /api/workouts/calendar`
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    /// Year, current year when absent
    pub year: Option<i32>,
    /// Month 1-12, current month when absent
    pub month: Option<u32>,
}

/// Body of `POST /api/workouts/feedback`
#[derive(Debug, Deserialize)]
pub struct FeedbackBody {
    /// Workout to annotate
    #[serde(alias = "workoutId")]
    pub workout_id: Uuid,
    /// Feedback text
    #[serde(alias = "feedbackText", alias = "feedback")]
    pub feedback_text: String,
}

/// Workout listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutListResponse {
    /// Workouts, newest first
    pub workouts: Vec<Workout>,
    /// Total number of workouts, independent of the page size
    pub total: u64,
}

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workouts", get(Self::handle_list))
            .route("/api/workouts/today", post(Self::handle_today))
            .route("/api/getWorkout", post(Self::handle_today))
            .route("/api/workouts/calendar", get(Self::handle_calendar))
            .route("/api/workouts/feedback", post(Self::handle_feedback))
            .with_state(resources)
    }

    /// Server-local calendar date used as "today"
    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Handle POST /api/workouts/today - Return or generate today's workout
    async fn handle_today(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        Self::today_workout(&resources, &headers, &body)
            .await
            .map_err(|e| tag_request_id(e, &headers))
    }

    async fn today_workout(
        resources: &ServerResources,
        headers: &HeaderMap,
        body: &[u8],
    ) -> AppResult<Response> {
        let user = authenticate(headers, resources)?;

        let request = if is_blank(body) {
            GenerateWorkoutBody::default()
        } else {
            parse_json_body::<GenerateWorkoutBody>(body)?
        };
        let settings = request.into_settings()?;

        let generated = resources
            .generator
            .generate(user.user_id, &settings, Self::today())
            .await?;

        info!(
            workout.id = %generated.workout.id,
            created = generated.created,
            "Served today's workout"
        );
        Ok((StatusCode::OK, Json(generated.workout)).into_response())
    }

    /// Handle GET /api/workouts - List the caller's workouts
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ListWorkoutsQuery>,
    ) -> Result<Response, AppError> {
        Self::list_workouts(&resources, &headers, &query)
            .await
            .map_err(|e| tag_request_id(e, &headers))
    }

    async fn list_workouts(
        resources: &ServerResources,
        headers: &HeaderMap,
        query: &ListWorkoutsQuery,
    ) -> AppResult<Response> {
        let user = authenticate(headers, resources)?;
        let limit = query.limit.unwrap_or(MAX_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);

        let workouts = resources.workouts.list_for_user(user.user_id, limit).await?;
        let total = resources.workouts.count_for_user(user.user_id).await?;

        Ok((StatusCode::OK, Json(WorkoutListResponse { workouts, total })).into_response())
    }

    /// Handle GET /api/workouts/calendar - Month grid with workout summaries
    async fn handle_calendar(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<CalendarQuery>,
    ) -> Result<Response, AppError> {
        Self::calendar_month(&resources, &headers, &query)
            .await
            .map_err(|e| tag_request_id(e, &headers))
    }

    async fn calendar_month(
        resources: &ServerResources,
        headers: &HeaderMap,
        query: &CalendarQuery,
    ) -> AppResult<Response> {
        let user = authenticate(headers, resources)?;

        let today = Self::today();
        let year = query.year.unwrap_or_else(|| today.year());
        let month = query.month.unwrap_or_else(|| today.month());
        let (first, last) = month_bounds(year, month)?;

        let workouts = resources
            .workouts
            .list_in_range(user.user_id, first, last)
            .await?;
        let calendar = build_calendar_month(year, month, today, &workouts)?;

        Ok((StatusCode::OK, Json(calendar)).into_response())
    }

    /// Handle POST /api/workouts/feedback - Store feedback on an owned workout
    async fn handle_feedback(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        Self::submit_feedback(&resources, &headers, &body)
            .await
            .map_err(|e| tag_request_id(e, &headers))
    }

    async fn submit_feedback(
        resources: &ServerResources,
        headers: &HeaderMap,
        body: &[u8],
    ) -> AppResult<Response> {
        let user = authenticate(headers, resources)?;
        let request: FeedbackBody = parse_json_body(body)?;

        if request.feedback_text.chars().count() > MAX_FEEDBACK_CHARS {
            return Err(AppError::invalid_input(format!(
                "Feedback must be at most {MAX_FEEDBACK_CHARS} characters"
            )));
        }

        let updated = resources
            .workouts
            .update_feedback(user.user_id, request.workout_id, &request.feedback_text)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout {}", request.workout_id)))?;

        info!(workout.id = %updated.id, "Feedback saved");
        Ok((StatusCode::OK, Json(updated)).into_response())
    }
}
