// ABOUTME: SQLite implementation of WorkoutRepository
// ABOUTME: Delegates to the workout queries on Database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WorkoutRepository;
use crate::database::{Database, NewWorkout};
use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;
use workout_core::models::Workout;

/// SQLite implementation of `WorkoutRepository`
pub struct WorkoutRepositoryImpl {
    db: Database,
}

impl WorkoutRepositoryImpl {
    /// Create a new `WorkoutRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkoutRepository for WorkoutRepositoryImpl {
    async fn find_for_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<Workout>> {
        self.db.get_workout_for_date(user_id, date).await
    }

    async fn recent_before(
        &self,
        user_id: Uuid,
        before: NaiveDate,
        limit: u32,
    ) -> AppResult<Vec<Workout>> {
        self.db.get_recent_workouts(user_id, before, limit).await
    }

    async fn insert(&self, workout: NewWorkout) -> AppResult<(Workout, bool)> {
        self.db.insert_workout(&workout).await
    }

    async fn list_for_user(&self, user_id: Uuid, limit: u32) -> AppResult<Vec<Workout>> {
        self.db.list_workouts(user_id, limit).await
    }

    async fn count_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        self.db.count_workouts(user_id).await
    }

    async fn list_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Workout>> {
        self.db.get_workouts_in_range(user_id, start, end).await
    }

    async fn update_feedback(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        feedback: &str,
    ) -> AppResult<Option<Workout>> {
        self.db
            .update_workout_feedback(user_id, workout_id, feedback)
            .await
    }

    async fn list_all(&self, limit: u32) -> AppResult<Vec<Workout>> {
        self.db.list_all_workouts(limit).await
    }

    async fn count_all(&self) -> AppResult<u64> {
        self.db.count_all_workouts().await
    }
}
