// ABOUTME: Repository traits for workout and profile storage
// ABOUTME: The generation flow and routes depend on these traits, not on SQLite directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repository pattern over the [`Database`](super::Database).
//!
//! Every method returns [`AppResult`]; any failure maps to a data-access error and is
//! surfaced to clients as a generic 500.

mod profile_repository;
mod workout_repository;

pub use profile_repository::ProfileRepositoryImpl;
pub use workout_repository::WorkoutRepositoryImpl;

use super::NewWorkout;
use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;
use workout_core::models::{Profile, Workout};

/// Workout storage
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// The caller's workout for `date`, if one exists
    async fn find_for_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<Workout>>;

    /// Up to `limit` workouts strictly before `before`, newest first
    async fn recent_before(
        &self,
        user_id: Uuid,
        before: NaiveDate,
        limit: u32,
    ) -> AppResult<Vec<Workout>>;

    /// Store a new workout; returns the row stored for `(user_id, date)` and whether
    /// this call inserted it
    async fn insert(&self, workout: NewWorkout) -> AppResult<(Workout, bool)>;

    /// The caller's workouts, newest first
    async fn list_for_user(&self, user_id: Uuid, limit: u32) -> AppResult<Vec<Workout>>;

    /// Number of workouts the caller has
    async fn count_for_user(&self, user_id: Uuid) -> AppResult<u64>;

    /// The caller's workouts within an inclusive date range
    async fn list_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Workout>>;

    /// Set feedback on a workout the caller owns; `None` when not found or not owned
    async fn update_feedback(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        feedback: &str,
    ) -> AppResult<Option<Workout>>;

    /// Workouts of all users, newest first
    async fn list_all(&self, limit: u32) -> AppResult<Vec<Workout>>;

    /// Number of workouts across all users
    async fn count_all(&self) -> AppResult<u64>;
}

/// Profile storage
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Get a user's profile
    async fn get(&self, user_id: Uuid) -> AppResult<Option<Profile>>;

    /// Create or replace a user's profile
    async fn upsert(&self, profile: &Profile) -> AppResult<()>;
}
