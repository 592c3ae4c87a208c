// ABOUTME: Workout table queries: per-day lookup, history, listing, calendar range and feedback
// ABOUTME: Dates are stored as YYYY-MM-DD text, ids as UUID text, timestamps as RFC 3339
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::info;
use uuid::Uuid;
use workout_core::models::{Difficulty, EquipmentMode, Workout};

const DATE_FORMAT: &str = "%Y-%m-%d";

const WORKOUT_COLUMNS: &str =
    "id, user_id, date, content, level, equipment, feedback, created_at";

/// Values for a workout that has not been stored yet
#[derive(Debug, Clone)]
pub struct NewWorkout {
    /// Owner
    pub user_id: Uuid,
    /// Day the workout belongs to
    pub date: NaiveDate,
    /// Generated plan text
    pub content: String,
    /// Requested difficulty
    pub level: Difficulty,
    /// Requested equipment mode
    pub equipment: EquipmentMode,
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn row_to_workout(row: &SqliteRow) -> AppResult<Workout> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let date: String = row.try_get("date")?;
    let level: String = row.try_get("level")?;
    let equipment: String = row.try_get("equipment")?;
    let created_at: String = row.try_get("created_at")?;

    Ok(Workout {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid workout id {id}: {e}")))?,
        user_id: Uuid::parse_str(&user_id)
            .map_err(|e| AppError::database(format!("Invalid user id {user_id}: {e}")))?,
        date: NaiveDate::parse_from_str(&date, DATE_FORMAT)
            .map_err(|e| AppError::database(format!("Invalid workout date {date}: {e}")))?,
        content: row.try_get("content")?,
        level: level.parse::<Difficulty>().map_err(AppError::database)?,
        equipment: equipment.parse::<EquipmentMode>().map_err(AppError::database)?,
        feedback: row.try_get("feedback")?,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| AppError::database(format!("Invalid created_at {created_at}: {e}")))?
            .with_timezone(&Utc),
    })
}

fn rows_to_workouts(rows: &[SqliteRow]) -> AppResult<Vec<Workout>> {
    rows.iter().map(row_to_workout).collect()
}

impl Database {
    /// Get the caller's workout for one day
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_workout_for_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<Workout>> {
        let row = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE user_id = $1 AND date = $2"
        ))
        .bind(user_id.to_string())
        .bind(format_date(date))
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_workout).transpose()
    }

    /// Most recent workouts strictly before `before`, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_recent_workouts(
        &self,
        user_id: Uuid,
        before: NaiveDate,
        limit: u32,
    ) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts
             WHERE user_id = $1 AND date < $2
             ORDER BY date DESC
             LIMIT $3"
        ))
        .bind(user_id.to_string())
        .bind(format_date(before))
        .bind(i64::from(limit))
        .fetch_all(self.pool())
        .await?;

        rows_to_workouts(&rows)
    }

    /// Insert a workout unless one already exists for the same user and day
    ///
    /// Returns the stored row for `(user_id, date)` and whether this call wrote it. The
    /// flag is `false` when a concurrent request won the insert and its row is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert or the follow-up read fails
    pub async fn insert_workout(&self, workout: &NewWorkout) -> AppResult<(Workout, bool)> {
        let result = sqlx::query(
            r"
            INSERT INTO workouts (id, user_id, date, content, level, equipment, feedback, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NULL, $7)
            ON CONFLICT (user_id, date) DO NOTHING
            ",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(workout.user_id.to_string())
        .bind(format_date(workout.date))
        .bind(&workout.content)
        .bind(workout.level.as_str())
        .bind(workout.equipment.as_str())
        .bind(Utc::now().to_rfc3339())
        .execute(self.pool())
        .await?;

        let inserted = result.rows_affected() > 0;
        if !inserted {
            info!(
                user_id = %workout.user_id,
                date = %workout.date,
                "Workout already stored for this day, keeping the existing row"
            );
        }

        let stored = self
            .get_workout_for_date(workout.user_id, workout.date)
            .await?
            .ok_or_else(|| AppError::database("Inserted workout could not be read back"))?;
        Ok((stored, inserted))
    }

    /// The caller's workouts, newest date first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_workouts(&self, user_id: Uuid, limit: u32) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts
             WHERE user_id = $1
             ORDER BY date DESC
             LIMIT $2"
        ))
        .bind(user_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(self.pool())
        .await?;

        rows_to_workouts(&rows)
    }

    /// Number of workouts stored for the caller
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_workouts(&self, user_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts WHERE user_id = $1")
            .bind(user_id.to_string())
            .fetch_one(self.pool())
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// The caller's workouts with `start <= date <= end`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_workouts_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts
             WHERE user_id = $1 AND date >= $2 AND date <= $3
             ORDER BY date ASC"
        ))
        .bind(user_id.to_string())
        .bind(format_date(start))
        .bind(format_date(end))
        .fetch_all(self.pool())
        .await?;

        rows_to_workouts(&rows)
    }

    /// Set the feedback of a workout owned by `user_id`
    ///
    /// Returns `None` when the workout does not exist or belongs to someone else.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn update_workout_feedback(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        feedback: &str,
    ) -> AppResult<Option<Workout>> {
        let row = sqlx::query(&format!(
            "UPDATE workouts SET feedback = $1
             WHERE id = $2 AND user_id = $3
             RETURNING {WORKOUT_COLUMNS}"
        ))
        .bind(feedback)
        .bind(workout_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_workout).transpose()
    }

    /// Workouts of every user, newest date first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_all_workouts(&self, limit: u32) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts
             ORDER BY date DESC, created_at DESC
             LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(self.pool())
        .await?;

        rows_to_workouts(&rows)
    }

    /// Number of workouts across all users
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_all_workouts(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts")
            .fetch_one(self.pool())
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}
