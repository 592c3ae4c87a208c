// ABOUTME: Profile table queries
// ABOUTME: Profiles are keyed by the identity provider's user id and carry the access role
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;
use workout_core::models::{Profile, ProfileRole};

impl Database {
    /// Get a user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored value is malformed
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        let row = sqlx::query(
            "SELECT id, display_name, role, created_at FROM profiles WHERE id = $1",
        )
        .bind(user_id.to_string())
        .fetch_optional(self.pool())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let role: String = row.try_get("role")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Some(Profile {
            id: user_id,
            display_name: row.try_get("display_name")?,
            role: role.parse::<ProfileRole>().map_err(AppError::database)?,
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| AppError::database(format!("Invalid created_at {created_at}: {e}")))?
                .with_timezone(&Utc),
        }))
    }

    /// Create or replace a user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn upsert_profile(&self, profile: &Profile) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO profiles (id, display_name, role, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                display_name = excluded.display_name,
                role = excluded.role
            ",
        )
        .bind(profile.id.to_string())
        .bind(profile.display_name.as_deref())
        .bind(profile.role.as_str())
        .bind(profile.created_at.to_rfc3339())
        .execute(self.pool())
        .await?;

        Ok(())
    }
}
