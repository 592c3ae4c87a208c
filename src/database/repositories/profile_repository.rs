// ABOUTME: SQLite implementation of ProfileRepository
// ABOUTME: Reads and upserts user profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ProfileRepository;
use crate::database::Database;
use crate::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;
use workout_core::models::Profile;

/// SQLite implementation of `ProfileRepository`
pub struct ProfileRepositoryImpl {
    db: Database,
}

impl ProfileRepositoryImpl {
    /// Create a new `ProfileRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn get(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        self.db.get_profile(user_id).await
    }

    async fn upsert(&self, profile: &Profile) -> AppResult<()> {
        self.db.upsert_profile(profile).await
    }
}
