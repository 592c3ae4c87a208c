// ABOUTME: Orchestrates daily workout generation: reuse today's row or generate and store a new one
// ABOUTME: Calls the completion provider at most once per request and never when a row already exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Generator
//!
//! For an authenticated user and a date:
//!
//! 1. Return the stored workout for `(user, date)` if there is one
//! 2. Validate the requested home equipment
//! 3. Load recent history and the profile
//! 4. Build the prompt and call the provider once
//! 5. Store the result; a concurrent insert for the same day wins and its row is returned

use super::equipment::resolve_equipment;
use super::prompt::{build_workout_prompt, PromptInput};
use crate::config::GenerationConfig;
use crate::database::repositories::{ProfileRepository, WorkoutRepository};
use crate::database::NewWorkout;
use crate::errors::{AppError, AppResult};
use crate::llm::{fitness_expert_system_prompt, ChatMessage, ChatRequest, LlmProvider};
use crate::logging::AppLogger;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use workout_core::models::{Difficulty, EquipmentMode, Workout};

/// Settings chosen by the user for one generation request
#[derive(Debug, Clone, Default)]
pub struct WorkoutSettings {
    /// Difficulty marker
    pub difficulty: Difficulty,
    /// Equipment marker
    pub equipment: EquipmentMode,
    /// Home equipment ids from the catalog
    pub home_equipment: Vec<String>,
}

/// Result of a generation request
#[derive(Debug, Clone)]
pub struct GeneratedWorkout {
    /// The workout stored for the requested day
    pub workout: Workout,
    /// `true` when this request stored the row, `false` when an existing row was returned
    pub created: bool,
}

/// Generates and stores at most one workout per user per day
#[derive(Clone)]
pub struct WorkoutGenerator {
    workouts: Arc<dyn WorkoutRepository>,
    profiles: Arc<dyn ProfileRepository>,
    llm: Arc<dyn LlmProvider>,
    config: GenerationConfig,
}

impl WorkoutGenerator {
    /// Create a generator over the given repositories and provider
    #[must_use]
    pub fn new(
        workouts: Arc<dyn WorkoutRepository>,
        profiles: Arc<dyn ProfileRepository>,
        llm: Arc<dyn LlmProvider>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            workouts,
            profiles,
            llm,
            config,
        }
    }

    /// Return the user's workout for `date`, generating it when none exists
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unknown equipment ids, a database error when any
    /// store call fails and an external service error when the provider fails. No
    /// row is written on error.
    #[instrument(skip(self, settings), fields(user.id = %user_id, workout.date = %date))]
    pub async fn generate(
        &self,
        user_id: Uuid,
        settings: &WorkoutSettings,
        date: NaiveDate,
    ) -> AppResult<GeneratedWorkout> {
        if let Some(existing) = self.workouts.find_for_date(user_id, date).await? {
            debug!(workout.id = %existing.id, "Returning existing workout for today");
            return Ok(GeneratedWorkout {
                workout: existing,
                created: false,
            });
        }

        let home_equipment = resolve_equipment(&settings.home_equipment)?;

        let history = self
            .workouts
            .recent_before(user_id, date, self.config.history_limit)
            .await?;

        match self.profiles.get(user_id).await? {
            Some(profile) => debug!(profile.role = %profile.role.as_str(), "Loaded profile"),
            None => warn!("No profile row for user, continuing without one"),
        }

        if settings.equipment == EquipmentMode::Bodyweight && !home_equipment.is_empty() {
            debug!(
                items = home_equipment.len(),
                "Ignoring home equipment for bodyweight workout"
            );
        }

        let prompt = build_workout_prompt(&PromptInput {
            date,
            difficulty: settings.difficulty,
            equipment: settings.equipment,
            history: &history,
            home_equipment: &home_equipment,
        });

        let request = ChatRequest::new(vec![
            ChatMessage::system(fitness_expert_system_prompt()),
            ChatMessage::user(prompt),
        ])
        .with_temperature(self.config.temperature)
        .with_max_tokens(self.config.max_tokens);

        let started = Instant::now();
        let completion = self.llm.complete(&request).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let response = match completion {
            Ok(response) => {
                AppLogger::log_generation(
                    &user_id,
                    &response.model,
                    duration_ms,
                    response.usage.map(|usage| usage.total_tokens),
                    true,
                );
                response
            }
            Err(e) => {
                AppLogger::log_generation(&user_id, self.llm.default_model(), duration_ms, None, false);
                return Err(e);
            }
        };

        let content = response.content.trim();
        if content.is_empty() {
            return Err(AppError::external_service(
                self.llm.name(),
                "completion was empty",
            ));
        }

        let (stored, inserted) = self
            .workouts
            .insert(NewWorkout {
                user_id,
                date,
                content: content.to_owned(),
                level: settings.difficulty,
                equipment: settings.equipment,
            })
            .await?;

        if inserted {
            info!(
                workout.id = %stored.id,
                level = %stored.level,
                equipment = %stored.equipment,
                provider = self.llm.name(),
                "Stored generated workout"
            );
        } else {
            info!(
                workout.id = %stored.id,
                "Concurrent request stored today's workout first, returning it"
            );
        }

        Ok(GeneratedWorkout {
            workout: stored,
            created: inserted,
        })
    }
}
