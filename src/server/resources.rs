// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Built once at startup and shared behind an Arc; nothing in here is mutated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::SessionVerifier;
use crate::config::ServerConfig;
use crate::database::repositories::{
    ProfileRepository, ProfileRepositoryImpl, WorkoutRepository, WorkoutRepositoryImpl,
};
use crate::database::Database;
use crate::llm::LlmProvider;
use crate::workouts::WorkoutGenerator;
use std::sync::Arc;

/// Centralized resource container for dependency injection
///
/// Handlers receive `State<Arc<ServerResources>>`; the generator shares the same
/// repository handles the handlers use directly.
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Connection pool, used directly only by the readiness probe
    pub database: Database,
    /// Session token verifier
    pub session_verifier: SessionVerifier,
    /// Workout storage
    pub workouts: Arc<dyn WorkoutRepository>,
    /// Profile storage
    pub profiles: Arc<dyn ProfileRepository>,
    /// Generation orchestrator
    pub generator: WorkoutGenerator,
}

impl ServerResources {
    /// Create resources backed by the SQLite repositories
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, database: Database, llm: Arc<dyn LlmProvider>) -> Self {
        let workouts: Arc<dyn WorkoutRepository> =
            Arc::new(WorkoutRepositoryImpl::new(database.clone()));
        let profiles: Arc<dyn ProfileRepository> =
            Arc::new(ProfileRepositoryImpl::new(database.clone()));
        Self::with_repositories(config, database, workouts, profiles, llm)
    }

    /// Create resources with explicit repository implementations
    #[must_use]
    pub fn with_repositories(
        config: Arc<ServerConfig>,
        database: Database,
        workouts: Arc<dyn WorkoutRepository>,
        profiles: Arc<dyn ProfileRepository>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        let session_verifier = SessionVerifier::new(&config.session);
        let generator = WorkoutGenerator::new(
            Arc::clone(&workouts),
            Arc::clone(&profiles),
            llm,
            config.generation,
        );

        Self {
            config,
            database,
            session_verifier,
            workouts,
            profiles,
            generator,
        }
    }
}
