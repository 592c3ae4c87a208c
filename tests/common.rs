// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: In-memory database, session token minting, mock completion provider and instrumented repositories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `daily_workout_server`

use async_trait::async_trait;
use axum::Router;
use chrono::{NaiveDate, Utc};
use daily_workout_server::{
    config::{
        CorsConfig, DatabaseConfig, DatabaseUrl, Environment, GenerationConfig, LlmConfig,
        ServerConfig, SessionConfig,
    },
    database::{
        repositories::{
            ProfileRepository, ProfileRepositoryImpl, WorkoutRepository, WorkoutRepositoryImpl,
        },
        Database, NewWorkout,
    },
    errors::{AppError, AppResult},
    llm::{ChatRequest, ChatResponse, LlmProvider, TokenUsage},
    models::{Difficulty, EquipmentMode, Profile, ProfileRole, Workout},
    server::{build_router, ServerResources},
};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use uuid::Uuid;

/// Secret shared by the test identity provider and the verifier
pub const TEST_SECRET: &str = "integration-test-session-secret";
/// Audience the verifier accepts
pub const TEST_AUDIENCE: &str = "authenticated";
/// Session cookie name
pub const TEST_COOKIE: &str = "sb-access-token";
/// Content returned by the default mock provider
pub const MOCK_WORKOUT: &str = "2025-01-01\nWarmup:\n- 5 min jog\nMain Part:\n- 4x10 squats\nFinisher:\n- 1 min plank";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration for tests; never reads the environment
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        host: "127.0.0.1".to_owned(),
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        session: SessionConfig {
            jwt_secret: TEST_SECRET.to_owned(),
            audience: TEST_AUDIENCE.to_owned(),
            cookie_name: TEST_COOKIE.to_owned(),
        },
        llm: LlmConfig {
            base_url: "http://127.0.0.1:9/v1".to_owned(),
            model: "mock-model".to_owned(),
            api_key: None,
        },
        generation: GenerationConfig::default(),
        cors: CorsConfig::default(),
        request_timeout_secs: 30,
    }
}

/// Standard test database setup
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new(&DatabaseUrl::Memory)
        .await
        .expect("Failed to create in-memory database")
}

/// Mint a session token for `user_id` valid for one hour
pub fn mint_token(user_id: Uuid) -> String {
    mint_token_with(&user_id.to_string(), 3600, TEST_SECRET)
}

/// Mint a session token with explicit subject, expiry offset and signing secret
pub fn mint_token_with(sub: &str, exp_offset_secs: i64, secret: &str) -> String {
    let claims = json!({
        "sub": sub,
        "aud": TEST_AUDIENCE,
        "exp": Utc::now().timestamp() + exp_offset_secs,
        "role": "authenticated",
    });
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode test token")
}

/// Today's date as the routes see it
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Insert a workout row directly
pub async fn seed_workout(
    database: &Database,
    user_id: Uuid,
    date: NaiveDate,
    content: &str,
) -> Workout {
    database
        .insert_workout(&NewWorkout {
            user_id,
            date,
            content: content.to_owned(),
            level: Difficulty::Medium,
            equipment: EquipmentMode::Bodyweight,
        })
        .await
        .expect("Failed to seed workout")
        .0
}

/// Create or update a profile with the given role
pub async fn seed_profile(database: &Database, user_id: Uuid, role: ProfileRole) {
    database
        .upsert_profile(&Profile {
            id: user_id,
            display_name: Some("Test Athlete".to_owned()),
            role,
            created_at: Utc::now(),
        })
        .await
        .expect("Failed to seed profile");
}

// ============================================================================
// Mock completion provider
// ============================================================================

/// Completion provider that records requests and returns canned content
pub struct MockLlmProvider {
    calls: AtomicUsize,
    content: String,
    fail: bool,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockLlmProvider {
    /// Provider answering every request with `content`
    pub fn new(content: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            content: content.to_owned(),
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider failing every request
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new("")
        }
    }

    /// Number of `complete` calls so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Default for MockLlmProvider {
    fn default() -> Self {
        Self::new(MOCK_WORKOUT)
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(AppError::external_service("mock", "simulated provider outage"));
        }
        Ok(ChatResponse {
            content: self.content.clone(),
            model: "mock-model".to_owned(),
            usage: Some(TokenUsage {
                prompt_tokens: 100,
                completion_tokens: 50,
                total_tokens: 150,
            }),
            finish_reason: Some("stop".to_owned()),
        })
    }
}

// ============================================================================
// Instrumented repositories
// ============================================================================

/// Wraps a workout repository and counts every call
pub struct CountingWorkoutRepository {
    inner: Arc<dyn WorkoutRepository>,
    calls: AtomicUsize,
}

impl CountingWorkoutRepository {
    pub fn new(inner: Arc<dyn WorkoutRepository>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl WorkoutRepository for CountingWorkoutRepository {
    async fn find_for_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<Workout>> {
        self.hit();
        self.inner.find_for_date(user_id, date).await
    }

    async fn recent_before(
        &self,
        user_id: Uuid,
        before: NaiveDate,
        limit: u32,
    ) -> AppResult<Vec<Workout>> {
        self.hit();
        self.inner.recent_before(user_id, before, limit).await
    }

    async fn insert(&self, workout: NewWorkout) -> AppResult<(Workout, bool)> {
        self.hit();
        self.inner.insert(workout).await
    }

    async fn list_for_user(&self, user_id: Uuid, limit: u32) -> AppResult<Vec<Workout>> {
        self.hit();
        self.inner.list_for_user(user_id, limit).await
    }

    async fn count_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        self.hit();
        self.inner.count_for_user(user_id).await
    }

    async fn list_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Workout>> {
        self.hit();
        self.inner.list_in_range(user_id, start, end).await
    }

    async fn update_feedback(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        feedback: &str,
    ) -> AppResult<Option<Workout>> {
        self.hit();
        self.inner.update_feedback(user_id, workout_id, feedback).await
    }

    async fn list_all(&self, limit: u32) -> AppResult<Vec<Workout>> {
        self.hit();
        self.inner.list_all(limit).await
    }

    async fn count_all(&self) -> AppResult<u64> {
        self.hit();
        self.inner.count_all().await
    }
}

/// Wraps a profile repository and counts every call
pub struct CountingProfileRepository {
    inner: Arc<dyn ProfileRepository>,
    calls: AtomicUsize,
}

impl CountingProfileRepository {
    pub fn new(inner: Arc<dyn ProfileRepository>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileRepository for CountingProfileRepository {
    async fn get(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(user_id).await
    }

    async fn upsert(&self, profile: &Profile) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.upsert(profile).await
    }
}

/// Workout repository whose every call fails like an unreachable store
pub struct FailingWorkoutRepository;

fn store_down<T>() -> AppResult<T> {
    Err(AppError::database("simulated store outage"))
}

#[async_trait]
impl WorkoutRepository for FailingWorkoutRepository {
    async fn find_for_date(&self, _: Uuid, _: NaiveDate) -> AppResult<Option<Workout>> {
        store_down()
    }

    async fn recent_before(&self, _: Uuid, _: NaiveDate, _: u32) -> AppResult<Vec<Workout>> {
        store_down()
    }

    async fn insert(&self, _: NewWorkout) -> AppResult<(Workout, bool)> {
        store_down()
    }

    async fn list_for_user(&self, _: Uuid, _: u32) -> AppResult<Vec<Workout>> {
        store_down()
    }

    async fn count_for_user(&self, _: Uuid) -> AppResult<u64> {
        store_down()
    }

    async fn list_in_range(&self, _: Uuid, _: NaiveDate, _: NaiveDate) -> AppResult<Vec<Workout>> {
        store_down()
    }

    async fn update_feedback(&self, _: Uuid, _: Uuid, _: &str) -> AppResult<Option<Workout>> {
        store_down()
    }

    async fn list_all(&self, _: u32) -> AppResult<Vec<Workout>> {
        store_down()
    }

    async fn count_all(&self) -> AppResult<u64> {
        store_down()
    }
}

// ============================================================================
// Test application
// ============================================================================

/// Fully wired application over an in-memory database and a mock provider
pub struct TestApp {
    pub database: Database,
    pub resources: Arc<ServerResources>,
    pub llm: Arc<MockLlmProvider>,
    pub workout_repo: Arc<CountingWorkoutRepository>,
    pub profile_repo: Arc<CountingProfileRepository>,
}

impl TestApp {
    /// Application with the default mock provider
    pub async fn new() -> Self {
        Self::with_llm(MockLlmProvider::default()).await
    }

    /// Application with a specific mock provider
    pub async fn with_llm(llm: MockLlmProvider) -> Self {
        let database = create_test_database().await;
        let workouts: Arc<dyn WorkoutRepository> =
            Arc::new(WorkoutRepositoryImpl::new(database.clone()));
        Self::assemble(database, workouts, llm)
    }

    /// Application whose workout store fails on every call
    pub async fn with_failing_store(llm: MockLlmProvider) -> Self {
        let database = create_test_database().await;
        Self::assemble(database, Arc::new(FailingWorkoutRepository), llm)
    }

    fn assemble(
        database: Database,
        workouts: Arc<dyn WorkoutRepository>,
        llm: MockLlmProvider,
    ) -> Self {
        let llm = Arc::new(llm);
        let workout_repo = Arc::new(CountingWorkoutRepository::new(workouts));
        let profile_repo = Arc::new(CountingProfileRepository::new(Arc::new(
            ProfileRepositoryImpl::new(database.clone()),
        )));

        let workouts_dyn: Arc<dyn WorkoutRepository> = workout_repo.clone();
        let profiles_dyn: Arc<dyn ProfileRepository> = profile_repo.clone();
        let llm_dyn: Arc<dyn LlmProvider> = llm.clone();

        let resources = Arc::new(ServerResources::with_repositories(
            Arc::new(test_config()),
            database.clone(),
            workouts_dyn,
            profiles_dyn,
            llm_dyn,
        ));

        Self {
            database,
            resources,
            llm,
            workout_repo,
            profile_repo,
        }
    }

    /// The full router, middleware included
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.resources))
    }

    /// Total repository calls across workouts and profiles
    pub fn repository_calls(&self) -> usize {
        self.workout_repo.call_count() + self.profile_repo.call_count()
    }
}
