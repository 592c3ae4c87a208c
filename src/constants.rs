// ABOUTME: System-wide constants and defaults for the daily workout service
// ABOUTME: Service names, default limits, generation parameters and header names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults. Anything an operator may want to change is also read from the
//! environment by [`crate::config::environment::ServerConfig::from_env`].

/// Service identification
pub mod service_names {
    /// Name used in logs and the health endpoint
    pub const DAILY_WORKOUT_SERVER: &str = "daily-workout-server";

    /// Service version from Cargo.toml
    pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;

    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
}

/// Session verification defaults
pub mod session {
    /// Cookie the identity provider stores the access token in
    pub const DEFAULT_COOKIE_NAME: &str = "sb-access-token";

    /// Audience claim expected on session tokens
    pub const DEFAULT_AUDIENCE: &str = "authenticated";

    /// Secret used when none is configured outside production
    pub const DEV_FALLBACK_SECRET: &str = "dev-only-session-secret-change-me";

    /// Clock skew tolerated when checking `exp`
    pub const LEEWAY_SECS: u64 = 30;
}

/// Workout generation defaults
pub mod generation {
    /// Sampling temperature for the completion call
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    /// Upper bound on generated tokens
    pub const DEFAULT_MAX_TOKENS: u32 = 512;

    /// Number of prior workouts rendered into the prompt
    pub const DEFAULT_HISTORY_LIMIT: u32 = 5;

    /// Characters of each prior workout kept in the prompt excerpt
    pub const HISTORY_EXCERPT_CHARS: usize = 160;

    /// Default OpenAI-compatible endpoint
    pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";

    /// Default completion model
    pub const DEFAULT_LLM_MODEL: &str = "gpt-3.5-turbo";

    /// Provider name used in errors and logs
    pub const PROVIDER_NAME: &str = "openai-compatible";
}

/// Listing limits
pub mod limits {
    /// Default and maximum number of workouts returned by the list endpoint
    pub const MAX_LIST_LIMIT: u32 = 100;

    /// Default page size for the admin listing
    pub const DEFAULT_ADMIN_LIST_LIMIT: u32 = 200;

    /// Largest page size accepted by the admin listing
    pub const MAX_ADMIN_LIST_LIMIT: u32 = 1000;

    /// Maximum length of a feedback text in characters
    pub const MAX_FEEDBACK_CHARS: usize = 4000;

    /// Maximum number of home equipment ids accepted per request
    pub const MAX_HOME_EQUIPMENT_ITEMS: usize = 32;
}

/// HTTP timeouts
pub mod timeouts {
    /// Default whole-request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

    /// Connect timeout for the completion provider
    pub const LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Request timeout for the completion provider
    pub const LLM_REQUEST_TIMEOUT_SECS: u64 = 90;
}

/// Database defaults
pub mod database {
    /// Default SQLite location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/workouts.db";

    /// Pool size for file-backed databases
    pub const MAX_CONNECTIONS: u32 = 5;
}

/// Header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}
