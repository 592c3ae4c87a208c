// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ServerConfig with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{database, generation, ports, session, timeouts};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Path of the database file
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from a `sqlite:` URL or bare file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite://").or_else(|| s.strip_prefix("sqlite:")).unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(database::DEFAULT_DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database configuration
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// Session token verification settings
#[derive(Clone)]
pub struct SessionConfig {
    /// HS256 secret shared with the identity provider
    pub jwt_secret: String,
    /// Expected `aud` claim
    pub audience: String,
    /// Cookie carrying the access token
    pub cookie_name: String,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("audience", &self.audience)
            .field("cookie_name", &self.cookie_name)
            .finish()
    }
}

/// Completion provider settings
#[derive(Clone)]
pub struct LlmConfig {
    /// OpenAI-compatible base URL (without `/chat/completions`)
    pub base_url: String,
    /// Model name sent with every request
    pub model: String,
    /// Bearer key, absent for local servers
    pub api_key: Option<String>,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Parameters of the workout generation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum output tokens
    pub max_tokens: u32,
    /// Prior workouts rendered into the prompt
    pub history_limit: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: generation::DEFAULT_TEMPERATURE,
            max_tokens: generation::DEFAULT_MAX_TOKENS,
            history_limit: generation::DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// CORS settings
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed origins, `*` for any
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Session verification
    pub session: SessionConfig,
    /// Completion provider
    pub llm: LlmConfig,
    /// Generation parameters
    pub generation: GenerationConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse, or if
    /// `SESSION_JWT_SECRET` is missing in production
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let environment = Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development"));

        let config = Self {
            http_port: parse_env("HTTP_PORT", ports::DEFAULT_HTTP_PORT)?,
            host: env_var_or("HOST", ports::DEFAULT_HOST),
            environment,
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or(
                    "DATABASE_URL",
                    database::DEFAULT_DATABASE_URL,
                )),
            },
            session: SessionConfig {
                jwt_secret: session_secret(environment)?,
                audience: env_var_or("SESSION_JWT_AUDIENCE", session::DEFAULT_AUDIENCE),
                cookie_name: env_var_or("SESSION_COOKIE_NAME", session::DEFAULT_COOKIE_NAME),
            },
            llm: LlmConfig {
                base_url: env_var_or("LLM_BASE_URL", generation::DEFAULT_LLM_BASE_URL),
                model: env_var_or("LLM_MODEL", generation::DEFAULT_LLM_MODEL),
                api_key: env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty()),
            },
            generation: GenerationConfig {
                temperature: parse_env("WORKOUT_TEMPERATURE", generation::DEFAULT_TEMPERATURE)?,
                max_tokens: parse_env("WORKOUT_MAX_TOKENS", generation::DEFAULT_MAX_TOKENS)?,
                history_limit: parse_env(
                    "WORKOUT_HISTORY_LIMIT",
                    generation::DEFAULT_HISTORY_LIMIT,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or("CORS_ALLOWED_ORIGINS", "*")),
            },
            request_timeout_secs: parse_env(
                "REQUEST_TIMEOUT_SECS",
                timeouts::DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for out-of-range generation parameters or an empty secret
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(anyhow!(
                "WORKOUT_TEMPERATURE must be between 0.0 and 2.0, got {}",
                self.generation.temperature
            ));
        }
        if self.generation.max_tokens == 0 {
            return Err(anyhow!("WORKOUT_MAX_TOKENS must be greater than zero"));
        }
        if self.session.jwt_secret.is_empty() {
            return Err(anyhow!("SESSION_JWT_SECRET must not be empty"));
        }
        if self.llm.api_key.is_none() {
            warn!("OPENAI_API_KEY is not set; completion requests are sent without credentials");
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Daily Workout Server Configuration:\n\
             - Environment: {}\n\
             - Listen: {}:{}\n\
             - Database: {}\n\
             - LLM: {} ({})\n\
             - Generation: temperature={} max_tokens={} history={}\n\
             - CORS origins: {}",
            self.environment,
            self.host,
            self.http_port,
            self.database.url,
            self.llm.base_url,
            self.llm.model,
            self.generation.temperature,
            self.generation.max_tokens,
            self.generation.history_limit,
            self.cors.allowed_origins.join(", ")
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        Err(_) => Ok(default),
    }
}

/// Resolve the session secret, allowing a fixed fallback outside production
fn session_secret(environment: Environment) -> Result<String> {
    match env::var("SESSION_JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => Ok(secret),
        _ if environment.is_production() => Err(anyhow!(
            "SESSION_JWT_SECRET is required in production"
        )),
        _ => {
            warn!("SESSION_JWT_SECRET not set, using development fallback secret");
            Ok(session::DEV_FALLBACK_SECRET.to_owned())
        }
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
