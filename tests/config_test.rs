// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Runs serially because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use daily_workout_server::config::{DatabaseUrl, Environment, ServerConfig};
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "HTTP_PORT",
    "HOST",
    "DATABASE_URL",
    "ENVIRONMENT",
    "SESSION_JWT_SECRET",
    "SESSION_JWT_AUDIENCE",
    "SESSION_COOKIE_NAME",
    "LLM_BASE_URL",
    "LLM_MODEL",
    "OPENAI_API_KEY",
    "WORKOUT_TEMPERATURE",
    "WORKOUT_MAX_TOKENS",
    "WORKOUT_HISTORY_LIMIT",
    "CORS_ALLOWED_ORIGINS",
    "REQUEST_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8081);
    assert_eq!(config.environment, Environment::Development);
    assert!(!config.session.jwt_secret.is_empty());
    assert_eq!(config.generation.history_limit, 5);
    assert_eq!(config.generation.max_tokens, 512);
    assert!((config.generation.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(config.cors.allowed_origins, vec!["*".to_owned()]);
    assert!(config.llm.api_key.is_none());
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("SESSION_JWT_SECRET", "override-secret");
    env::set_var("WORKOUT_TEMPERATURE", "0.2");
    env::set_var("WORKOUT_HISTORY_LIMIT", "3");
    env::set_var("OPENAI_API_KEY", "sk-test");
    env::set_var(
        "CORS_ALLOWED_ORIGINS",
        "https://app.example.com, https://admin.example.com,",
    );

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert_eq!(config.database.url, DatabaseUrl::Memory);
    assert_eq!(config.session.jwt_secret, "override-secret");
    assert!((config.generation.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(config.generation.history_limit, 3);
    assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
    assert_eq!(
        config.cors.allowed_origins,
        vec![
            "https://app.example.com".to_owned(),
            "https://admin.example.com".to_owned()
        ]
    );
}

#[test]
#[serial]
fn test_production_requires_session_secret() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");

    let result = ServerConfig::from_env();
    clear_env();

    let message = result.unwrap_err().to_string();
    assert!(message.contains("SESSION_JWT_SECRET"));
}

#[test]
#[serial]
fn test_invalid_number_is_rejected() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.unwrap_err().to_string().contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_out_of_range_temperature_is_rejected() {
    clear_env();
    env::set_var("WORKOUT_TEMPERATURE", "3.5");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.unwrap_err().to_string().contains("WORKOUT_TEMPERATURE"));
}

#[test]
#[serial]
fn test_summary_omits_secrets() {
    clear_env();
    env::set_var("SESSION_JWT_SECRET", "very-secret-value");
    env::set_var("OPENAI_API_KEY", "sk-hidden");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    let summary = config.summary();
    assert!(!summary.contains("very-secret-value"));
    assert!(!summary.contains("sk-hidden"));
    assert!(summary.contains("8081"));
}
