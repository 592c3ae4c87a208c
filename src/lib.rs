// ABOUTME: Main library entry point for the daily workout server
// ABOUTME: Session-verified HTTP API that generates one AI workout per user per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Daily Workout Server
//!
//! Users authenticated by an external identity provider request today's workout.
//! The first request of the day builds a prompt from their settings and recent
//! history, calls an `OpenAI`-compatible completion endpoint once and stores the
//! result; later requests that day return the stored row.
//!
//! ## Architecture
//!
//! - **auth**: verifies the provider's HS256 session tokens
//! - **database**: `SQLite` storage behind repository traits
//! - **llm**: completion provider trait and HTTP client
//! - **workouts**: prompt builder, generation orchestrator, calendar and equipment catalog
//! - **routes** / **server**: axum handlers and the middleware stack
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use daily_workout_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Daily workout server configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Session token verification
pub mod auth;

/// Environment configuration
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Workout and profile storage
pub mod database;

/// Unified error handling
pub mod errors;

/// Completion provider abstraction and `OpenAI`-compatible client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Domain models
pub mod models;

/// HTTP route handlers
pub mod routes;

/// Cookie parsing and response security headers
pub mod security;

/// Router assembly and server lifecycle
pub mod server;

/// Workout generation, prompt building, calendar and equipment catalog
pub mod workouts;
