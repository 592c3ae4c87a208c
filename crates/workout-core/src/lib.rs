// ABOUTME: Core types for the daily workout service
// ABOUTME: Foundation crate with error handling and workout/profile domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing the shared types of the daily workout service.
//! It changes rarely, so the server crate gets incremental compilation benefits.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: `Workout`, `Difficulty`, `EquipmentMode`, `Profile`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (Workout, Profile and their enums)
pub mod models;
