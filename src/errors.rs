// ABOUTME: Unified error handling re-exported from workout-core
// ABOUTME: AppError, ErrorCode and ErrorResponse are shared by every module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! See [`workout_core::errors`] for the error codes and their HTTP mapping.

pub use workout_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
