// ABOUTME: Domain models re-exported from workout-core
// ABOUTME: Workout, Profile and the difficulty/equipment enums with their wire markers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Workout`: one generated daily plan, at most one per user per date
//! - `Difficulty`: `lahko` / `srednje` / `težko`
//! - `EquipmentMode`: `bodyweight` / `oprema`
//! - `Profile`: per-user row carrying the access role

pub use workout_core::models::{Difficulty, EquipmentMode, Profile, ProfileRole, Workout};
