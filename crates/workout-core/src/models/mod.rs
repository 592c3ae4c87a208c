// ABOUTME: Core data models for the daily workout service
// ABOUTME: Re-exports Workout, Difficulty, EquipmentMode and Profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Workout`: one generated daily exercise plan with optional feedback
//! - `Difficulty`: intensity wording of the generated plan
//! - `EquipmentMode`: whether the plan may assume gear
//! - `Profile`: per-user record managed next to the identity provider

mod profile;
mod workout;

pub use profile::{Profile, ProfileRole};
pub use workout::{Difficulty, EquipmentMode, Workout};
