// ABOUTME: Workout domain logic: prompt building, generation flow, calendar grid and equipment catalog
// ABOUTME: Pure functions plus the orchestrator that ties repositories and the completion provider together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workouts
//!
//! - [`prompt`]: deterministic prompt text from date, settings, history and equipment
//! - [`generator`]: check for today's row, otherwise generate and store one
//! - [`calendar`]: Monday-first month grid with per-day workout summaries
//! - [`equipment`]: static home equipment catalog

/// Monday-first month grid
pub mod calendar;
/// Static home equipment catalog
pub mod equipment;
/// Workout generation orchestrator
pub mod generator;
/// Prompt builder
pub mod prompt;

pub use calendar::{build_calendar_month, CalendarDay, CalendarMonth, WorkoutSummary};
pub use equipment::{catalog, resolve_equipment, EquipmentCategory, EquipmentItem};
pub use generator::{GeneratedWorkout, WorkoutGenerator, WorkoutSettings};
pub use prompt::{build_workout_prompt, PromptInput};
