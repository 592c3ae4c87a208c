// ABOUTME: System prompt for workout generation loaded at compile time
// ABOUTME: Instructs the completion model to answer as a fitness expert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Fitness expert system instruction sent with every generation request
pub const FITNESS_EXPERT_SYSTEM_PROMPT: &str = include_str!("fitness_expert.md");

/// Get the system instruction for workout generation
#[must_use]
pub fn fitness_expert_system_prompt() -> &'static str {
    FITNESS_EXPERT_SYSTEM_PROMPT.trim_end()
}
