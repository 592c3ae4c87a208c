// ABOUTME: Builds the user prompt sent to the completion provider for a daily workout
// ABOUTME: Pure and deterministic: same date, settings, history and equipment give the same text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::equipment::EquipmentItem;
use crate::constants::generation::HISTORY_EXCERPT_CHARS;
use chrono::NaiveDate;
use std::fmt::Write;
use workout_core::models::{Difficulty, EquipmentMode, Workout};

/// Everything the prompt depends on
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    /// Workout date, rendered as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Requested difficulty
    pub difficulty: Difficulty,
    /// Requested equipment mode
    pub equipment: EquipmentMode,
    /// Earlier workouts, newest first
    pub history: &'a [Workout],
    /// Home equipment the user owns; only rendered for equipped workouts
    pub home_equipment: &'a [&'static EquipmentItem],
}

/// Render the workout prompt
///
/// The text names the chosen difficulty and equipment markers and no others, so the
/// provider is never shown conflicting settings. History lines carry only the date and
/// a content excerpt with every other marker word masked, for the same reason.
#[must_use]
pub fn build_workout_prompt(input: &PromptInput<'_>) -> String {
    let date = input.date.format("%Y-%m-%d").to_string();
    let level = input.difficulty.as_str();
    let equipment_line = match input.equipment {
        EquipmentMode::Bodyweight => "bodyweight only",
        EquipmentMode::Equipped => "with gym equipment",
    };

    let mut prompt = String::with_capacity(1024);
    let _ = writeln!(
        prompt,
        "Generate a personalized circular training workout for today ({date})."
    );
    prompt.push('\n');
    prompt.push_str("User preferences:\n");
    let _ = writeln!(prompt, "- Difficulty level: {level}");
    let _ = writeln!(prompt, "- Equipment: {equipment_line}");

    if input.equipment == EquipmentMode::Equipped && !input.home_equipment.is_empty() {
        let labels: Vec<String> = input.home_equipment.iter().map(|item| item.label()).collect();
        let _ = writeln!(prompt, "- Available home equipment: {}", labels.join(", "));
    }

    prompt.push('\n');
    let _ = writeln!(
        prompt,
        "Create a workout that matches the user's difficulty preference ({level}) and equipment choice ({}).",
        input.equipment.as_str()
    );

    if !input.history.is_empty() {
        prompt.push('\n');
        prompt.push_str("Recent workouts (do not repeat them):\n");
        for workout in input.history {
            let _ = writeln!(
                prompt,
                "- {}: {}",
                workout.date.format("%Y-%m-%d"),
                excerpt(&workout.content, input.difficulty, input.equipment)
            );
        }
    }

    prompt.push('\n');
    prompt.push_str("Use exactly this format:\n");
    let _ = writeln!(prompt, "{date}");
    prompt.push_str("Warmup:\n...\nMain Part:\n...\nFinisher:\n...\n");

    prompt
}

/// Replaces an unchosen marker word found in earlier workout content
const MASK: &str = "…";

/// Single-line excerpt of earlier workout content
fn excerpt(content: &str, difficulty: Difficulty, equipment: EquipmentMode) -> String {
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    let masked = mask_other_markers(&collapsed, difficulty, equipment);
    if masked.chars().count() <= HISTORY_EXCERPT_CHARS {
        return masked;
    }
    let mut cut: String = masked.chars().take(HISTORY_EXCERPT_CHARS).collect();
    cut.push_str("...");
    cut
}

/// Mask every difficulty and equipment marker except the chosen pair, ignoring case
fn mask_other_markers(text: &str, difficulty: Difficulty, equipment: EquipmentMode) -> String {
    let markers: Vec<Vec<char>> = Difficulty::ALL
        .into_iter()
        .filter(|level| *level != difficulty)
        .map(|level| level.as_str())
        .chain(
            EquipmentMode::ALL
                .into_iter()
                .filter(|mode| *mode != equipment)
                .map(|mode| mode.as_str()),
        )
        .map(|marker| marker.chars().map(fold_case).collect())
        .collect();

    let chars: Vec<char> = text.chars().collect();
    let folded: Vec<char> = chars.iter().copied().map(fold_case).collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if let Some(marker) = markers.iter().find(|m| folded[i..].starts_with(m.as_slice())) {
            out.push_str(MASK);
            i += marker.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
