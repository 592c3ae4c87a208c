// ABOUTME: Workout record and the difficulty/equipment enums that parameterize generation
// ABOUTME: Wire values follow the web client (lahko/srednje/težko, bodyweight/oprema)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Difficulty level of a generated workout
///
/// Serialized with the Slovenian labels the web client sends; English names are
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Beginner friendly
    #[serde(rename = "lahko", alias = "easy")]
    Easy,
    /// Moderate intensity
    #[default]
    #[serde(rename = "srednje", alias = "medium")]
    Medium,
    /// High intensity
    #[serde(rename = "težko", alias = "hard", alias = "tezko")]
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Wire and storage representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "lahko",
            Self::Medium => "srednje",
            Self::Hard => "težko",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lahko" | "easy" => Ok(Self::Easy),
            "srednje" | "medium" => Ok(Self::Medium),
            "težko" | "tezko" | "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty level: {other}")),
        }
    }
}

/// Equipment assumption of a generated workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EquipmentMode {
    /// Bodyweight exercises only
    #[default]
    #[serde(rename = "bodyweight")]
    Bodyweight,
    /// Gym or home equipment available
    #[serde(rename = "oprema", alias = "equipped")]
    Equipped,
}

impl EquipmentMode {
    /// Both equipment modes
    pub const ALL: [Self; 2] = [Self::Bodyweight, Self::Equipped];

    /// Wire and storage representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bodyweight => "bodyweight",
            Self::Equipped => "oprema",
        }
    }
}

impl fmt::Display for EquipmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bodyweight" => Ok(Self::Bodyweight),
            "oprema" | "equipped" => Ok(Self::Equipped),
            other => Err(format!("unknown equipment mode: {other}")),
        }
    }
}

/// One generated daily workout
///
/// At most one exists per `(user_id, date)`. Only `feedback` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique workout ID
    pub id: Uuid,
    /// Owner of the workout
    pub user_id: Uuid,
    /// Calendar day the workout was generated for (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Generated plan text
    pub content: String,
    /// Requested difficulty
    pub level: Difficulty,
    /// Requested equipment mode
    pub equipment: EquipmentMode,
    /// Free-text feedback from the owner
    pub feedback: Option<String>,
    /// Insert timestamp
    pub created_at: DateTime<Utc>,
}
