// ABOUTME: User profile record stored alongside externally managed identities
// ABOUTME: Carries the display name and role used for admin access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Role stored on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileRole {
    /// Regular user
    #[default]
    User,
    /// Administrator with read access to all workouts
    Admin,
}

impl ProfileRole {
    /// Storage representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for ProfileRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown profile role: {other}")),
        }
    }
}

/// One profile per user, keyed by the identity provider's user ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// User ID (same as the session subject)
    pub id: Uuid,
    /// Optional display name
    pub display_name: Option<String>,
    /// Access role
    pub role: ProfileRole,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Whether this profile grants admin access
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ProfileRole::Admin
    }
}
