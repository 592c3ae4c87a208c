// ABOUTME: Month grid for the workout calendar view
// ABOUTME: Monday-first layout with one entry per day and a summary of that day's workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;
use workout_core::models::{Difficulty, EquipmentMode, Workout};

const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "Marec",
    "April",
    "Maj",
    "Junij",
    "Julij",
    "Avgust",
    "September",
    "Oktober",
    "November",
    "December",
];

/// Compact view of a workout shown in a calendar cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutSummary {
    /// Workout id
    pub id: Uuid,
    /// Difficulty marker
    pub level: Difficulty,
    /// Equipment marker
    pub equipment: EquipmentMode,
    /// Whether feedback was recorded
    pub has_feedback: bool,
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id,
            level: workout.level,
            equipment: workout.equipment,
            has_feedback: workout.feedback.is_some(),
        }
    }
}

/// One day of the month
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    /// The date
    pub date: NaiveDate,
    /// Day of month, 1-based
    pub day: u32,
    /// Whether this is the server's current date
    pub is_today: bool,
    /// The workout stored for this day
    pub workout: Option<WorkoutSummary>,
}

/// A month laid out for a Monday-first calendar
#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth {
    /// Year
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
    /// Month display name
    pub month_name: &'static str,
    /// Number of empty cells before day 1 (Monday = 0, Sunday = 6)
    pub first_weekday_offset: u32,
    /// Number of days in the month
    pub days_in_month: u32,
    /// Days with at least one workout
    pub workout_days: usize,
    /// Every day of the month in order
    pub days: Vec<CalendarDay>,
}

/// First and last date of a month
///
/// # Errors
///
/// Returns `InvalidInput` when the month is outside 1-12 or the year is out of range
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(AppError::invalid_input(format!(
            "Month must be between 1 and 12, got {month}"
        )));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::invalid_input(format!("Year {year} is out of range")))?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| AppError::invalid_input(format!("Year {year} is out of range")))?;
    Ok((first, last))
}

/// Lay out a month and attach the given workouts to their days
///
/// Workouts outside the month are ignored.
///
/// # Errors
///
/// Returns `InvalidInput` for an invalid year or month
pub fn build_calendar_month(
    year: i32,
    month: u32,
    today: NaiveDate,
    workouts: &[Workout],
) -> AppResult<CalendarMonth> {
    let (first, last) = month_bounds(year, month)?;

    let by_date: HashMap<NaiveDate, WorkoutSummary> = workouts
        .iter()
        .filter(|workout| workout.date >= first && workout.date <= last)
        .map(|workout| (workout.date, WorkoutSummary::from(workout)))
        .collect();

    let days: Vec<CalendarDay> = first
        .iter_days()
        .take_while(|date| *date <= last)
        .map(|date| CalendarDay {
            date,
            day: date.day(),
            is_today: date == today,
            workout: by_date.get(&date).cloned(),
        })
        .collect();

    let month_index = usize::try_from(month - 1).unwrap_or_default();
    Ok(CalendarMonth {
        year,
        month,
        month_name: MONTH_NAMES.get(month_index).copied().unwrap_or_default(),
        first_weekday_offset: first.weekday().num_days_from_monday(),
        days_in_month: last.day(),
        workout_days: by_date.len(),
        days,
    })
}
