// ABOUTME: Domain document models for exercises, workouts, programs, and fitness profiles
// ABOUTME: Carries serde schema defaults, slug generation, and BMI/BMR/age arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # Domain Models
//!
//! Document shapes served through the content repository. Field defaults
//! mirror the store's schema defaults so partially-populated documents
//! deserialize the same way the original schema layer would materialize
//! them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_locale() -> String {
    "en".to_owned()
}

fn default_exercise_type() -> String {
    "strength".to_owned()
}

/// An exercise catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Document identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Exercise type (strength, cardio, mobility, ...)
    #[serde(rename = "type", default = "default_exercise_type")]
    pub exercise_type: String,
    /// Content locale
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Category (e.g. "chest", "legs", "core")
    #[serde(default)]
    pub category: String,
    /// Primary muscles worked
    #[serde(default)]
    pub muscles: Vec<String>,
    /// Required equipment
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Step-by-step instructions
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// A single workout document within a program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Document identifier (assigned by the store on creation)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Workout title
    pub title: String,
    /// Exercise ids with set/rep prescriptions
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
    /// Estimated duration in minutes
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// One prescribed exercise inside a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Exercise document id
    pub exercise_id: String,
    /// Number of sets
    #[serde(default)]
    pub sets: Option<u32>,
    /// Repetitions per set
    #[serde(default)]
    pub reps: Option<u32>,
    /// Rest between sets, seconds
    #[serde(default)]
    pub rest_seconds: Option<u32>,
}

/// A scheduled slot referencing a workout by index at creation time,
/// and by document id once persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day label ("monday", "day_1", ...)
    pub day: String,
    /// Index into the program's workout array (creation request form)
    pub workout_index: usize,
    /// Persisted workout document id (filled in after creation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<String>,
}

/// A workout program document referencing persisted workouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutProgram {
    /// Document identifier (assigned by the store on creation)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Program title
    pub title: String,
    /// URL-safe slug derived from the title
    pub slug: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Content locale
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Owning user id
    pub user_id: String,
    /// Persisted workout document ids, creation order
    pub workout_ids: Vec<String>,
    /// Weekly schedule referencing the workouts
    pub schedule: Vec<ScheduleEntry>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A user fitness profile document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessProfile {
    /// Owning user id
    pub user_id: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Biological sex for BMR purposes ("male"/"female")
    #[serde(default)]
    pub sex: Option<String>,
    /// Date of birth
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Training goal free text
    #[serde(default)]
    pub goal: Option<String>,
}

impl FitnessProfile {
    /// Body mass index: weight (kg) over height (m) squared
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.height_cm / 100.0;
        if height_m <= 0.0 || self.weight_kg <= 0.0 {
            return None;
        }
        Some(self.weight_kg / (height_m * height_m))
    }

    /// Age in whole years as of `today`
    #[must_use]
    pub fn age(&self, today: NaiveDate) -> Option<u32> {
        let birth = self.birth_date?;
        if birth > today {
            return None;
        }
        today.years_since(birth)
    }

    /// Basal metabolic rate via Mifflin-St Jeor
    ///
    /// `10*kg + 6.25*cm - 5*age + 5` for males, `- 161` for females.
    /// Returns `None` when sex or birth date is missing.
    #[must_use]
    pub fn bmr(&self, today: NaiveDate) -> Option<f64> {
        let age = f64::from(self.age(today)?);
        let offset = match self.sex.as_deref() {
            Some("male") => 5.0,
            Some("female") => -161.0,
            _ => return None,
        };
        Some(10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * age + offset)
    }
}

/// Aggregated catalog statistics served by `exercise://stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseStats {
    /// Total number of exercise documents
    pub total: u64,
    /// Counts keyed by exercise type
    pub by_type: std::collections::BTreeMap<String, u64>,
    /// Counts keyed by category
    pub by_category: std::collections::BTreeMap<String, u64>,
}

/// Generate a URL-safe slug from a title.
///
/// Lowercases, maps runs of non-alphanumerics to single dashes, and appends
/// a short random suffix because the store exposes no unique-slug
/// constraint through the repository seam.
#[must_use]
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(8).collect();
    if slug.is_empty() {
        suffix
    } else {
        format!("{slug}-{suffix}")
    }
}
