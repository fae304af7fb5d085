// ABOUTME: In-memory content repository backing tests and standalone deployments
// ABOUTME: Dashmap-backed collections with optional seed catalog data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! In-memory [`ContentRepository`] implementation.
//!
//! Backs the test suite and standalone runs without a document store.
//! Query semantics mirror what the store-side aggregation pipelines do:
//! conjunctive equality filters, skip/limit pagination in insertion order,
//! and case-insensitive substring search.

use super::{ContentRepository, ExerciseFilter};
use crate::errors::AppResult;
use crate::models::{Exercise, ExerciseStats, FitnessProfile, Workout, WorkoutProgram};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Default page size when a query carries no limit
const DEFAULT_PAGE_SIZE: usize = 20;

/// Hard cap on page size regardless of the requested limit
const MAX_PAGE_SIZE: usize = 100;

/// In-memory repository over dashmap collections
#[derive(Default)]
pub struct MemoryRepository {
    exercises: DashMap<String, Exercise>,
    // Insertion order for stable pagination; dashmap iteration order is not
    exercise_order: std::sync::Mutex<Vec<String>>,
    profiles: DashMap<String, FitnessProfile>,
    workouts: DashMap<String, Workout>,
    programs: DashMap<String, WorkoutProgram>,
}

impl MemoryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with a small exercise catalog
    #[must_use]
    pub fn with_seed_data() -> Self {
        let repo = Self::new();
        for exercise in seed_exercises() {
            repo.insert_exercise(exercise);
        }
        repo
    }

    /// Insert an exercise document
    pub fn insert_exercise(&self, exercise: Exercise) {
        if let Ok(mut order) = self.exercise_order.lock() {
            order.push(exercise.id.clone());
        }
        self.exercises.insert(exercise.id.clone(), exercise);
    }

    /// Insert a fitness profile document
    pub fn insert_profile(&self, profile: FitnessProfile) {
        self.profiles.insert(profile.user_id.clone(), profile);
    }

    /// Number of persisted workout documents (test visibility)
    #[must_use]
    pub fn workout_count(&self) -> usize {
        self.workouts.len()
    }

    /// Number of persisted program documents (test visibility)
    #[must_use]
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    fn ordered_exercises(&self) -> Vec<Exercise> {
        let order = self
            .exercise_order
            .lock()
            .map(|ids| ids.clone())
            .unwrap_or_default();
        order
            .iter()
            .filter_map(|id| self.exercises.get(id).map(|e| e.clone()))
            .collect()
    }
}

fn matches_filter(exercise: &Exercise, filter: &ExerciseFilter) -> bool {
    if let Some(t) = &filter.exercise_type {
        if &exercise.exercise_type != t {
            return false;
        }
    }
    if let Some(l) = &filter.locale {
        if &exercise.locale != l {
            return false;
        }
    }
    if let Some(c) = &filter.category {
        if &exercise.category != c {
            return false;
        }
    }
    true
}

fn page_bounds(filter: &ExerciseFilter) -> (usize, usize) {
    let limit = filter
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);
    (filter.offset.unwrap_or(0), limit)
}

#[async_trait]
impl ContentRepository for MemoryRepository {
    async fn find_exercises(&self, filter: &ExerciseFilter) -> AppResult<Vec<Exercise>> {
        let (offset, limit) = page_bounds(filter);
        Ok(self
            .ordered_exercises()
            .into_iter()
            .filter(|e| matches_filter(e, filter))
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn exercise_by_id(&self, id: &str) -> AppResult<Option<Exercise>> {
        Ok(self.exercises.get(id).map(|e| e.clone()))
    }

    async fn search_exercises(&self, query: &str, limit: usize) -> AppResult<Vec<Exercise>> {
        let needle = query.to_lowercase();
        Ok(self
            .ordered_exercises()
            .into_iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&needle)
                    || e.category.to_lowercase().contains(&needle)
                    || e.muscles.iter().any(|m| m.to_lowercase().contains(&needle))
            })
            .take(limit.min(MAX_PAGE_SIZE))
            .collect())
    }

    async fn distinct_categories(&self) -> AppResult<Vec<String>> {
        let mut categories: Vec<String> = self
            .exercises
            .iter()
            .map(|e| e.category.clone())
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn exercise_stats(&self) -> AppResult<ExerciseStats> {
        let mut by_type: BTreeMap<String, u64> = BTreeMap::new();
        let mut by_category: BTreeMap<String, u64> = BTreeMap::new();
        for entry in &self.exercises {
            *by_type.entry(entry.exercise_type.clone()).or_default() += 1;
            if !entry.category.is_empty() {
                *by_category.entry(entry.category.clone()).or_default() += 1;
            }
        }
        Ok(ExerciseStats {
            total: self.exercises.len() as u64,
            by_type,
            by_category,
        })
    }

    async fn fitness_profile(&self, user_id: &str) -> AppResult<Option<FitnessProfile>> {
        Ok(self.profiles.get(user_id).map(|p| p.clone()))
    }

    async fn create_workout(&self, workout: &Workout) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let mut stored = workout.clone();
        stored.id = Some(id.clone());
        self.workouts.insert(id.clone(), stored);
        Ok(id)
    }

    async fn create_program(&self, program: &WorkoutProgram) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let mut stored = program.clone();
        stored.id = Some(id.clone());
        self.programs.insert(id.clone(), stored);
        Ok(id)
    }
}

/// Small representative catalog for standalone runs and tests
fn seed_exercises() -> Vec<Exercise> {
    let raw = serde_json::json!([
        {
            "_id": "push-up",
            "name": "Push Up",
            "type": "strength",
            "locale": "en",
            "category": "chest",
            "muscles": ["pectorals", "triceps"],
            "equipment": [],
            "instructions": [
                "Start in a high plank with hands under shoulders.",
                "Lower until the chest nearly touches the floor.",
                "Press back up to the starting position."
            ]
        },
        {
            "_id": "bodyweight-squat",
            "name": "Bodyweight Squat",
            "type": "strength",
            "locale": "en",
            "category": "legs",
            "muscles": ["quadriceps", "glutes"],
            "equipment": [],
            "instructions": [
                "Stand with feet shoulder-width apart.",
                "Sit back and down until thighs are parallel.",
                "Drive through the heels to stand."
            ]
        },
        {
            "_id": "plank",
            "name": "Plank",
            "type": "strength",
            "locale": "en",
            "category": "core",
            "muscles": ["abdominals"],
            "equipment": [],
            "instructions": ["Hold a straight line from head to heels on forearms."]
        },
        {
            "_id": "jumping-jacks",
            "name": "Jumping Jacks",
            "type": "cardio",
            "locale": "en",
            "category": "full body",
            "muscles": ["calves", "shoulders"],
            "equipment": [],
            "instructions": ["Jump while spreading legs and raising arms overhead."]
        },
        {
            "_id": "flexiones",
            "name": "Flexiones",
            "type": "strength",
            "locale": "es",
            "category": "chest",
            "muscles": ["pectorales", "tríceps"],
            "equipment": [],
            "instructions": ["Baja el pecho hacia el suelo y empuja hacia arriba."]
        }
    ]);
    serde_json::from_value(raw).unwrap_or_default()
}
