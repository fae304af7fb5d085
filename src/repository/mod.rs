// ABOUTME: Content repository trait abstracting the document store behind find/search/create operations
// ABOUTME: The MCP dispatcher consumes this seam; concrete stores plug in behind it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # Content Repository
//!
//! The document store is an external collaborator. Everything the MCP
//! dispatcher needs from it goes through [`ContentRepository`]: filtered
//! finds, text search, distinct/aggregate reads, and the two create
//! operations used by program creation.
//!
//! Implementations must tolerate concurrent first use: the transport layer
//! calls [`LazyRepository::get_or_connect`](lazy::LazyRepository) on every
//! data-touching request, and cold-start invocations may race.

pub mod lazy;
pub mod memory;

pub use lazy::LazyRepository;
pub use memory::MemoryRepository;

use crate::errors::AppResult;
use crate::models::{Exercise, ExerciseStats, FitnessProfile, Workout, WorkoutProgram};
use async_trait::async_trait;

/// Filter for exercise catalog queries
///
/// All fields are conjunctive; `None` means "no constraint".
#[derive(Debug, Clone, Default)]
pub struct ExerciseFilter {
    /// Exercise type (strength, cardio, ...)
    pub exercise_type: Option<String>,
    /// Content locale
    pub locale: Option<String>,
    /// Category (chest, legs, ...)
    pub category: Option<String>,
    /// Page size; implementations may cap this
    pub limit: Option<usize>,
    /// Number of documents to skip
    pub offset: Option<usize>,
}

/// Query/aggregate/create operations over exercise, workout, and profile
/// documents
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Find exercises matching the filter, paginated
    async fn find_exercises(&self, filter: &ExerciseFilter) -> AppResult<Vec<Exercise>>;

    /// Fetch a single exercise by document id
    async fn exercise_by_id(&self, id: &str) -> AppResult<Option<Exercise>>;

    /// Case-insensitive text search over name, muscles, and category
    async fn search_exercises(&self, query: &str, limit: usize) -> AppResult<Vec<Exercise>>;

    /// Distinct category values across the catalog
    async fn distinct_categories(&self) -> AppResult<Vec<String>>;

    /// Aggregated catalog counts
    async fn exercise_stats(&self) -> AppResult<ExerciseStats>;

    /// Fetch a user's fitness profile
    async fn fitness_profile(&self, user_id: &str) -> AppResult<Option<FitnessProfile>>;

    /// Persist a workout document, returning its assigned id
    async fn create_workout(&self, workout: &Workout) -> AppResult<String>;

    /// Persist a program document, returning its assigned id
    async fn create_program(&self, program: &WorkoutProgram) -> AppResult<String>;
}
