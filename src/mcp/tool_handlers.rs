// ABOUTME: Tool execution handlers translating tools/call arguments into repository operations
// ABOUTME: Repository failures are swallowed into isError tool outcomes inside HTTP 200 responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # Tool Handlers
//!
//! One handler per tool in the descriptor table. Handlers never surface
//! errors as JSON-RPC error envelopes: every failure becomes a successful
//! `tools/call` result carrying `isError: true`, so a tool failure rides
//! inside an HTTP 200 exactly like a success.

use crate::mcp::resources::ServerResources;
use crate::mcp::schema::{tool_names, Content};
use crate::models::{generate_slug, ScheduleEntry, Workout, WorkoutProgram};
use crate::repository::ExerciseFilter;
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// A completed tool invocation, success or swallowed failure
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    /// Content blocks returned to the client
    pub content: Vec<Content>,
    /// Whether this outcome represents a failure
    pub is_error: bool,
}

impl ToolOutcome {
    /// Successful outcome with a single text block
    #[must_use]
    pub fn success(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error: false,
        }
    }

    /// Failed outcome with a single text block and `isError: true`
    #[must_use]
    pub fn error(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error: true,
        }
    }

    /// Render as the `tools/call` result payload
    #[must_use]
    pub fn into_value(self) -> Value {
        json!({
            "content": self.content,
            "isError": self.is_error,
        })
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn str_arg(args: &Map<String, Value>, key: &str) -> Option<String> {
    args.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn usize_arg(args: &Map<String, Value>, key: &str) -> Option<usize> {
    args.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
}

/// Execute a tool by name.
///
/// `user_id` is `Some` for authenticated deployments. Unknown tool names
/// and all downstream failures come back as `isError` outcomes, never as
/// transport-level errors.
pub async fn call_tool(
    resources: &Arc<ServerResources>,
    name: &str,
    args: &Map<String, Value>,
    user_id: Option<&str>,
) -> ToolOutcome {
    debug!(tool = name, "executing tool");
    let outcome = match name {
        tool_names::GET_EXERCISES => get_exercises(resources, args).await,
        tool_names::GET_EXERCISE_BY_ID => get_exercise_by_id(resources, args).await,
        tool_names::SEARCH_EXERCISES => search_exercises(resources, args).await,
        tool_names::LIST_ALL_EXERCISES => list_all_exercises(resources, args).await,
        tool_names::GET_USER_FITNESS_PROFILE => get_user_fitness_profile(resources, user_id).await,
        tool_names::CREATE_WORKOUT_PROGRAM => {
            create_workout_program(resources, args, user_id).await
        }
        other => ToolOutcome::error(format!("Unknown tool: {other}")),
    };
    if outcome.is_error {
        warn!(tool = name, "tool invocation failed");
    }
    outcome
}

async fn get_exercises(resources: &Arc<ServerResources>, args: &Map<String, Value>) -> ToolOutcome {
    let filter = ExerciseFilter {
        exercise_type: str_arg(args, "type"),
        locale: str_arg(args, "locale"),
        category: str_arg(args, "category"),
        limit: usize_arg(args, "limit"),
        offset: usize_arg(args, "offset"),
    };
    let repository = match resources.repository.get_or_connect().await {
        Ok(repository) => repository,
        Err(err) => return ToolOutcome::error(format!("Error retrieving exercises: {err}")),
    };
    match repository.find_exercises(&filter).await {
        Ok(exercises) => ToolOutcome::success(pretty(&json!({
            "count": exercises.len(),
            "exercises": exercises,
        }))),
        Err(err) => ToolOutcome::error(format!("Error retrieving exercises: {err}")),
    }
}

async fn get_exercise_by_id(
    resources: &Arc<ServerResources>,
    args: &Map<String, Value>,
) -> ToolOutcome {
    let Some(exercise_id) = str_arg(args, "exercise_id") else {
        return ToolOutcome::error("Missing required argument: exercise_id".to_owned());
    };
    let repository = match resources.repository.get_or_connect().await {
        Ok(repository) => repository,
        Err(err) => return ToolOutcome::error(format!("Error retrieving exercise: {err}")),
    };
    match repository.exercise_by_id(&exercise_id).await {
        Ok(Some(exercise)) => ToolOutcome::success(pretty(&json!(exercise))),
        Ok(None) => ToolOutcome::error(format!("Exercise not found: {exercise_id}")),
        Err(err) => ToolOutcome::error(format!("Error retrieving exercise: {err}")),
    }
}

async fn search_exercises(
    resources: &Arc<ServerResources>,
    args: &Map<String, Value>,
) -> ToolOutcome {
    let Some(query) = str_arg(args, "query") else {
        return ToolOutcome::error("Missing required argument: query".to_owned());
    };
    let limit = usize_arg(args, "limit").unwrap_or(10);
    let repository = match resources.repository.get_or_connect().await {
        Ok(repository) => repository,
        Err(err) => return ToolOutcome::error(format!("Error searching exercises: {err}")),
    };
    match repository.search_exercises(&query, limit).await {
        Ok(exercises) => ToolOutcome::success(pretty(&json!({
            "query": query,
            "count": exercises.len(),
            "exercises": exercises,
        }))),
        Err(err) => ToolOutcome::error(format!("Error searching exercises: {err}")),
    }
}

async fn list_all_exercises(
    resources: &Arc<ServerResources>,
    args: &Map<String, Value>,
) -> ToolOutcome {
    let filter = ExerciseFilter {
        limit: usize_arg(args, "limit"),
        offset: usize_arg(args, "offset"),
        ..ExerciseFilter::default()
    };
    let repository = match resources.repository.get_or_connect().await {
        Ok(repository) => repository,
        Err(err) => return ToolOutcome::error(format!("Error listing exercises: {err}")),
    };
    match repository.find_exercises(&filter).await {
        Ok(exercises) => ToolOutcome::success(pretty(&json!({
            "count": exercises.len(),
            "exercises": exercises,
        }))),
        Err(err) => ToolOutcome::error(format!("Error listing exercises: {err}")),
    }
}

async fn get_user_fitness_profile(
    resources: &Arc<ServerResources>,
    user_id: Option<&str>,
) -> ToolOutcome {
    let Some(user_id) = user_id else {
        return ToolOutcome::error("Authentication required for fitness profile".to_owned());
    };
    let repository = match resources.repository.get_or_connect().await {
        Ok(repository) => repository,
        Err(err) => return ToolOutcome::error(format!("Error retrieving fitness profile: {err}")),
    };
    match repository.fitness_profile(user_id).await {
        Ok(Some(profile)) => {
            let today = Utc::now().date_naive();
            let mut rendered = match serde_json::to_value(&profile) {
                Ok(rendered) => rendered,
                Err(err) => {
                    return ToolOutcome::error(format!("Error retrieving fitness profile: {err}"))
                }
            };
            if let Some(fields) = rendered.as_object_mut() {
                if let Some(bmi) = profile.bmi() {
                    fields.insert("bmi".to_owned(), json!((bmi * 10.0).round() / 10.0));
                }
                if let Some(age) = profile.age(today) {
                    fields.insert("age".to_owned(), json!(age));
                }
                if let Some(bmr) = profile.bmr(today) {
                    fields.insert("bmr".to_owned(), json!(bmr.round()));
                }
            }
            ToolOutcome::success(pretty(&rendered))
        }
        Ok(None) => ToolOutcome::error(format!("Fitness profile not found for user: {user_id}")),
        Err(err) => ToolOutcome::error(format!("Error retrieving fitness profile: {err}")),
    }
}

async fn create_workout_program(
    resources: &Arc<ServerResources>,
    args: &Map<String, Value>,
    user_id: Option<&str>,
) -> ToolOutcome {
    let Some(user_id) = user_id else {
        return ToolOutcome::error("Authentication required to create workout programs".to_owned());
    };
    let Some(title) = str_arg(args, "title") else {
        return ToolOutcome::error("Missing required argument: title".to_owned());
    };

    let workouts: Vec<Workout> = match args.get("workouts") {
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(workouts) => workouts,
            Err(err) => return ToolOutcome::error(format!("Invalid workouts array: {err}")),
        },
        None => Vec::new(),
    };
    if workouts.is_empty() {
        return ToolOutcome::error("Program must include at least one workout".to_owned());
    }

    let mut schedule: Vec<ScheduleEntry> = match args.get("program_schedule") {
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(schedule) => schedule,
            Err(err) => return ToolOutcome::error(format!("Invalid program_schedule array: {err}")),
        },
        None => Vec::new(),
    };
    if schedule.is_empty() {
        return ToolOutcome::error("Program must include at least one schedule entry".to_owned());
    }
    for entry in &schedule {
        if entry.workout_index >= workouts.len() {
            return ToolOutcome::error(format!(
                "Invalid workout_index: {} (program has {} workouts)",
                entry.workout_index,
                workouts.len()
            ));
        }
    }

    let repository = match resources.repository.get_or_connect().await {
        Ok(repository) => repository,
        Err(err) => return ToolOutcome::error(format!("Error creating workout program: {err}")),
    };

    // Workouts are persisted one by one; a mid-sequence failure leaves the
    // already-created documents in place. The store exposes no transaction
    // through the repository seam.
    let mut workout_ids = Vec::with_capacity(workouts.len());
    for workout in &workouts {
        match repository.create_workout(workout).await {
            Ok(id) => workout_ids.push(id),
            Err(err) => {
                return ToolOutcome::error(format!("Error creating workout program: {err}"))
            }
        }
    }

    for entry in &mut schedule {
        entry.workout_id = Some(workout_ids[entry.workout_index].clone());
    }

    let program = WorkoutProgram {
        id: None,
        slug: generate_slug(&title),
        title,
        description: str_arg(args, "description"),
        locale: str_arg(args, "locale").unwrap_or_else(|| "en".to_owned()),
        user_id: user_id.to_owned(),
        workout_ids,
        schedule,
        created_at: Utc::now(),
    };

    match repository.create_program(&program).await {
        Ok(program_id) => ToolOutcome::success(pretty(&json!({
            "program_id": program_id,
            "slug": program.slug,
            "workout_ids": program.workout_ids,
            "message": format!("Workout program '{}' created", program.title),
        }))),
        Err(err) => ToolOutcome::error(format!("Error creating workout program: {err}")),
    }
}
