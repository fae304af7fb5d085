// ABOUTME: MCP protocol schema definitions and static tool/resource descriptor tables
// ABOUTME: Descriptors are configuration data served verbatim by tools/list and resources/list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # MCP Schema
//!
//! Type-safe definitions for MCP protocol messages plus the static tool and
//! resource descriptor tables. The tables are the single source of truth
//! for what each deployment profile exposes; the dispatcher's tool lookup
//! and `tools/list` both read from here so they cannot drift apart.

use crate::config::AccessProfile;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// MCP protocol version implemented by this server
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name advertised in `initialize`
pub const SERVER_NAME: &str = "exercisedb-mcp-server";

/// Tool name constants
pub mod tool_names {
    /// Filtered, paginated exercise catalog query
    pub const GET_EXERCISES: &str = "get_exercises";
    /// Single exercise lookup by id
    pub const GET_EXERCISE_BY_ID: &str = "get_exercise_by_id";
    /// Free-text exercise search
    pub const SEARCH_EXERCISES: &str = "search_exercises";
    /// Authenticated fitness profile with computed metrics
    pub const GET_USER_FITNESS_PROFILE: &str = "get_user_fitness_profile";
    /// Authenticated workout program creation
    pub const CREATE_WORKOUT_PROGRAM: &str = "create_workout_program";
    /// Unpaginated-style full catalog listing (open deployments)
    pub const LIST_ALL_EXERCISES: &str = "list_all_exercises";
}

/// Resource URI constants
pub mod resource_uris {
    /// Exercise catalog listing
    pub const EXERCISES: &str = "exercise://exercises";
    /// Distinct exercise categories
    pub const CATEGORIES: &str = "exercise://categories";
    /// Aggregated catalog statistics
    pub const STATS: &str = "exercise://stats";
}

/// MCP tool descriptor served verbatim by `tools/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name clients pass to `tools/call`
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON Schema of the tool's arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// MCP resource descriptor served verbatim by `resources/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSchema {
    /// Resource URI clients pass to `resources/read`
    pub uri: String,
    /// Display name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// MIME type of the resource content
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// Content block carried in tool responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text content
    #[serde(rename = "text")]
    Text {
        /// The text payload
        text: String,
    },
}

/// `initialize` response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Protocol version string
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Advertised capabilities
    pub capabilities: Value,
    /// Server identification
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

/// Server identification record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

impl InitializeResponse {
    /// Build the static initialize record for this server
    #[must_use]
    pub fn current() -> Self {
        Self {
            protocol_version: MCP_PROTOCOL_VERSION.to_owned(),
            capabilities: json!({
                "tools": {},
                "resources": {}
            }),
            server_info: ServerInfo {
                name: SERVER_NAME.to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
            },
        }
    }
}

fn catalog_tools() -> Vec<ToolSchema> {
    vec![
        ToolSchema {
            name: tool_names::GET_EXERCISES.to_owned(),
            description: "Get exercises filtered by type, locale, and category, with pagination"
                .to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "type": {"type": "string", "description": "Exercise type (strength, cardio, mobility)"},
                    "locale": {"type": "string", "description": "Content locale, e.g. 'en'"},
                    "category": {"type": "string", "description": "Category such as 'chest' or 'legs'"},
                    "limit": {"type": "integer", "description": "Page size (max 100)"},
                    "offset": {"type": "integer", "description": "Documents to skip"}
                }
            }),
        },
        ToolSchema {
            name: tool_names::GET_EXERCISE_BY_ID.to_owned(),
            description: "Get a single exercise by its document id".to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "exercise_id": {"type": "string", "description": "Exercise document id"}
                },
                "required": ["exercise_id"]
            }),
        },
        ToolSchema {
            name: tool_names::SEARCH_EXERCISES.to_owned(),
            description: "Search exercises by name, muscle, or category".to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Search text"},
                    "limit": {"type": "integer", "description": "Maximum results (default 10)"}
                },
                "required": ["query"]
            }),
        },
    ]
}

fn authenticated_tools() -> Vec<ToolSchema> {
    vec![
        ToolSchema {
            name: tool_names::GET_USER_FITNESS_PROFILE.to_owned(),
            description:
                "Get the authenticated user's fitness profile with computed BMI, BMR, and age"
                    .to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolSchema {
            name: tool_names::CREATE_WORKOUT_PROGRAM.to_owned(),
            description: "Create a workout program: persists the workouts, then a program \
                          document referencing them by id"
                .to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "title": {"type": "string", "description": "Program title"},
                    "description": {"type": "string", "description": "Optional description"},
                    "locale": {"type": "string", "description": "Content locale, defaults to 'en'"},
                    "workouts": {
                        "type": "array",
                        "description": "Workout documents to persist",
                        "items": {
                            "type": "object",
                            "properties": {
                                "title": {"type": "string"},
                                "exercises": {"type": "array"},
                                "duration_minutes": {"type": "integer"}
                            },
                            "required": ["title"]
                        }
                    },
                    "program_schedule": {
                        "type": "array",
                        "description": "Schedule entries referencing workouts by index",
                        "items": {
                            "type": "object",
                            "properties": {
                                "day": {"type": "string"},
                                "workout_index": {"type": "integer"}
                            },
                            "required": ["day", "workout_index"]
                        }
                    }
                },
                "required": ["title", "workouts", "program_schedule"]
            }),
        },
    ]
}

fn open_tools() -> Vec<ToolSchema> {
    vec![ToolSchema {
        name: tool_names::LIST_ALL_EXERCISES.to_owned(),
        description: "List the full exercise catalog with simple pagination".to_owned(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "limit": {"type": "integer", "description": "Page size (max 100)"},
                "offset": {"type": "integer", "description": "Documents to skip"}
            }
        }),
    }]
}

/// Static tool descriptor table for a deployment profile
#[must_use]
pub fn get_tools(profile: AccessProfile) -> Vec<ToolSchema> {
    let mut tools = catalog_tools();
    match profile {
        AccessProfile::Authenticated => tools.extend(authenticated_tools()),
        AccessProfile::Open => tools.extend(open_tools()),
    }
    tools
}

/// Static resource descriptor table (profile-independent)
#[must_use]
pub fn get_resources() -> Vec<ResourceSchema> {
    vec![
        ResourceSchema {
            uri: resource_uris::EXERCISES.to_owned(),
            name: "Exercises".to_owned(),
            description: "Exercise catalog listing".to_owned(),
            mime_type: "application/json".to_owned(),
        },
        ResourceSchema {
            uri: resource_uris::CATEGORIES.to_owned(),
            name: "Exercise Categories".to_owned(),
            description: "Distinct exercise categories across the catalog".to_owned(),
            mime_type: "application/json".to_owned(),
        },
        ResourceSchema {
            uri: resource_uris::STATS.to_owned(),
            name: "Catalog Statistics".to_owned(),
            description: "Aggregated exercise counts by type and category".to_owned(),
            mime_type: "application/json".to_owned(),
        },
    ]
}
