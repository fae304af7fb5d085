// ABOUTME: Resource read handlers serving exercise:// URIs as JSON contents blocks
// ABOUTME: Unknown URIs come back as a text/plain error block inside a successful response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # Resource Handlers
//!
//! `resources/read` serves three fixed URIs backed by catalog queries.
//! Like tool failures, resource failures never become JSON-RPC errors: an
//! unknown URI or a store failure is reported as a `text/plain` contents
//! block inside an otherwise successful response.

use crate::mcp::resources::ServerResources;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use super::schema::resource_uris;

fn contents(uri: &str, mime_type: &str, text: String) -> Value {
    json!({
        "contents": [{
            "uri": uri,
            "mimeType": mime_type,
            "text": text,
        }]
    })
}

fn json_contents(uri: &str, payload: &Value) -> Value {
    let text = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    contents(uri, "application/json", text)
}

fn error_contents(uri: &str, message: String) -> Value {
    contents(uri, "text/plain", message)
}

/// Read a resource by URI, producing the `resources/read` result payload
pub async fn read_resource(resources: &Arc<ServerResources>, uri: &str) -> Value {
    debug!(uri, "reading resource");
    match uri {
        resource_uris::EXERCISES => exercises_resource(resources, uri).await,
        resource_uris::CATEGORIES => categories_resource(resources, uri).await,
        resource_uris::STATS => stats_resource(resources, uri).await,
        other => error_contents(other, format!("Error: Unknown resource URI: {other}")),
    }
}

async fn exercises_resource(resources: &Arc<ServerResources>, uri: &str) -> Value {
    let repository = match resources.repository.get_or_connect().await {
        Ok(repository) => repository,
        Err(err) => return error_contents(uri, format!("Error: {err}")),
    };
    match repository
        .find_exercises(&crate::repository::ExerciseFilter::default())
        .await
    {
        Ok(exercises) => json_contents(
            uri,
            &json!({"count": exercises.len(), "exercises": exercises}),
        ),
        Err(err) => error_contents(uri, format!("Error: {err}")),
    }
}

async fn categories_resource(resources: &Arc<ServerResources>, uri: &str) -> Value {
    let repository = match resources.repository.get_or_connect().await {
        Ok(repository) => repository,
        Err(err) => return error_contents(uri, format!("Error: {err}")),
    };
    match repository.distinct_categories().await {
        Ok(categories) => json_contents(uri, &json!({"categories": categories})),
        Err(err) => error_contents(uri, format!("Error: {err}")),
    }
}

async fn stats_resource(resources: &Arc<ServerResources>, uri: &str) -> Value {
    let repository = match resources.repository.get_or_connect().await {
        Ok(repository) => repository,
        Err(err) => return error_contents(uri, format!("Error: {err}")),
    };
    match repository.exercise_stats().await {
        Ok(stats) => json_contents(uri, &json!(stats)),
        Err(err) => error_contents(uri, format!("Error: {err}")),
    }
}
