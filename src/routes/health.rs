// ABOUTME: Liveness and readiness probe routes for deployment orchestration
// ABOUTME: Readiness reports whether the content repository has connected yet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! Health probe endpoints

use crate::mcp::resources::ServerResources;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

/// Build the health probe router
#[must_use]
pub fn router() -> Router<Arc<ServerResources>> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": crate::mcp::schema::SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn ready(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "repository_connected": resources.repository.is_connected(),
    }))
}
