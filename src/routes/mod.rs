// ABOUTME: HTTP route assembly and server lifecycle for the MCP endpoint
// ABOUTME: Wires the /mcp handlers, health probes, and graceful shutdown into one axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! HTTP routing and server lifecycle

pub mod health;
pub mod mcp;

use crate::errors::{AppError, AppResult};
use crate::mcp::resources::ServerResources;
use axum::routing::post;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router over shared server resources
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .route("/mcp", post(mcp::handle_post).get(mcp::handle_get).options(mcp::handle_options))
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(resources)
}

/// Bind the configured port and serve until ctrl-c
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails while
/// running.
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let summary = resources.config.summary();
    let app = router(resources);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    info!(%addr, config = %summary, "MCP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install ctrl-c handler");
        return;
    }
    info!("Shutdown signal received");
}
