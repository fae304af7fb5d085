// ABOUTME: Server binary wiring configuration, logging, repository, and the HTTP listener
// ABOUTME: Runs with an in-memory seeded catalog until a document store backend is wired in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! ExerciseDB MCP server binary

use clap::Parser;
use exercisedb_mcp_server::config::{AccessProfile, ServerConfig};
use exercisedb_mcp_server::logging;
use exercisedb_mcp_server::mcp::resources::ServerResources;
use exercisedb_mcp_server::repository::{LazyRepository, MemoryRepository};
use exercisedb_mcp_server::routes;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "exercisedb-mcp-server")]
#[command(about = "MCP server exposing the ExerciseDB exercise and workout catalog")]
struct Args {
    /// HTTP listen port (overrides HTTP_PORT)
    #[arg(long)]
    http_port: Option<u16>,

    /// Serve the open, unauthenticated tool surface
    #[arg(long)]
    open_access: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.http_port {
        config.http_port = port;
    }
    if args.open_access {
        config.access_profile = AccessProfile::Open;
    }
    info!(config = %config.summary(), "Starting ExerciseDB MCP server");

    let repository = LazyRepository::connected(Arc::new(MemoryRepository::with_seed_data()));
    let resources = Arc::new(ServerResources::new(config, repository));

    routes::serve(resources).await?;
    Ok(())
}
