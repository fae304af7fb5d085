// ABOUTME: Crate root for the ExerciseDB MCP server library
// ABOUTME: Exposes errors, config, auth, repository, MCP protocol, and HTTP routing modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # ExerciseDB MCP Server
//!
//! A Model Context Protocol server over Streamable HTTP exposing an
//! exercise and workout catalog. Clients speak JSON-RPC 2.0 over HTTP POST
//! to `/mcp`; responses are framed as plain JSON or server-sent events
//! depending on the `Accept` header.
//!
//! The crate is organized around one request pipeline:
//! [`routes`] (HTTP entry, auth and origin gates) feeds
//! [`mcp::protocol`] (method dispatch) which draws on
//! [`repository`] (content store seam), with
//! [`mcp::streamable_http`] framing the reply.

/// Bearer credential extraction (unverified JWT payload decoding)
pub mod auth;
/// Environment-driven server configuration
pub mod config;
/// Unified error types with HTTP and JSON-RPC code mappings
pub mod errors;
/// JSON-RPC 2.0 envelope types
pub mod jsonrpc;
/// Structured logging setup
pub mod logging;
/// Model Context Protocol implementation
pub mod mcp;
/// Request gating middleware
pub mod middleware;
/// Domain document models
pub mod models;
/// Content repository seam and implementations
pub mod repository;
/// HTTP routing and server lifecycle
pub mod routes;
