// ABOUTME: MCP protocol module root wiring schema, dispatch, transport, and session handling
// ABOUTME: Exposes the method dispatcher and the Streamable HTTP negotiation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! Model Context Protocol implementation

/// Method dispatcher mapping JSON-RPC methods to handlers
pub mod protocol;
/// Resource read handlers for `exercise://` URIs
pub mod resource_handlers;
/// Shared server resources (dependency container)
pub mod resources;
/// Static tool and resource descriptor tables plus protocol message types
pub mod schema;
/// Bounded session registry for SSE session ids
pub mod session;
/// Streamable HTTP transport negotiation and SSE framing
pub mod streamable_http;
/// Tool execution handlers
pub mod tool_handlers;
