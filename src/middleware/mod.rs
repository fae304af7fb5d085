// ABOUTME: HTTP middleware module for origin validation and CORS header construction
// ABOUTME: Request gating that runs before MCP dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! Request gating middleware for the MCP endpoint

/// Hand-built CORS header set for MCP responses
pub mod cors;
/// Origin validation predicate
pub mod origin;

pub use origin::OriginValidator;
