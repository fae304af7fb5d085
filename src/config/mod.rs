// ABOUTME: Configuration module root re-exporting environment-driven server configuration
// ABOUTME: All configuration comes from environment variables with documented fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! Server configuration loaded from the environment

pub mod environment;

pub use environment::{AccessProfile, CorsConfig, DatabaseConfig, ServerConfig};
