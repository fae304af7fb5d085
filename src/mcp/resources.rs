// ABOUTME: Shared server resources container for dependency injection across handlers
// ABOUTME: Bundles configuration, repository handle, origin validator, and session registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! Shared server resources passed to every request handler as one `Arc`.

use crate::config::ServerConfig;
use crate::mcp::session::SessionRegistry;
use crate::middleware::OriginValidator;
use crate::repository::LazyRepository;

/// Dependency container shared by all HTTP entry points
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Lazily-connected content repository
    pub repository: LazyRepository,
    /// Origin validation predicate
    pub origin_validator: OriginValidator,
    /// Registry of issued SSE session ids
    pub sessions: SessionRegistry,
}

impl ServerResources {
    /// Assemble server resources from configuration and a repository handle
    #[must_use]
    pub fn new(config: ServerConfig, repository: LazyRepository) -> Self {
        let origin_validator = OriginValidator::new(&config.cors);
        Self {
            config,
            repository,
            origin_validator,
            sessions: SessionRegistry::default(),
        }
    }
}
