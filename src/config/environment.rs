// ABOUTME: Environment-based server configuration with typed sections and sane local fallbacks
// ABOUTME: Covers HTTP port, document store URL, CORS allow-list, and the access profile selector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # Environment Configuration
//!
//! The server is configured exclusively through environment variables:
//!
//! | Variable | Default | Purpose |
//! |---|---|---|
//! | `HTTP_PORT` | `8080` | HTTP listen port |
//! | `MONGODB_URI` | `mongodb://localhost:27017/exercisedb` | document store connection string |
//! | `CORS_ALLOWED_ORIGINS` | empty | comma-separated origin allow-list |
//! | `MCP_ACCESS_PROFILE` | `authenticated` | `authenticated` or `open` |

use crate::errors::{AppError, AppResult};
use std::env;

/// Fallback connection string when `MONGODB_URI` is unset
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017/exercisedb";

/// Default HTTP listen port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Document store configuration
    pub database: DatabaseConfig,
    /// CORS / origin validation configuration
    pub cors: CorsConfig,
    /// Which deployment variant of the tool table to serve
    pub access_profile: AccessProfile,
}

/// Document store configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string for the document store
    pub url: String,
}

/// CORS / origin validation configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Origins accepted by the origin validator beyond localhost.
    /// Empty means only absent origins and localhost are accepted.
    pub allowed_origins: Vec<String>,
}

/// Deployment variants of the MCP surface
///
/// The two variants exist in the wild as separate deployments of the same
/// server. They share one dispatcher; only the tool table and the auth gate
/// differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessProfile {
    /// Bearer token required; user-scoped tools available
    #[default]
    Authenticated,
    /// No authentication; read-only catalog tools only
    Open,
}

impl AccessProfile {
    /// Whether requests must carry a bearer token
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `HTTP_PORT` or `MCP_ACCESS_PROFILE` carry
    /// unparseable values. Unset variables fall back to defaults.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid HTTP_PORT '{raw}': {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database = DatabaseConfig {
            url: env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
        };

        let cors = CorsConfig {
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origin_list(&raw))
                .unwrap_or_default(),
        };

        let access_profile = match env::var("MCP_ACCESS_PROFILE").as_deref() {
            Ok("open") => AccessProfile::Open,
            Ok("authenticated") | Err(_) => AccessProfile::Authenticated,
            Ok(other) => {
                return Err(AppError::config(format!(
                    "Invalid MCP_ACCESS_PROFILE '{other}': expected 'authenticated' or 'open'"
                )))
            }
        };

        Ok(Self {
            http_port,
            database,
            cors,
            access_profile,
        })
    }

    /// One-line configuration summary for startup logging.
    /// The database URL is redacted down to its scheme.
    #[must_use]
    pub fn summary(&self) -> String {
        let scheme = self
            .database
            .url
            .split("://")
            .next()
            .unwrap_or("unknown");
        format!(
            "port={} database={scheme}://... allowed_origins={} profile={:?}",
            self.http_port,
            self.cors.allowed_origins.len(),
            self.access_profile
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.into(),
            },
            cors: CorsConfig::default(),
            access_profile: AccessProfile::default(),
        }
    }
}

/// Parse a comma-separated origin list, skipping empty entries
fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|entry| {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        })
        .collect()
}
