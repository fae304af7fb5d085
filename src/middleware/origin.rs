// ABOUTME: Origin validation predicate guarding the MCP endpoint against cross-origin abuse
// ABOUTME: Allows absent origins, loopback hosts, and a configured allow-list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # Origin Validation
//!
//! A pure predicate over the optional `Origin` header. Non-browser MCP
//! clients send no origin and are allowed; loopback origins are allowed for
//! local development; anything else must appear in the configured
//! allow-list.
//!
//! A `false` result is not an error: callers translate it into an HTTP 403
//! with a raw text body and no JSON-RPC envelope.

use crate::config::CorsConfig;

/// Origin allow predicate built from server configuration
#[derive(Debug, Clone, Default)]
pub struct OriginValidator {
    allowed_origins: Vec<String>,
}

impl OriginValidator {
    /// Build a validator from the CORS configuration section
    #[must_use]
    pub fn new(config: &CorsConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
        }
    }

    /// Build a validator from an explicit origin list (test convenience)
    #[must_use]
    pub fn with_origins(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    /// Decide whether a request with this `Origin` header may proceed
    #[must_use]
    pub fn validate(&self, origin: Option<&str>) -> bool {
        let Some(origin) = origin else {
            // Non-browser MCP clients carry no Origin header
            return true;
        };

        if origin.contains("localhost") || origin.contains("127.0.0.1") {
            return true;
        }

        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn validator() -> OriginValidator {
        OriginValidator::with_origins(vec!["https://app.example.com".into()])
    }

    #[test]
    fn test_absent_origin_allowed() {
        assert!(validator().validate(None));
    }

    #[test]
    fn test_loopback_allowed() {
        assert!(validator().validate(Some("http://localhost:3001")));
        assert!(validator().validate(Some("http://127.0.0.1:8080")));
    }

    #[test]
    fn test_allow_list_match() {
        assert!(validator().validate(Some("https://app.example.com")));
    }

    #[test]
    fn test_unknown_origin_rejected() {
        assert!(!validator().validate(Some("https://evil.example")));
    }

    #[test]
    fn test_empty_list_rejects_non_loopback() {
        let v = OriginValidator::default();
        assert!(!v.validate(Some("https://app.example.com")));
        assert!(v.validate(None));
    }
}
