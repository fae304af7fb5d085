// ABOUTME: Bearer credential extraction with unverified JWT payload decoding
// ABOUTME: Parses Authorization headers and resolves a user id from conventional claim locations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # Bearer Credential Extraction
//!
//! Parses `Authorization: Bearer <token>` headers and decodes the token's
//! payload segment. The token's cryptographic signature is **not**
//! verified, only decoded; the upstream gateway owns trust in this
//! deployment and the server intentionally performs syntactic decoding
//! only. Treat the resulting claims accordingly.
//!
//! The user identifier is resolved from the first of these claim paths to
//! yield a string: `user._id`, `_id`, `userId`, `sub`.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde_json::Value;
use thiserror::Error;

/// Claim paths probed for a user identifier, in precedence order
const USER_ID_CLAIM_PATHS: [&[&str]; 4] = [&["user", "_id"], &["_id"], &["userId"], &["sub"]];

/// Authentication failure raised by the credential extractor
///
/// Maps to HTTP 401 and JSON-RPC code `-32001` at the transport layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No Authorization header on the request
    #[error("Authorization header is required")]
    MissingHeader,

    /// Header present but not `Bearer <token>`
    #[error("Invalid authorization format, expected 'Bearer <token>'")]
    InvalidScheme,

    /// Token payload segment is not decodable base64url JSON
    #[error("Invalid JWT token format")]
    MalformedToken,

    /// Decoded claims carry no recognized user identifier
    #[error("User ID not found in token claims")]
    MissingUserId,
}

/// Request-scoped user context derived from a bearer token
///
/// Lifetime is a single request; never persisted.
#[derive(Debug, Clone)]
pub struct UserContext {
    /// Resolved user identifier
    pub user_id: String,
    /// Full decoded claim set
    pub claims: Value,
}

/// Bearer credential extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialExtractor;

impl CredentialExtractor {
    /// Extract a [`UserContext`] from an optional Authorization header value
    ///
    /// # Errors
    /// Returns [`AuthError`] when the header is missing, not a bearer
    /// credential, not a decodable JWT, or carries no user identifier.
    pub fn extract(header: Option<&str>) -> Result<UserContext, AuthError> {
        let header = header.ok_or(AuthError::MissingHeader)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidScheme)?;

        let claims = decode_payload(token)?;
        let user_id = find_user_id(&claims).ok_or(AuthError::MissingUserId)?;

        tracing::debug!(user_id = %user_id, "Bearer credential extracted");
        Ok(UserContext { user_id, claims })
    }
}

/// Decode the payload segment of a JWT without verifying its signature
fn decode_payload(token: &str) -> Result<Value, AuthError> {
    let mut segments = token.split('.');
    let _header = segments.next().ok_or(AuthError::MalformedToken)?;
    let payload = segments.next().ok_or(AuthError::MalformedToken)?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AuthError::MalformedToken)?;
    let claims: Value = serde_json::from_slice(&bytes).map_err(|_| AuthError::MalformedToken)?;

    if claims.is_object() {
        Ok(claims)
    } else {
        Err(AuthError::MalformedToken)
    }
}

/// Probe the conventional claim paths for a user identifier
fn find_user_id(claims: &Value) -> Option<String> {
    for path in USER_ID_CLAIM_PATHS {
        let mut cursor = claims;
        let mut found = true;
        for key in path {
            match cursor.get(key) {
                Some(next) => cursor = next,
                None => {
                    found = false;
                    break;
                }
            }
        }
        if !found {
            continue;
        }
        match cursor {
            Value::String(s) if !s.is_empty() => return Some(s.clone()),
            // Numeric ids appear in some issuers' tokens
            Value::Number(n) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}
