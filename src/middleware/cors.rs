// ABOUTME: CORS header construction for MCP endpoint responses
// ABOUTME: Hand-built header set because the 403 origin rejection deliberately omits CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # CORS Headers
//!
//! The MCP endpoint attaches a fixed CORS header set to every response,
//! success or error, with one exception: the 403 origin-rejection response
//! carries none. A layered CORS middleware cannot express that asymmetry,
//! so the headers are written by hand where responses are built.

use axum::http::{header, HeaderMap, HeaderValue};

/// Allowed request headers advertised on every MCP response
pub const ALLOWED_HEADERS: &str = "Content-Type, Accept, Origin, Authorization";

/// Allowed methods advertised on every MCP response
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Build the fixed CORS header set attached to MCP responses
#[must_use]
pub fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_header_set_complete() {
        let headers = cors_headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type, Accept, Origin, Authorization"
        );
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, OPTIONS"
        );
    }
}
