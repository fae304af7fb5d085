// ABOUTME: Integration tests for Origin header validation on the /mcp endpoint
// ABOUTME: Verifies 403 raw-text rejection without CORS headers and the allow rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! Origin validation tests against the assembled router

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use common::{app, post_mcp, ALLOWED_ORIGIN};
use exercisedb_mcp_server::config::AccessProfile;
use serde_json::json;

fn tools_list() -> serde_json::Value {
    json!({"jsonrpc": "2.0", "method": "tools/list", "id": 1})
}

const JSON_HEADERS: [(&str, &str); 2] = [
    ("content-type", "application/json"),
    ("accept", "application/json"),
];

#[tokio::test]
async fn test_unknown_origin_rejected_without_cors() {
    let (app, _) = app(AccessProfile::Open);
    let (status, headers, body) = post_mcp(
        app,
        &[
            JSON_HEADERS[0],
            JSON_HEADERS[1],
            ("origin", "https://evil.example"),
        ],
        &tools_list(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    // Raw text body, no JSON-RPC envelope, and no CORS headers at all
    assert!(serde_json::from_str::<serde_json::Value>(&body).is_err());
    assert!(!headers.contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_absent_origin_allowed() {
    let (app, _) = app(AccessProfile::Open);
    let (status, _, _) = post_mcp(app, &JSON_HEADERS, &tools_list()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_localhost_origin_allowed() {
    let (app, _) = app(AccessProfile::Open);
    let (status, _, _) = post_mcp(
        app,
        &[
            JSON_HEADERS[0],
            JSON_HEADERS[1],
            ("origin", "http://localhost:3001"),
        ],
        &tools_list(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_allow_listed_origin_allowed_and_gets_cors() {
    let (app, _) = app(AccessProfile::Open);
    let (status, headers, _) = post_mcp(
        app,
        &[JSON_HEADERS[0], JSON_HEADERS[1], ("origin", ALLOWED_ORIGIN)],
        &tools_list(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["access-control-allow-origin"], "*");
}
