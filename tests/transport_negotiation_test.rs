// ABOUTME: Integration tests for Streamable HTTP content negotiation on the /mcp endpoint
// ABOUTME: Covers JSON preference, SSE framing, bad Accept rejection, 202 pass-through, and GET
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! Transport negotiation tests against the assembled router

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use common::{app, get_mcp, parse, post_mcp, post_mcp_raw};
use exercisedb_mcp_server::config::AccessProfile;
use serde_json::json;

fn tools_list(id: serde_json::Value) -> serde_json::Value {
    json!({"jsonrpc": "2.0", "method": "tools/list", "id": id})
}

#[tokio::test]
async fn test_request_method_returns_json_even_with_sse_accepted() {
    let (app, _) = app(AccessProfile::Open);
    let (status, headers, body) = post_mcp(
        app,
        &[
            ("content-type", "application/json"),
            ("accept", "application/json, text/event-stream"),
        ],
        &tools_list(json!(1)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["content-type"], "application/json");
    let parsed = parse(&body);
    assert_eq!(parsed["jsonrpc"], "2.0");
    assert_eq!(parsed["id"], 1);
    assert!(parsed["result"]["tools"].is_array());
}

#[tokio::test]
async fn test_sse_framing_when_json_not_accepted() {
    let (app, _) = app(AccessProfile::Open);
    let (status, headers, body) = post_mcp(
        app,
        &[
            ("content-type", "application/json"),
            ("accept", "text/event-stream"),
        ],
        &tools_list(json!(42)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["content-type"], "text/event-stream");
    assert!(headers.contains_key("x-session-id"));

    // Exact frame grammar: id line, event line, data line, blank line
    assert!(body.starts_with("id: 42\nevent: response\ndata: "));
    assert!(body.ends_with("\n\n"));
    let data_line = body
        .lines()
        .find(|l| l.starts_with("data: "))
        .unwrap()
        .trim_start_matches("data: ");
    let payload = parse(data_line);
    assert_eq!(payload["id"], 42);
    assert!(payload["result"]["tools"].is_array());
}

#[tokio::test]
async fn test_accept_neither_type_is_400() {
    let (app, _) = app(AccessProfile::Open);
    let (status, _, body) = post_mcp(
        app,
        &[("content-type", "application/json"), ("accept", "text/html")],
        &tools_list(json!(1)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"]["code"], -32600);
}

#[tokio::test]
async fn test_client_response_message_is_accepted_without_processing() {
    let (app, _) = app(AccessProfile::Open);
    let (status, _, body) = post_mcp(
        app,
        &[
            ("content-type", "application/json"),
            ("accept", "application/json"),
        ],
        &json!({"jsonrpc": "2.0", "id": 9, "result": {"ok": true}}),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_message_without_method_is_400() {
    let (app, _) = app(AccessProfile::Open);
    let (status, _, body) = post_mcp(
        app,
        &[
            ("content-type", "application/json"),
            ("accept", "application/json"),
        ],
        &json!({"jsonrpc": "2.0", "id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"]["code"], -32600);
}

#[tokio::test]
async fn test_malformed_json_degrades_to_400_not_parse_error() {
    let (app, _) = app(AccessProfile::Open);
    let (status, _, body) = post_mcp_raw(
        app,
        &[
            ("content-type", "application/json"),
            ("accept", "application/json"),
        ],
        "{not json",
    )
    .await;
    // Malformed bodies are treated as empty messages: no method, 400
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"]["code"], -32600);
}

#[tokio::test]
async fn test_get_without_sse_accept_is_405_with_allow() {
    let (app, _) = app(AccessProfile::Open);
    let (status, headers, _) = get_mcp(app, &[("accept", "application/json")]).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(headers["allow"], "POST");
}

#[tokio::test]
async fn test_get_with_sse_accept_opens_connected_stream() {
    let (app, _) = app(AccessProfile::Open);
    let (status, headers, body) = get_mcp(app, &[("accept", "text/event-stream")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["content-type"], "text/event-stream");

    let session_id = headers["x-session-id"].to_str().unwrap().to_owned();
    assert!(body.starts_with("event: connected\ndata: "));
    let data_line = body
        .lines()
        .find(|l| l.starts_with("data: "))
        .unwrap()
        .trim_start_matches("data: ");
    let payload = parse(data_line);
    assert_eq!(payload["type"], "connected");
    assert_eq!(payload["sessionId"], session_id.as_str());
}

#[tokio::test]
async fn test_options_preflight_carries_cors_headers() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let (app, _) = app(AccessProfile::Open);
    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/mcp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(
        response.headers()["access-control-allow-methods"],
        "GET, POST, OPTIONS"
    );
}
