// ABOUTME: Integration tests for MCP method dispatch over HTTP POST
// ABOUTME: Covers initialize, list methods, unknown-method envelopes, and id pass-through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! Protocol dispatch tests against the assembled router

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use common::{app, parse, post_mcp};
use exercisedb_mcp_server::config::AccessProfile;
use serde_json::json;

const JSON_HEADERS: [(&str, &str); 2] = [
    ("content-type", "application/json"),
    ("accept", "application/json"),
];

#[tokio::test]
async fn test_initialize_advertises_protocol_and_server() {
    let (app, _) = app(AccessProfile::Open);
    let (status, _, body) = post_mcp(
        app,
        &JSON_HEADERS,
        &json!({"jsonrpc": "2.0", "method": "initialize", "id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let result = &parse(&body)["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "exercisedb-mcp-server");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
}

#[tokio::test]
async fn test_unknown_method_rides_inside_http_200() {
    let (app, _) = app(AccessProfile::Open);
    let (status, _, body) = post_mcp(
        app,
        &JSON_HEADERS,
        &json!({"jsonrpc": "2.0", "method": "tools/destroy", "id": 7}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let parsed = parse(&body);
    assert_eq!(parsed["error"]["code"], -32601);
    assert_eq!(parsed["error"]["message"], "Unknown method: tools/destroy");
    assert_eq!(parsed["id"], 7);
}

#[tokio::test]
async fn test_tools_list_varies_by_profile() {
    let (open_app, _) = app(AccessProfile::Open);
    let (_, _, body) = post_mcp(
        open_app,
        &JSON_HEADERS,
        &json!({"jsonrpc": "2.0", "method": "tools/list", "id": 1}),
    )
    .await;
    let open_names: Vec<String> = parse(&body)["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_owned())
        .collect();
    assert!(open_names.contains(&"list_all_exercises".to_owned()));
    assert!(open_names.contains(&"get_exercises".to_owned()));
    assert!(!open_names.contains(&"create_workout_program".to_owned()));

    let (auth_app, _) = app(AccessProfile::Authenticated);
    let (_, _, body) = post_mcp(
        auth_app,
        &[
            JSON_HEADERS[0],
            JSON_HEADERS[1],
            ("authorization", &common::bearer("u1")),
        ],
        &json!({"jsonrpc": "2.0", "method": "tools/list", "id": 1}),
    )
    .await;
    let auth_names: Vec<String> = parse(&body)["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_owned())
        .collect();
    assert!(auth_names.contains(&"create_workout_program".to_owned()));
    assert!(auth_names.contains(&"get_user_fitness_profile".to_owned()));
    assert!(!auth_names.contains(&"list_all_exercises".to_owned()));
}

#[tokio::test]
async fn test_resources_list_and_read() {
    let (list_app, _) = app(AccessProfile::Open);
    let (_, _, body) = post_mcp(
        list_app,
        &JSON_HEADERS,
        &json!({"jsonrpc": "2.0", "method": "resources/list", "id": 2}),
    )
    .await;
    let uris: Vec<String> = parse(&body)["result"]["resources"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["uri"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(
        uris,
        vec![
            "exercise://exercises",
            "exercise://categories",
            "exercise://stats"
        ]
    );

    let (read_app, _) = app(AccessProfile::Open);
    let (status, _, body) = post_mcp(
        read_app,
        &JSON_HEADERS,
        &json!({
            "jsonrpc": "2.0",
            "method": "resources/read",
            "params": {"uri": "exercise://stats"},
            "id": 3
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let block = &parse(&body)["result"]["contents"][0];
    assert_eq!(block["uri"], "exercise://stats");
    assert_eq!(block["mimeType"], "application/json");
    let stats: serde_json::Value = serde_json::from_str(block["text"].as_str().unwrap()).unwrap();
    assert_eq!(stats["total"], 5);
}

#[tokio::test]
async fn test_unknown_resource_uri_is_plain_text_error_in_200() {
    let (app, _) = app(AccessProfile::Open);
    let (status, _, body) = post_mcp(
        app,
        &JSON_HEADERS,
        &json!({
            "jsonrpc": "2.0",
            "method": "resources/read",
            "params": {"uri": "exercise://bogus"},
            "id": 4
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let block = &parse(&body)["result"]["contents"][0];
    assert_eq!(block["mimeType"], "text/plain");
    assert_eq!(block["text"], "Error: Unknown resource URI: exercise://bogus");
}

#[tokio::test]
async fn test_string_id_passes_through_untouched() {
    let (app, _) = app(AccessProfile::Open);
    let (_, _, body) = post_mcp(
        app,
        &JSON_HEADERS,
        &json!({"jsonrpc": "2.0", "method": "resources/list", "id": "req-abc"}),
    )
    .await;
    assert_eq!(parse(&body)["id"], "req-abc");
}
