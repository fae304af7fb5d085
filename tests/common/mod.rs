// ABOUTME: Shared helpers for integration tests: app construction, tokens, request plumbing
// ABOUTME: Builds routers over a seeded in-memory repository for both access profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code, missing_docs)]

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use exercisedb_mcp_server::config::{AccessProfile, CorsConfig, ServerConfig};
use exercisedb_mcp_server::mcp::resources::ServerResources;
use exercisedb_mcp_server::repository::{ContentRepository, LazyRepository, MemoryRepository};
use exercisedb_mcp_server::routes::router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Origin present in the test allow-list
pub const ALLOWED_ORIGIN: &str = "https://app.example.com";

/// Build a router over a seeded in-memory repository.
///
/// Returns the repository too so tests can insert documents directly.
pub fn app(profile: AccessProfile) -> (Router, Arc<MemoryRepository>) {
    let repo = Arc::new(MemoryRepository::with_seed_data());
    let config = ServerConfig {
        access_profile: profile,
        cors: CorsConfig {
            allowed_origins: vec![ALLOWED_ORIGIN.to_owned()],
        },
        ..ServerConfig::default()
    };
    let repository = LazyRepository::connected(repo.clone() as Arc<dyn ContentRepository>);
    let resources = Arc::new(ServerResources::new(config, repository));
    (router(resources), repo)
}

/// Forge a structurally valid JWT with the given claims; the signature is
/// garbage because the server never checks it
pub fn make_token(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{body}.unchecked")
}

/// Bearer header value for a token with a `sub` claim
pub fn bearer(user_id: &str) -> String {
    format!(
        "Bearer {}",
        make_token(&serde_json::json!({ "sub": user_id }))
    )
}

/// POST a raw body to /mcp with the given headers
pub async fn post_mcp_raw(
    app: Router,
    headers: &[(&str, &str)],
    body: &str,
) -> (StatusCode, HeaderMap, String) {
    let mut request = Request::builder().method("POST").uri("/mcp");
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    let response = app
        .oneshot(request.body(Body::from(body.to_owned())).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

/// POST a JSON-RPC message to /mcp
pub async fn post_mcp(
    app: Router,
    headers: &[(&str, &str)],
    message: &Value,
) -> (StatusCode, HeaderMap, String) {
    post_mcp_raw(app, headers, &message.to_string()).await
}

/// GET /mcp with the given headers
pub async fn get_mcp(app: Router, headers: &[(&str, &str)]) -> (StatusCode, HeaderMap, String) {
    let mut request = Request::builder().method("GET").uri("/mcp");
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Parse a response body as JSON
pub fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}
