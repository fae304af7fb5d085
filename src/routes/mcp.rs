// ABOUTME: HTTP entry points for the /mcp endpoint covering POST, GET, and OPTIONS
// ABOUTME: Runs the auth gate, origin check, parse, dispatch, and transport negotiation in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # MCP Endpoint Handlers
//!
//! The POST pipeline, in order:
//!
//! 1. Auth gate (authenticated profile only): missing or bad bearer
//!    credentials end the request with HTTP 401 and a JSON-RPC `-32001`
//!    error body.
//! 2. Origin check: a disallowed `Origin` ends the request with a raw-text
//!    HTTP 403. This is the one response that carries no CORS headers.
//! 3. Body parse: malformed JSON is not rejected, it degrades to an empty
//!    message and falls through the classification below.
//! 4. Response-like messages (a `result` or `error`, no `method`) are
//!    accepted with a bodyless HTTP 202.
//! 5. Messages with no method at all are rejected with HTTP 400.
//! 6. Everything else is dispatched, and the transport negotiator frames
//!    the reply per the `Accept` header.
//!
//! GET runs the same auth and origin gates, then the reduced negotiation
//! (SSE handshake or 405). OPTIONS answers the CORS preflight.

use crate::auth::{CredentialExtractor, UserContext};
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use crate::mcp::protocol::McpDispatcher;
use crate::mcp::resources::ServerResources;
use crate::mcp::streamable_http::{self, NegotiationOutcome};
use crate::middleware::cors::cors_headers;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Session id response header attached to SSE responses
pub const SESSION_ID_HEADER: &str = "X-Session-ID";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Render a negotiation outcome as an HTTP response with CORS headers
fn render(outcome: NegotiationOutcome) -> Response {
    let mut builder = Response::builder().status(outcome.status_code);
    if let Some(content_type) = outcome.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    if let Some(session_id) = &outcome.session_id {
        builder = builder.header(SESSION_ID_HEADER, session_id.as_str());
    }
    if let Some(allow) = outcome.allow {
        builder = builder.header(header::ALLOW, allow);
    }
    let mut response = builder
        .body(Body::from(outcome.body))
        .unwrap_or_else(|_| Response::new(Body::empty()));
    response.headers_mut().extend(cors_headers());
    response
}

/// HTTP 401 with a JSON-RPC auth error body
fn unauthorized(message: &str) -> Response {
    let body = json!({
        "jsonrpc": JSONRPC_VERSION,
        "error": {
            "code": error_codes::AUTH_ERROR,
            "message": message,
        },
        "id": Value::Null
    });
    let mut response = Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| Response::new(Body::empty()));
    response.headers_mut().extend(cors_headers());
    response
}

/// HTTP 403 with a raw text body; deliberately no CORS headers
fn forbidden_origin() -> Response {
    Response::builder()
        .status(StatusCode::FORBIDDEN)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("Forbidden: invalid origin"))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}

/// Run the auth gate for the configured access profile
fn authenticate(
    resources: &ServerResources,
    headers: &HeaderMap,
) -> Result<Option<UserContext>, Response> {
    if !resources.config.access_profile.requires_auth() {
        return Ok(None);
    }
    match CredentialExtractor::extract(header_str(headers, "authorization")) {
        Ok(user) => Ok(Some(user)),
        Err(err) => {
            warn!(error = %err, "Rejecting unauthenticated request");
            Err(unauthorized(&err.to_string()))
        }
    }
}

fn check_origin(resources: &ServerResources, headers: &HeaderMap) -> Result<(), Response> {
    let origin = header_str(headers, "origin");
    if resources.origin_validator.validate(origin) {
        Ok(())
    } else {
        warn!(origin = origin.unwrap_or(""), "Rejecting disallowed origin");
        Err(forbidden_origin())
    }
}

/// POST /mcp
pub async fn handle_post(
    State(resources): State<Arc<ServerResources>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let user = match authenticate(&resources, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if let Err(response) = check_origin(&resources, &headers) {
        return response;
    }

    // Malformed JSON degrades to an empty message rather than a parse error
    let request: JsonRpcRequest = serde_json::from_str(&body).unwrap_or_default();

    if request.is_response_like() {
        debug!("Accepting client response message without processing");
        return render(streamable_http::accepted());
    }
    let Some(method) = request.method.clone() else {
        return render(streamable_http::invalid_request());
    };

    let dispatcher = McpDispatcher::new(Arc::clone(&resources));
    let response: JsonRpcResponse = dispatcher.dispatch(&request, user.as_ref()).await;

    let accept = header_str(&headers, "accept").unwrap_or("");
    render(streamable_http::negotiate(
        accept,
        &method,
        &response,
        &resources.sessions,
    ))
}

/// GET /mcp
pub async fn handle_get(
    State(resources): State<Arc<ServerResources>>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authenticate(&resources, &headers) {
        return response;
    }
    if let Err(response) = check_origin(&resources, &headers) {
        return response;
    }

    let accept = header_str(&headers, "accept").unwrap_or("");
    render(streamable_http::negotiate_get(accept, &resources.sessions))
}

/// OPTIONS /mcp: CORS preflight
pub async fn handle_options() -> Response {
    let mut response = Response::builder()
        .status(StatusCode::OK)
        .body(Body::empty())
        .unwrap_or_else(|_| Response::new(Body::empty()));
    response.headers_mut().extend(cors_headers());
    response
}
