// ABOUTME: Streamable HTTP transport negotiation deciding JSON vs SSE framing per request
// ABOUTME: Implements Accept-header content negotiation, SSE frame formatting, and session issuance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # Streamable HTTP Transport Negotiation
//!
//! The protocol state machine at the heart of this server. Given an
//! incoming request's `Accept` header, its JSON-RPC method, and the
//! dispatcher's response, [`negotiate`] decides status code, content type,
//! and body framing. The rules, in order:
//!
//! 1. A client accepting neither `application/json` nor
//!    `text/event-stream` is rejected with 400 before the response is
//!    even considered.
//! 2. All JSON-RPC request methods prefer a plain JSON document.
//! 3. JSON is emitted when accepted and either preferred or SSE is
//!    unsupported.
//! 4. Otherwise an SSE stream with a single `response` event and a fresh
//!    session id is emitted.
//! 5. A defensive JSON fallback closes the match; rule 1 already excludes
//!    the unreachable case.
//!
//! GET requests follow a reduced negotiation: SSE or 405.
//!
//! The SSE frame format is bit-exact for client compatibility:
//!
//! ```text
//! id: <id>\n          (only if id non-null)
//! event: <event>\n    (only if event non-empty)
//! data: <json>\n\n
//! ```

use crate::jsonrpc::{error_codes, JsonRpcResponse, JSONRPC_VERSION};
use crate::mcp::session::SessionRegistry;
use serde_json::{json, Value};

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// SSE content type
pub const CONTENT_TYPE_SSE: &str = "text/event-stream";

/// JSON-RPC request methods that prefer a plain JSON response.
///
/// Everything in this table is a request (as opposed to a bare
/// notification or response), so a single JSON document is the natural
/// framing even when the client also accepts SSE.
const JSON_PREFERRING_METHODS: [&str; 5] = [
    "initialize",
    "tools/list",
    "resources/list",
    "tools/call",
    "resources/read",
];

/// What the client's Accept header supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptSupport {
    /// Accepts `application/json`
    pub json: bool,
    /// Accepts `text/event-stream`
    pub sse: bool,
}

impl AcceptSupport {
    /// Parse an Accept header value (substring semantics, as deployed
    /// clients send exact media types)
    #[must_use]
    pub fn parse(accept: &str) -> Self {
        Self {
            json: accept.contains(CONTENT_TYPE_JSON),
            sse: accept.contains(CONTENT_TYPE_SSE),
        }
    }
}

/// The negotiator's sole output, consumed by the HTTP entry points
#[derive(Debug, Clone)]
pub struct NegotiationOutcome {
    /// HTTP status code
    pub status_code: u16,
    /// Response content type; `None` for bodyless responses
    pub content_type: Option<&'static str>,
    /// Freshly issued session id, when an SSE stream was opened
    pub session_id: Option<String>,
    /// `Allow` header value for 405 responses
    pub allow: Option<&'static str>,
    /// Response body
    pub body: String,
}

impl NegotiationOutcome {
    fn json(body: String) -> Self {
        Self {
            status_code: 200,
            content_type: Some(CONTENT_TYPE_JSON),
            session_id: None,
            allow: None,
            body,
        }
    }
}

/// Format a single SSE frame
///
/// `id` is emitted only when non-null, `event` only when non-empty.
#[must_use]
pub fn sse_frame(id: Option<&Value>, event: &str, payload: &Value) -> String {
    let mut frame = String::new();
    if let Some(id) = id {
        if !id.is_null() {
            let rendered = match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            frame.push_str(&format!("id: {rendered}\n"));
        }
    }
    if !event.is_empty() {
        frame.push_str(&format!("event: {event}\n"));
    }
    frame.push_str(&format!("data: {payload}\n\n"));
    frame
}

/// HTTP 202 outcome for inbound responses/notifications the server
/// accepts but does not process
#[must_use]
pub fn accepted() -> NegotiationOutcome {
    NegotiationOutcome {
        status_code: 202,
        content_type: None,
        session_id: None,
        allow: None,
        body: String::new(),
    }
}

/// HTTP 400 outcome for messages that are neither requests nor responses
#[must_use]
pub fn invalid_request() -> NegotiationOutcome {
    let body = json!({
        "jsonrpc": JSONRPC_VERSION,
        "error": {
            "code": error_codes::INVALID_REQUEST,
            "message": "Invalid Request: method is required"
        },
        "id": Value::Null
    });
    NegotiationOutcome {
        status_code: 400,
        content_type: Some(CONTENT_TYPE_JSON),
        session_id: None,
        allow: None,
        body: body.to_string(),
    }
}

fn not_acceptable() -> NegotiationOutcome {
    let body = json!({
        "jsonrpc": JSONRPC_VERSION,
        "error": {
            "code": error_codes::INVALID_REQUEST,
            "message": "Not Acceptable: client must accept application/json or text/event-stream"
        },
        "id": Value::Null
    });
    NegotiationOutcome {
        status_code: 400,
        content_type: Some(CONTENT_TYPE_JSON),
        session_id: None,
        allow: None,
        body: body.to_string(),
    }
}

/// Decide status code, content type, and body framing for a POST response
#[must_use]
pub fn negotiate(
    accept: &str,
    method: &str,
    response: &JsonRpcResponse,
    sessions: &SessionRegistry,
) -> NegotiationOutcome {
    let support = AcceptSupport::parse(accept);

    // Rule 1: protocol violation, independent of the response
    if !support.json && !support.sse {
        return not_acceptable();
    }

    // Rule 2
    let prefer_json = JSON_PREFERRING_METHODS.contains(&method);

    // Serialization of these envelopes cannot fail in practice; keep a
    // well-formed error body if it somehow does.
    let payload = serde_json::to_value(response).unwrap_or_else(|_| {
        json!({
            "jsonrpc": JSONRPC_VERSION,
            "error": {"code": error_codes::INTERNAL_ERROR, "message": "Internal error"},
            "id": Value::Null
        })
    });

    // Rule 3
    if support.json && (prefer_json || !support.sse) {
        return NegotiationOutcome::json(payload.to_string());
    }

    // Rule 4
    if support.sse {
        return NegotiationOutcome {
            status_code: 200,
            content_type: Some(CONTENT_TYPE_SSE),
            session_id: Some(sessions.issue()),
            allow: None,
            body: sse_frame(response.id.as_ref(), "response", &payload),
        };
    }

    // Rule 5: defensive fallback, unreachable past rule 1
    NegotiationOutcome::json(payload.to_string())
}

/// Reduced negotiation for GET requests: SSE or 405
///
/// A GET that accepts `text/event-stream` opens a stream, issues a fresh
/// session id, and emits a single `connected` event before the body
/// completes; there is no persistent push channel.
#[must_use]
pub fn negotiate_get(accept: &str, sessions: &SessionRegistry) -> NegotiationOutcome {
    let support = AcceptSupport::parse(accept);
    if !support.sse {
        return NegotiationOutcome {
            status_code: 405,
            content_type: None,
            session_id: None,
            allow: Some("POST"),
            body: String::new(),
        };
    }

    let session_id = sessions.issue();
    let payload = json!({"type": "connected", "sessionId": session_id});
    NegotiationOutcome {
        status_code: 200,
        content_type: Some(CONTENT_TYPE_SSE),
        body: sse_frame(None, "connected", &payload),
        session_id: Some(session_id),
        allow: None,
    }
}
