// ABOUTME: JSON-RPC 2.0 envelope types shared by the MCP dispatcher and the HTTP transport
// ABOUTME: Provides request, response, and error structures plus standard error code constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # JSON-RPC 2.0 Foundation
//!
//! A single implementation of the JSON-RPC 2.0 envelope used by the MCP
//! dispatcher and the Streamable HTTP transport.
//!
//! One deliberate looseness: [`JsonRpcRequest::method`] is optional. An
//! inbound message without a `method` is not a request at all but a
//! response or notification echoed back by a client, and the transport
//! accepts (HTTP 202) without processing it. The `result`/`error` fields
//! exist only to detect that case on the inbound side.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 version string
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 Request
///
/// Inbound envelope. `method` is `None` when the message is a client-sent
/// response or notification rather than a call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (always "2.0" on well-formed input)
    #[serde(default)]
    pub jsonrpc: String,

    /// Method name to invoke; absent for response-only messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Optional parameters for the method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    /// Request identifier (for correlation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    /// Result carried by an inbound client response (never serialized back)
    #[serde(skip_serializing, default)]
    pub result: Option<Value>,

    /// Error carried by an inbound client response (never serialized back)
    #[serde(skip_serializing, default)]
    pub error: Option<Value>,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request
    #[must_use]
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method: Some(method.into()),
            params,
            id: Some(Value::Number(1.into())),
            result: None,
            error: None,
        }
    }

    /// Create a new request with a specific ID
    #[must_use]
    pub fn with_id(method: impl Into<String>, params: Option<Value>, id: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method: Some(method.into()),
            params,
            id: Some(id),
            result: None,
            error: None,
        }
    }

    /// True when this message carries a `result` or `error` but no `method`,
    /// i.e. it is a response/notification the server accepts but does not
    /// process.
    #[must_use]
    pub const fn is_response_like(&self) -> bool {
        self.method.is_none() && (self.result.is_some() || self.error.is_some())
    }
}

/// JSON-RPC 2.0 Response
///
/// Exactly one of `result` or `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,

    /// Result of the method call (mutually exclusive with error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error information (mutually exclusive with result)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,

    /// Request identifier for correlation
    pub id: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response
    #[must_use]
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    #[must_use]
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
            id,
        }
    }

    /// Create an error response with additional data
    #[must_use]
    pub fn error_with_data(
        id: Option<Value>,
        code: i32,
        message: impl Into<String>,
        data: Value,
    ) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: Some(data),
            }),
            id,
        }
    }

    /// Check if this is an error response
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// JSON-RPC 2.0 Error Object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code
    pub code: i32,

    /// Human-readable error message
    pub message: String,

    /// Additional error information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Standard JSON-RPC error codes, plus the MCP auth extension code
pub mod error_codes {
    /// Parse error - invalid JSON
    pub const PARSE_ERROR: i32 = -32700;

    /// Invalid Request - not a valid JSON-RPC request object
    pub const INVALID_REQUEST: i32 = -32600;

    /// Method not found
    pub const METHOD_NOT_FOUND: i32 = -32601;

    /// Invalid params
    pub const INVALID_PARAMS: i32 = -32602;

    /// Internal error
    pub const INTERNAL_ERROR: i32 = -32603;

    /// Authentication failure (server-defined range)
    pub const AUTH_ERROR: i32 = -32001;
}
