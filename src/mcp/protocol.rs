// ABOUTME: JSON-RPC method dispatcher routing MCP methods to schema, tool, and resource handlers
// ABOUTME: Unknown methods become -32601 error envelopes; tool failures stay inside success results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ExerciseDB MCP Contributors

//! # Method Dispatcher
//!
//! Routes the five MCP methods to their handlers. Responses carry the
//! request's id untouched, null ids included. Protocol-level errors
//! (unknown method, bad params) become JSON-RPC error envelopes; tool and
//! resource failures never do, they travel as `isError`/`text/plain`
//! payloads inside success results.

use crate::auth::UserContext;
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::mcp::resources::ServerResources;
use crate::mcp::schema::{get_resources, get_tools, InitializeResponse};
use crate::mcp::{resource_handlers, tool_handlers};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Dispatches JSON-RPC methods against shared server resources
pub struct McpDispatcher {
    resources: Arc<ServerResources>,
}

impl McpDispatcher {
    /// Create a dispatcher over the given server resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Dispatch one JSON-RPC request to its handler.
    ///
    /// `user` is `Some` on authenticated deployments where credential
    /// extraction succeeded; the transport enforces the auth gate before
    /// dispatch, so handlers treat `None` as "open deployment".
    #[instrument(skip(self, request, user), fields(method = request.method.as_deref().unwrap_or("")))]
    pub async fn dispatch(
        &self,
        request: &JsonRpcRequest,
        user: Option<&UserContext>,
    ) -> JsonRpcResponse {
        let id = request.id.clone();
        let Some(method) = request.method.as_deref() else {
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                "Invalid Request: method is required",
            );
        };
        debug!("dispatching method");

        match method {
            "initialize" => Self::initialize(id),
            "tools/list" => self.tools_list(id),
            "resources/list" => Self::resources_list(id),
            "tools/call" => self.tools_call(id, request.params.as_ref(), user).await,
            "resources/read" => self.resources_read(id, request.params.as_ref()).await,
            other => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Unknown method: {other}"),
            ),
        }
    }

    fn initialize(id: Option<Value>) -> JsonRpcResponse {
        match serde_json::to_value(InitializeResponse::current()) {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(err) => {
                JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, err.to_string())
            }
        }
    }

    fn tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools = get_tools(self.resources.config.access_profile);
        JsonRpcResponse::success(id, json!({"tools": tools}))
    }

    fn resources_list(id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(id, json!({"resources": get_resources()}))
    }

    async fn tools_call(
        &self,
        id: Option<Value>,
        params: Option<&Value>,
        user: Option<&UserContext>,
    ) -> JsonRpcResponse {
        let Some(name) = params.and_then(|p| p.get("name")).and_then(Value::as_str) else {
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "Missing required parameter: name",
            );
        };
        let arguments: Map<String, Value> = params
            .and_then(|p| p.get("arguments"))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let outcome = tool_handlers::call_tool(
            &self.resources,
            name,
            &arguments,
            user.map(|u| u.user_id.as_str()),
        )
        .await;
        JsonRpcResponse::success(id, outcome.into_value())
    }

    async fn resources_read(&self, id: Option<Value>, params: Option<&Value>) -> JsonRpcResponse {
        let Some(uri) = params.and_then(|p| p.get("uri")).and_then(Value::as_str) else {
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "Missing required parameter: uri",
            );
        };
        let result = resource_handlers::read_resource(&self.resources, uri).await;
        JsonRpcResponse::success(id, result)
    }
}
